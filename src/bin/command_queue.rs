//! Works the persistent command queue.
//!
//! Run with:
//!   cargo run --bin command_queue                 # document commands, SQLite file
//!   cargo run --bin command_queue -- scrape       # crawl the bundled offline site
//!   cargo run --bin command_queue -- scrape --live
//!
//! Document commands persist in the database named by `[queue] database`
//! (default `commands.sqlite`); a fresh or drained queue is seeded with
//! print, save and convert. Scrape runs use an in-memory queue.

use std::env;

use design_patterns::behavioral::command::documents::{seed_documents, DocumentCommand};
use design_patterns::behavioral::command::queue::{Queue, WorkReport};
use design_patterns::behavioral::command::scraping::{
    demo_site, Fetcher, HttpFetcher, ScrapeCommand, DEMO_GENRES_URL, IMDB_GENRES_URL,
};
use design_patterns::config::Settings;
use design_patterns::{logging, output};

fn main() -> design_patterns::Result<()> {
    let settings = Settings::load()?;
    logging::init(&settings.logging.filter);
    tracing::debug!(?settings, "settings loaded");

    let args: Vec<String> = env::args().skip(1).collect();
    let live = args.iter().any(|a| a == "--live");

    let report = match args.first().map(String::as_str) {
        Some("scrape") => scrape(live)?,
        _ => documents(&settings)?,
    };

    output::lines(&report.output);
    println!();
    println!("Completed: {}, failed: {}", report.completed, report.failed);
    Ok(())
}

fn documents(settings: &Settings) -> design_patterns::Result<WorkReport> {
    output::title("Command Queue: Documents");

    let queue = Queue::<DocumentCommand>::open(&settings.queue.database)?;
    let added = seed_documents(&queue, "Document1.pdf")?;
    tracing::info!(added, database = %settings.queue.database.display(), "queue ready");

    queue.work(&())
}

fn scrape(live: bool) -> design_patterns::Result<WorkReport> {
    output::title("Command Queue: Web Scraping");

    let (fetcher, start): (Box<dyn Fetcher>, &str) = if live {
        (Box::new(HttpFetcher::new()?), IMDB_GENRES_URL)
    } else {
        (Box::new(demo_site()), DEMO_GENRES_URL)
    };

    let queue = Queue::<ScrapeCommand>::in_memory()?;
    queue.add(&ScrapeCommand::genres(start))?;
    queue.work(fetcher.as_ref())
}
