//! Iterator demo. The CSV section walks the cat fixture named in the
//! settings.
//!
//! Run with: cargo run --bin iterator

use design_patterns::config::Settings;
use design_patterns::{behavioral::iterator, logging};

fn main() -> design_patterns::Result<()> {
    let settings = Settings::load()?;
    logging::init(&settings.logging.filter);
    tracing::debug!(?settings, "settings loaded");

    iterator::run(&settings.fixtures.cats_csv);
    Ok(())
}
