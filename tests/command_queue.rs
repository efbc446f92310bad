use design_patterns::behavioral::command::documents::{seed_documents, DocumentCommand};
use design_patterns::behavioral::command::queue::{Queue, Status};
use design_patterns::behavioral::command::scraping::{
    demo_site, InMemoryFetcher, ScrapeCommand, DEMO_GENRES_URL,
};
use tempfile::TempDir;

#[test]
fn test_queue_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("commands.sqlite");

    {
        let queue = Queue::<DocumentCommand>::open(&path).unwrap();
        assert_eq!(seed_documents(&queue, "report.pdf").unwrap(), 3);
    }

    let queue = Queue::<DocumentCommand>::open(&path).unwrap();
    assert_eq!(queue.pending_count().unwrap(), 3);

    let job = queue.next_pending().unwrap().unwrap();
    assert_eq!(job.command, DocumentCommand::print("report.pdf"));
}

#[test]
fn test_rows_run_at_most_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("commands.sqlite");

    let queue = Queue::<DocumentCommand>::open(&path).unwrap();
    seed_documents(&queue, "a.pdf").unwrap();
    let first = queue.work(&()).unwrap();
    assert_eq!(first.completed, 3);

    let reopened = Queue::<DocumentCommand>::open(&path).unwrap();
    assert!(reopened.is_empty().unwrap());
    assert!(reopened.work(&()).unwrap().output.is_empty());
    assert_eq!(reopened.status(1).unwrap(), Some(Status::Completed));
    assert_eq!(reopened.status(99).unwrap(), None);
}

#[test]
fn test_drained_queue_is_seeded_again() {
    let dir = TempDir::new().unwrap();
    let queue = Queue::<DocumentCommand>::open(dir.path().join("q.sqlite")).unwrap();

    seed_documents(&queue, "a.pdf").unwrap();
    queue.work(&()).unwrap();
    assert_eq!(seed_documents(&queue, "b.pdf").unwrap(), 3);

    let report = queue.work(&()).unwrap();
    assert_eq!(
        report.output[0],
        "PrintDocumentCommand: Printing document 'b.pdf'."
    );
}

#[test]
fn test_scrape_crawl_on_disk() {
    let dir = TempDir::new().unwrap();
    let queue = Queue::<ScrapeCommand>::open(dir.path().join("scrape.sqlite")).unwrap();
    queue.add(&ScrapeCommand::genres(DEMO_GENRES_URL)).unwrap();

    let report = queue.work(&demo_site()).unwrap();
    // genres + 3 listing pages + 4 movies
    assert_eq!(report.completed, 8);
    assert_eq!(report.failed, 0);
}

#[test]
fn test_unreachable_start_page_fails_row() {
    let queue = Queue::<ScrapeCommand>::in_memory().unwrap();
    let id = queue.add(&ScrapeCommand::genres("https://offline.test/")).unwrap();

    let report = queue.work(&InMemoryFetcher::default()).unwrap();
    assert_eq!(report.failed, 1);
    assert_eq!(queue.status(id).unwrap(), Some(Status::Failed));
}
