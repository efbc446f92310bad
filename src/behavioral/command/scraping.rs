//! Web scraping as queued commands: a genres page fans out into genre
//! listing pages, which fan out into movie pages.
//!
//! Downloads go through [`Fetcher`] so the same commands run against the
//! live site ([`HttpFetcher`]) or a canned one ([`InMemoryFetcher`]).

use std::collections::HashMap;
use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::queue::{Queue, QueuedCommand};
use crate::error::{PatternError, Result};

lazy_static! {
    static ref GENRE_LINK: Regex =
        Regex::new(r#"href="([^"]*/search/title\?genres=[^"]*)""#).expect("valid regex");
    static ref MOVIE_LINK: Regex =
        Regex::new(r#"href="(/title/[^"]*?/)\?ref_=adv_li_tt""#).expect("valid regex");
    static ref NEXT_LINK: Regex = Regex::new(r"Next &#187;</a>").expect("valid regex");
    static ref MOVIE_TITLE: Regex = Regex::new(r"<h1[^>]*>(.*?)</h1>").expect("valid regex");
    static ref ORIGIN: Regex = Regex::new(r"^(https?://[^/?#]+)").expect("valid regex");
}

pub const IMDB_GENRES_URL: &str = "https://www.imdb.com/feature/genre/";

// ============================================================================
// Fetching
// ============================================================================

pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("design-patterns/0.1")
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(PatternError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

/// Serves pages from a map. Unknown URLs are [`PatternError::PageNotFound`].
#[derive(Debug, Default, Clone)]
pub struct InMemoryFetcher {
    pages: HashMap<String, String>,
}

impl InMemoryFetcher {
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }
}

impl Fetcher for InMemoryFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| PatternError::PageNotFound(url.to_string()))
    }
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScrapeCommand {
    Genres { url: String },
    GenrePage { url: String, page: u32 },
    Movie { url: String },
}

impl ScrapeCommand {
    pub fn genres(url: impl Into<String>) -> Self {
        Self::Genres { url: url.into() }
    }

    /// The URL actually downloaded; genre pages carry the page number.
    pub fn page_url(&self) -> String {
        match self {
            Self::Genres { url } | Self::Movie { url } => url.clone(),
            Self::GenrePage { url, page } => {
                let separator = if url.contains('?') { '&' } else { '?' };
                format!("{url}{separator}page={page}")
            }
        }
    }

    fn parse(&self, html: &str, queue: &Queue<Self>) -> Result<String> {
        match self {
            Self::Genres { .. } => {
                let genres: Vec<&str> = GENRE_LINK
                    .captures_iter(html)
                    .filter_map(|c| c.get(1).map(|m| m.as_str()))
                    .collect();
                for genre in &genres {
                    queue.add(&Self::GenrePage {
                        url: genre.to_string(),
                        page: 1,
                    })?;
                }
                Ok(format!(
                    "GenresScrapingCommand: Discovered {} genres.",
                    genres.len()
                ))
            }
            Self::GenrePage { url, page } => {
                let origin = origin(url);
                let movies: Vec<&str> = MOVIE_LINK
                    .captures_iter(html)
                    .filter_map(|c| c.get(1).map(|m| m.as_str()))
                    .collect();
                for path in &movies {
                    queue.add(&Self::Movie {
                        url: format!("{origin}{path}"),
                    })?;
                }
                if NEXT_LINK.is_match(html) {
                    queue.add(&Self::GenrePage {
                        url: url.clone(),
                        page: page + 1,
                    })?;
                }
                Ok(format!(
                    "GenrePageScrapingCommand: Discovered {} movies.",
                    movies.len()
                ))
            }
            Self::Movie { .. } => {
                let title = MOVIE_TITLE
                    .captures(html)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().trim())
                    .unwrap_or("<untitled>");
                Ok(format!("MovieScrapingCommand: Parsed movie {title}."))
            }
        }
    }
}

impl QueuedCommand for ScrapeCommand {
    type Context = dyn Fetcher;

    fn execute(&self, queue: &Queue<Self>, fetcher: &dyn Fetcher) -> Result<Vec<String>> {
        let url = self.page_url();
        let html = fetcher.fetch(&url)?;
        let downloaded = format!("WebScrapingCommand: Downloaded {url}");
        Ok(vec![downloaded, self.parse(&html, queue)?])
    }
}

/// `https://host/some/path` -> `https://host`.
fn origin(url: &str) -> &str {
    ORIGIN
        .captures(url)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

// ============================================================================
// Offline Demo Site
// ============================================================================

pub const DEMO_GENRES_URL: &str = "https://movies.example/feature/genre/";

/// A tiny site shaped like the real one: two genres, one of them with a
/// second listing page.
pub fn demo_site() -> InMemoryFetcher {
    let comedy = "https://movies.example/search/title?genres=comedy";
    let drama = "https://movies.example/search/title?genres=drama";

    InMemoryFetcher::default()
        .with_page(
            DEMO_GENRES_URL,
            format!(r#"<a href="{comedy}">Comedy</a> <a href="{drama}">Drama</a>"#),
        )
        .with_page(
            format!("{comedy}&page=1"),
            r#"<a href="/title/tt001/?ref_=adv_li_tt">A</a>
               <a href="/title/tt002/?ref_=adv_li_tt">B</a>
               <a href="?page=2">Next &#187;</a>"#,
        )
        .with_page(
            format!("{comedy}&page=2"),
            r#"<a href="/title/tt003/?ref_=adv_li_tt">C</a>"#,
        )
        .with_page(
            format!("{drama}&page=1"),
            r#"<a href="/title/tt004/?ref_=adv_li_tt">D</a>"#,
        )
        .with_page(
            "https://movies.example/title/tt001/",
            r#"<h1 itemprop="name" class="">Airplane!</h1>"#,
        )
        .with_page(
            "https://movies.example/title/tt002/",
            r#"<h1 itemprop="name" class="">Groundhog Day</h1>"#,
        )
        .with_page(
            "https://movies.example/title/tt003/",
            r#"<h1 itemprop="name" class="">Some Like It Hot</h1>"#,
        )
        .with_page(
            "https://movies.example/title/tt004/",
            r#"<h1 itemprop="name" class="">Casablanca</h1>"#,
        )
}

pub fn scraping_example(
    queue: &Queue<ScrapeCommand>,
    fetcher: &(dyn Fetcher + 'static),
    start: &str,
) -> Result<Vec<String>> {
    if queue.is_empty()? {
        queue.add(&ScrapeCommand::genres(start))?;
    }
    Ok(queue.work(fetcher)?.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_appends_page_number() {
        let page = ScrapeCommand::GenrePage {
            url: "https://x.test/search/title?genres=horror".to_string(),
            page: 3,
        };
        assert_eq!(
            page.page_url(),
            "https://x.test/search/title?genres=horror&page=3"
        );

        let plain = ScrapeCommand::GenrePage {
            url: "https://x.test/list".to_string(),
            page: 1,
        };
        assert_eq!(plain.page_url(), "https://x.test/list?page=1");
    }

    #[test]
    fn test_origin() {
        assert_eq!(
            origin("https://movies.example/search/title?x"),
            "https://movies.example"
        );
        assert_eq!(origin("not a url"), "");
    }

    #[test]
    fn test_in_memory_fetcher_missing_page() {
        let err = InMemoryFetcher::default().fetch("https://nowhere.test/").unwrap_err();
        assert!(matches!(err, PatternError::PageNotFound(_)));
    }

    #[test]
    fn test_demo_site_is_fully_crawled() {
        let queue = Queue::<ScrapeCommand>::in_memory().unwrap();
        let site = demo_site();
        let output = scraping_example(&queue, &site, DEMO_GENRES_URL).unwrap();

        assert!(output.contains(&"GenresScrapingCommand: Discovered 2 genres.".to_string()));
        assert!(output.contains(&"GenrePageScrapingCommand: Discovered 2 movies.".to_string()));

        let titles: Vec<&String> = output
            .iter()
            .filter(|line| line.starts_with("MovieScrapingCommand"))
            .collect();
        assert_eq!(titles.len(), 4);
        assert!(output.contains(&"MovieScrapingCommand: Parsed movie Casablanca.".to_string()));
        assert!(queue.is_empty().unwrap());
    }

    #[test]
    fn test_missing_page_fails_only_that_command() {
        let queue = Queue::<ScrapeCommand>::in_memory().unwrap();
        let site = InMemoryFetcher::default().with_page(
            DEMO_GENRES_URL,
            r#"<a href="https://movies.example/search/title?genres=noir">Noir</a>"#,
        );
        queue.add(&ScrapeCommand::genres(DEMO_GENRES_URL)).unwrap();

        let report = queue.work(&site).unwrap();
        assert_eq!(report.completed, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_movie_without_title() {
        let queue = Queue::<ScrapeCommand>::in_memory().unwrap();
        let line = ScrapeCommand::Movie {
            url: "https://x.test/title/tt9/".to_string(),
        }
        .parse("<p>nothing</p>", &queue)
        .unwrap();
        assert_eq!(line, "MovieScrapingCommand: Parsed movie <untitled>.");
    }
}
