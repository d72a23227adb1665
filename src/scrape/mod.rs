/*! Chapter scraping

Fetches translated chapter pages and saves their text, one file per chapter.
Pages are fetched one after the other with a blocking client.

File names are built from the page's chapter heading, with book names translated to English
(see [books::file_name]).
!*/
pub mod books;
mod chapter;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info, log_enabled, warn, Level};
use reqwest::Url;

pub use chapter::{clean_text, Chapter, ChapterParser};

use crate::error::Error;

/// holds urls to scrape and
/// http client that will make the requests.
pub struct Scraper {
    urls: Vec<Url>,
    client: reqwest::blocking::Client,
    parser: ChapterParser,
}

impl Scraper {
    pub fn new(urls: Vec<Url>) -> Result<Self, Error> {
        Ok(Self {
            urls,
            client: reqwest::blocking::Client::new(),
            parser: ChapterParser::new()?,
        })
    }

    /// Read urls from a file (one per line).
    /// Blank lines are skipped, and invalid ones are logged then skipped.
    pub fn from_urls_file(urls_file: &File) -> Result<Self, Error> {
        debug!("Scraper using {:#?}", urls_file);
        let f = BufReader::new(urls_file);

        let mut lines = Vec::new();
        for line in f.lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }

        // attempt to parse urls
        // and collect failures
        let (urls, failures): (Vec<_>, Vec<_>) = lines
            .iter()
            .map(|line| Url::parse(line).map_err(|e| (line, e)))
            .partition(Result::is_ok);

        if log_enabled!(Level::Debug) {
            debug!(
                "Got {valid}/{total} valid URLs",
                valid = urls.len(),
                total = urls.len() + failures.len()
            )
        }

        for (line, err) in failures.into_iter().filter_map(Result::err) {
            warn!("skipping {:?}: {}", line, err);
        }

        Self::new(urls.into_iter().filter_map(Result::ok).collect())
    }

    /// Get a reference to the scraper's urls.
    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// Fetch `url` and store its chapter text in `dst`/`name`.txt.
    pub fn scrape(&self, url: &Url, dst: &Path) -> Result<PathBuf, Error> {
        debug!("fetching {}", url);
        let body = self
            .client
            .get(url.clone())
            .send()?
            .error_for_status()?
            .text()?;

        let chapter = self.parser.parse(&body)?;
        let path = dst.join(format!("{}.txt", chapter.name()));
        std::fs::write(&path, chapter.text())?;

        info!("{} -> {:?}", url, path);
        Ok(path)
    }

    /// sequentially scrape urls, creating `dst` if needed.
    pub fn scrape_all(&self, dst: &Path) -> Result<Vec<Result<PathBuf, Error>>, Error> {
        std::fs::create_dir_all(dst)?;
        let nb_links = self.urls.len();
        Ok(self
            .urls
            .iter()
            .enumerate()
            .map(|(id, url)| {
                info!("scraping {}/{}", id + 1, nb_links);
                self.scrape(url, dst)
            })
            .collect())
    }
}
