//! Chapter page parsing.
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::books;
use crate::error::Error;

lazy_static! {
    static ref NON_ALPHABETIC: Regex = Regex::new(r"[^a-zA-Z\s]").unwrap();
}

/// Trailing words of navigation and widget spans.
const BOILERPLATE_ENDINGS: [&str; 4] = ["Loading", "Learn More", "Chapter", "Films"];

/// Text and file name of a chapter page.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    name: String,
    text: String,
}

impl Chapter {
    /// Get a reference to the chapter's file name (without extension).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a reference to the chapter's text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Remove everything but ASCII letters and whitespace.
pub fn clean_text(text: &str) -> String {
    NON_ALPHABETIC.replace_all(text, "").into_owned()
}

fn is_boilerplate(text: &str) -> bool {
    BOILERPLATE_ENDINGS
        .iter()
        .any(|ending| text.ends_with(ending))
}

/// Text of an element, each text node being trimmed.
fn stripped_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Extracts chapters from pages.
pub struct ChapterParser {
    spans: Selector,
    heading: Selector,
}

impl ChapterParser {
    pub fn new() -> Result<Self, Error> {
        let parse =
            |s: &str| Selector::parse(s).map_err(|e| Error::Scrape(format!("selector {}: {:?}", s, e)));
        Ok(Self {
            spans: parse("span")?,
            heading: parse("h1.book-chapter-text")?,
        })
    }

    /// Parse a chapter page.
    ///
    /// The text is made of every `span` of the page, cleaned with [clean_text],
    /// minus navigation/widget ones, each prefixed by a space.
    /// The name comes from the `h1.book-chapter-text` heading, see [books::file_name].
    pub fn parse(&self, html: &str) -> Result<Chapter, Error> {
        let document = Html::parse_document(html);

        let mut text = String::new();
        for span in document.select(&self.spans) {
            let cleaned = clean_text(&stripped_text(span));
            if !is_boilerplate(&cleaned) {
                text.push(' ');
                text.push_str(&cleaned);
            }
        }

        let heading: String = document
            .select(&self.heading)
            .next()
            .ok_or_else(|| Error::Scrape("no chapter heading".to_string()))?
            .text()
            .collect();
        let name = books::file_name(&heading);
        if name.is_empty() {
            return Err(Error::Scrape("empty chapter heading".to_string()));
        }

        Ok(Chapter { name, text })
    }
}
