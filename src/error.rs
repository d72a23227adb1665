//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Http(reqwest::Error),
    Wav(hound::Error),
    Serde(serde_json::Error),
    /// Precondition violation (empty input, non-positive bound, bad argument).
    InvalidInput(String),
    /// Input intervals are unordered, inverted or too far apart.
    Consistency(String),
    /// Malformed TextGrid file.
    TextGrid(String),
    /// Page does not have the expected structure.
    Scrape(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "invalid glob pattern: {}", e),
            Error::Http(e) => write!(f, "http error: {}", e),
            Error::Wav(e) => write!(f, "wav error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            Error::Consistency(msg) => write!(f, "inconsistent intervals: {}", msg),
            Error::TextGrid(msg) => write!(f, "malformed TextGrid: {}", msg),
            Error::Scrape(msg) => write!(f, "scraping failed: {}", msg),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Glob(e) => Some(e),
            Error::GlobPattern(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Wav(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<hound::Error> for Error {
    fn from(e: hound::Error) -> Error {
        Error::Wav(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
