/*! Corpus statistics

Counts token types and tokens of the train/dev/test splits of a text corpus,
and measures how much of dev and test is out of the train vocabulary.

Each split is a directory of `.txt` files, tokenized on whitespace.

OOV types are the types of a split that never occur in train. This differs from
a count of the types that are merely more frequent in the split than in train,
so figures are lower than those of tools computing the latter.
!*/
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use crate::error::Error;

/// Occurrence count of each token.
pub type TokenCounts = HashMap<String, u64>;

/// Add the whitespace-separated tokens of `text` to `counts`.
pub fn update_counts(counts: &mut TokenCounts, text: &str) {
    for token in text.split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
}

/// Count the tokens of every `.txt` file in `dir`.
pub fn count_tokens(dir: &Path) -> Result<TokenCounts, Error> {
    if !dir.is_dir() {
        return Err(Error::InvalidInput(format!("{:?} is not a directory", dir)));
    }

    let pattern = format!("{}/*.txt", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut counts = TokenCounts::new();
    let mut nb_files = 0;

    for path in glob::glob(&pattern)? {
        let path = path?;
        debug!("counting tokens of {:?}", path);
        let reader = BufReader::new(File::open(&path)?);
        for line in reader.lines() {
            update_counts(&mut counts, &line?);
        }
        nb_files += 1;
    }

    info!("{:?}: {} files, {} types", dir, nb_files, counts.len());
    Ok(counts)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitStats {
    pub types: usize,
    pub tokens: u64,
}

impl From<&TokenCounts> for SplitStats {
    fn from(counts: &TokenCounts) -> Self {
        Self {
            types: counts.len(),
            tokens: counts.values().sum(),
        }
    }
}

/// Out of vocabulary measures of a split against a reference vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OovStats {
    /// number of types absent from the reference
    pub types: usize,
    /// number of occurrences of these types
    pub tokens: u64,
    /// `tokens` over the split's total token count (0 on an empty split)
    pub rate: f64,
}

impl OovStats {
    pub fn new(reference: &TokenCounts, counts: &TokenCounts) -> Self {
        let (types, tokens) = counts
            .iter()
            .filter(|(token, _)| !reference.contains_key(*token))
            .fold((0, 0), |(types, tokens), (_, count)| (types + 1, tokens + *count));

        let total: u64 = counts.values().sum();
        let rate = if total == 0 {
            0.0
        } else {
            tokens as f64 / total as f64
        };

        Self {
            types,
            tokens,
            rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub train: SplitStats,
    pub dev: SplitStats,
    pub test: SplitStats,
    pub dev_oov: OovStats,
    pub test_oov: OovStats,
}

impl Report {
    pub fn new(train: &TokenCounts, dev: &TokenCounts, test: &TokenCounts) -> Self {
        Self {
            train: train.into(),
            dev: dev.into(),
            test: test.into(),
            dev_oov: OovStats::new(train, dev),
            test_oov: OovStats::new(train, test),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, split) in [("Train", &self.train), ("Dev", &self.dev), ("Test", &self.test)] {
            writeln!(f, "{} split:", name)?;
            writeln!(f, "\tTypes: {}", split.types)?;
            writeln!(f, "\tTokens: {}", split.tokens)?;
        }
        writeln!(f)?;
        for (name, oov) in [("Dev", &self.dev_oov), ("Test", &self.test_oov)] {
            writeln!(
                f,
                "{} OOV types in {} ({} tokens, {:.2}%)",
                oov.types,
                name,
                oov.tokens,
                oov.rate * 100.0
            )?;
        }
        Ok(())
    }
}

/// Count the three splits (in parallel) and build the report.
pub fn stats(train: &Path, dev: &Path, test: &Path) -> Result<Report, Error> {
    let (train, (dev, test)) = rayon::join(
        || count_tokens(train),
        || rayon::join(|| count_tokens(dev), || count_tokens(test)),
    );
    Ok(Report::new(&train?, &dev?, &test?))
}
