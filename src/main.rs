//! # corpus-prep
//!
//! Data preparation tools for a speech/text corpus.
//!
//! ## Getting started
//!
//! ```sh
//! corpus-prep 0.1.0
//! speech/text corpus preparation tools.
//!
//! USAGE:
//!     corpus-prep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help      Prints this message or the help of the given subcommand(s)
//!     scrape    Scrape chapter texts
//!     split     Split aligned audio and transcripts into bounded segments
//!     stats     Count types, tokens and OOV rates of train/dev/test splits
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=info corpus-prep split in out`).

use std::fs::File;

use corpus_prep::error::Error;
use corpus_prep::processing::{split, stats};
use corpus_prep::scrape::Scraper;
use corpus_prep::segment::Segmenter;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::CorpusPrep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::CorpusPrep::Split(s) => {
            let mut segmenter = Segmenter::new(s.max_seconds);
            if let Some(tolerance) = s.gap_tolerance {
                segmenter = segmenter.with_gap_tolerance(tolerance);
            }
            let summary = split::split(&s.indir, &s.outdir, &segmenter, s.keep_empty)?;
            info!(
                "{} segments written from {} sources",
                summary.segments, summary.sources
            );
        }

        cli::CorpusPrep::Stats(s) => {
            let report = stats::stats(&s.train, &s.dev, &s.test)?;
            if s.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }

        cli::CorpusPrep::Scrape(s) => {
            let urls = File::open(s.urls_file)?;
            let scraper = Scraper::from_urls_file(&urls)?;
            let results = scraper.scrape_all(&s.dst)?;

            // report eventual scraping errors
            let mut nb_failures = 0;
            for (url, result) in scraper.urls().iter().zip(&results) {
                if let Err(e) = result {
                    error!("Error during scraping of {}:\n {}", url, e);
                    nb_failures += 1;
                }
            }
            if nb_failures > 0 {
                return Err(Error::Custom(format!(
                    "{}/{} pages could not be scraped",
                    nb_failures,
                    results.len()
                )));
            }
        }
    };
    Ok(())
}
