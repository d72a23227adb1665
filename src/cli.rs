//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "corpus-prep", about = "speech/text corpus preparation tools.")]
/// Holds every command that is callable by the `corpus-prep` command.
pub enum CorpusPrep {
    #[structopt(about = "Split aligned audio and transcripts into bounded segments")]
    Split(Split),
    #[structopt(about = "Count types, tokens and OOV rates of train/dev/test splits")]
    Stats(Stats),
    #[structopt(about = "Scrape chapter texts")]
    Scrape(Scrape),
}

#[derive(Debug, StructOpt)]
/// Split command and parameters.
///
/// ```sh
/// corpus-prep-split 0.1.0
/// Split aligned audio and transcripts into bounded segments
///
/// USAGE:
///     corpus-prep split [FLAGS] [OPTIONS] <indir> <outdir>
///
/// FLAGS:
///     -k, --keep-empty    keep intervals with a blank label
///
/// OPTIONS:
///         --gap-tolerance <gap-tolerance>    reject alignments with gaps over this duration (seconds)
///     -m, --max-seconds <max-seconds>        maximum duration of segments (seconds) [default: 20]
///
/// ARGS:
///     <indir>     directory of parallel .TextGrid and .wav files
///     <outdir>    directory to write segmented parallel .txt and .wav files
/// ```
pub struct Split {
    #[structopt(
        parse(from_os_str),
        help = "directory of parallel .TextGrid and .wav files"
    )]
    pub indir: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "directory to write segmented parallel .txt and .wav files"
    )]
    pub outdir: PathBuf,
    #[structopt(
        short = "m",
        long = "max-seconds",
        default_value = "20",
        help = "maximum duration of segments (seconds)"
    )]
    pub max_seconds: f64,
    #[structopt(
        long = "gap-tolerance",
        help = "reject alignments with gaps over this duration (seconds)"
    )]
    pub gap_tolerance: Option<f64>,
    #[structopt(
        short = "k",
        long = "keep-empty",
        help = "keep intervals with a blank label"
    )]
    pub keep_empty: bool,
}

#[derive(Debug, StructOpt)]
/// Stats command and parameters.
pub struct Stats {
    #[structopt(
        parse(from_os_str),
        long = "train",
        default_value = "train",
        help = "directory of the train partition (.txt files)"
    )]
    pub train: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dev",
        default_value = "dev",
        help = "directory of the dev partition (.txt files)"
    )]
    pub dev: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "test",
        default_value = "test",
        help = "directory of the test partition (.txt files)"
    )]
    pub test: PathBuf,
    #[structopt(long = "json", help = "print the report as JSON")]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
/// Scrape command and parameters.
pub struct Scrape {
    #[structopt(parse(from_os_str), help = "file of chapter urls, one per line")]
    pub urls_file: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        default_value = "texts",
        help = "destination of chapter texts"
    )]
    pub dst: PathBuf,
}
