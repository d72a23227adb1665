/*! splitting

Offline splitting of aligned recordings.

The source directory holds parallel `<source>.wav`/`<source>.TextGrid` files.
Each recording is cut into segments of bounded duration following the first tier of its alignment,
and every segment is written as `<source>_<n>.txt` (transcript) and `<source>_<n>.wav` (audio).
!*/
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::io::{Audio, TextGrid};
use crate::segment::{Interval, Segmenter};

/// An audio file and its alignment.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: String,
    pub audio: PathBuf,
    pub alignment: PathBuf,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub sources: usize,
    pub segments: usize,
}

/// List `*.wav` files of `src` and their `.TextGrid` counterparts, sorted by name.
pub fn sources(src: &Path) -> Result<Vec<Source>, Error> {
    if !src.is_dir() {
        return Err(Error::InvalidInput(format!("{:?} is not a directory", src)));
    }

    let pattern = format!("{}/*.wav", glob::Pattern::escape(&src.to_string_lossy()));
    debug!("looking for audio files matching {}", pattern);

    let mut sources = Vec::new();
    for audio in glob::glob(&pattern)? {
        let audio = audio?;
        let name = audio
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| Error::InvalidInput(format!("no file name in {:?}", audio)))?;
        let alignment = audio.with_extension("TextGrid");
        if !alignment.is_file() {
            return Err(Error::InvalidInput(format!(
                "no alignment for {:?} (expected {:?})",
                audio, alignment
            )));
        }
        sources.push(Source {
            name,
            audio,
            alignment,
        });
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sources)
}

/// Segment a single source and write its segments into `dst`.
///
/// Intervals with a blank label (usually silences) are dropped before segmenting unless `keep_empty` is set.
/// Returns the number of written segments.
pub fn split_source(
    dst: &Path,
    source: &Source,
    segmenter: &Segmenter,
    keep_empty: bool,
) -> Result<usize, Error> {
    info!("[{}] starting splitting", source.name);

    let textgrid = TextGrid::from_path(&source.alignment)?;
    let intervals: Vec<Interval> = textgrid
        .first_tier_intervals()?
        .iter()
        .filter(|interval| keep_empty || !interval.label().trim().is_empty())
        .cloned()
        .collect();

    let segments = segmenter.segment(&intervals).map_err(|e| {
        error!("[{}] could not segment: {}", source.name, e);
        e
    })?;
    let audio = Audio::open(&source.audio)?;

    for (idx, segment) in segments.iter().enumerate() {
        let text_path = dst.join(format!("{}_{}.txt", source.name, idx));
        let wav_path = dst.join(format!("{}_{}.wav", source.name, idx));
        debug!(
            "[{}] segment {}: {:.3}s-{:.3}s",
            source.name,
            idx,
            segment.start(),
            segment.end()
        );

        std::fs::write(&text_path, segment.label())?;
        audio
            .slice(segment.start(), segment.end())
            .save(&wav_path)?;
    }

    info!("[{}] {} segments written", source.name, segments.len());
    Ok(segments.len())
}

/// Split every source of `src` into `dst`, using a thread per source.
///
/// `dst` is created if needed. Stops at the first failing source:
/// segments already written by other sources are left in `dst`.
pub fn split(
    src: &Path,
    dst: &Path,
    segmenter: &Segmenter,
    keep_empty: bool,
) -> Result<Summary, Error> {
    std::fs::create_dir_all(dst)?;
    let sources = sources(src)?;
    info!("{} sources found in {:?}", sources.len(), src);

    let counts = sources
        .par_iter()
        .map(|source| split_source(dst, source, segmenter, keep_empty))
        .collect::<Result<Vec<usize>, Error>>()?;

    Ok(Summary {
        sources: counts.len(),
        segments: counts.iter().sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_src() {
        let dst = tempdir().unwrap();
        let res = split(Path::new("sdlkfjsdlkfj"), dst.path(), &Segmenter::new(20.0), false);
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn missing_alignment() {
        let src = tempdir().unwrap();
        std::fs::write(src.path().join("a.wav"), b"").unwrap();
        assert!(matches!(sources(src.path()), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn sources_are_sorted() {
        let src = tempdir().unwrap();
        for name in ["b", "a", "c"] {
            std::fs::write(src.path().join(format!("{}.wav", name)), b"").unwrap();
            std::fs::write(src.path().join(format!("{}.TextGrid", name)), b"").unwrap();
        }
        // ignored, not audio
        std::fs::write(src.path().join("notes.txt"), b"").unwrap();

        let names: Vec<String> = sources(src.path())
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn failing_source_stops_split() {
        use crate::io::audio::Samples;
        use hound::{SampleFormat, WavSpec};

        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let spec = WavSpec {
            channels: 1,
            sample_rate: 100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        for name in ["a", "b"] {
            Audio::new(spec, Samples::Int(vec![0; 100]))
                .unwrap()
                .save(&src.path().join(format!("{}.wav", name)))
                .unwrap();
        }
        std::fs::write(
            src.path().join("a.TextGrid"),
            "File type = \"ooTextFile\"\nObject class = \"TextGrid\"\n0 1 <exists> 1\n\"IntervalTier\" \"w\" 0 1 1\n0 1 \"x\"\n",
        )
        .unwrap();
        std::fs::write(src.path().join("b.TextGrid"), "not a textgrid").unwrap();

        let res = split(src.path(), dst.path(), &Segmenter::new(20.0), false);
        assert!(matches!(res, Err(Error::TextGrid(_))));
        // output directory is kept, along with whatever "a" managed to write
        assert!(dst.path().is_dir());
    }
}
