/*! WAV loading, slicing and saving.

Clips keep the [hound::WavSpec] of their source so that exported slices are written
with the same channel count, rate and sample format.
!*/
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;

use crate::error::Error;

/// Interleaved samples, in the source's representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Int(Vec<i32>),
    Float(Vec<f32>),
}

impl Samples {
    fn len(&self) -> usize {
        match self {
            Samples::Int(s) => s.len(),
            Samples::Float(s) => s.len(),
        }
    }

    fn slice(&self, from: usize, to: usize) -> Self {
        match self {
            Samples::Int(s) => Samples::Int(s[from..to].to_vec()),
            Samples::Float(s) => Samples::Float(s[from..to].to_vec()),
        }
    }
}

/// An in-memory audio clip.
#[derive(Debug, Clone, PartialEq)]
pub struct Audio {
    spec: WavSpec,
    samples: Samples,
}

impl Audio {
    pub fn new(spec: WavSpec, samples: Samples) -> Result<Self, Error> {
        match (&samples, spec.sample_format) {
            (Samples::Int(_), SampleFormat::Int) | (Samples::Float(_), SampleFormat::Float) => {}
            _ => {
                return Err(Error::InvalidInput(
                    "sample type does not match the wav spec".to_string(),
                ))
            }
        }
        if spec.channels == 0 || samples.len() % spec.channels as usize != 0 {
            return Err(Error::InvalidInput(format!(
                "{} samples can't be split into {} channels",
                samples.len(),
                spec.channels
            )));
        }
        Ok(Self { spec, samples })
    }

    /// Load a WAV file.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let reader = WavReader::open(path)?;
        let spec = reader.spec();
        debug!("loading {:?} ({:?})", path, spec);

        let samples = match spec.sample_format {
            SampleFormat::Int => {
                Samples::Int(reader.into_samples::<i32>().collect::<Result<_, _>>()?)
            }
            SampleFormat::Float => {
                Samples::Float(reader.into_samples::<f32>().collect::<Result<_, _>>()?)
            }
        };

        Self::new(spec, samples)
    }

    /// Get a reference to the audio's spec.
    pub fn spec(&self) -> &WavSpec {
        &self.spec
    }

    /// Get a reference to the audio's interleaved samples.
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Number of frames (one sample per channel).
    pub fn nb_frames(&self) -> usize {
        self.samples.len() / self.spec.channels as usize
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.nb_frames() as f64 / f64::from(self.spec.sample_rate)
    }

    /// Convert a time in seconds into a frame index, clamped to the clip.
    fn frame_at(&self, seconds: f64) -> usize {
        let frame = (seconds * f64::from(self.spec.sample_rate)).round();
        if frame <= 0.0 {
            0
        } else {
            (frame as usize).min(self.nb_frames())
        }
    }

    /// Cut the clip between `start` and `end` (seconds).
    ///
    /// Bounds past the clip are clamped, and an inverted range gives an empty clip.
    pub fn slice(&self, start: f64, end: f64) -> Audio {
        let from = self.frame_at(start);
        let to = self.frame_at(end).max(from);
        let channels = self.spec.channels as usize;

        Audio {
            spec: self.spec,
            samples: self.samples.slice(from * channels, to * channels),
        }
    }

    /// Write the clip as a WAV file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let mut writer = WavWriter::create(path, self.spec)?;
        match &self.samples {
            Samples::Int(samples) => {
                for &s in samples {
                    writer.write_sample(s)?;
                }
            }
            Samples::Float(samples) => {
                for &s in samples {
                    writer.write_sample(s)?;
                }
            }
        }
        writer.finalize()?;
        Ok(())
    }
}
