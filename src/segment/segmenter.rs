//! Greedy bounded grouping of intervals.
use itertools::Itertools;
use log::debug;

use super::{Interval, Segment};
use crate::error::Error;

/// Groups consecutive intervals into segments of at most `max_seconds`.
///
/// The bound is checked at internal boundaries only:
/// - an interval that alone is longer than the bound is never subdivided,
/// - the last interval is always put in the last segment.
///
/// When two neighbouring intervals are not contiguous, the gap is carried
/// over to the emitted segments. Setting a gap tolerance makes the segmenter
/// reject such inputs instead.
#[derive(Debug, Clone)]
pub struct Segmenter {
    max_seconds: f64,
    gap_tolerance: Option<f64>,
}

impl Segmenter {
    pub fn new(max_seconds: f64) -> Self {
        Self {
            max_seconds,
            gap_tolerance: None,
        }
    }

    /// Reject inputs where the distance between an interval's end and the next one's start
    /// is greater than `tolerance` seconds.
    pub fn with_gap_tolerance(mut self, tolerance: f64) -> Self {
        self.gap_tolerance = Some(tolerance);
        self
    }

    /// Get the segmenter's max duration (seconds).
    pub fn max_seconds(&self) -> f64 {
        self.max_seconds
    }

    /// Get the segmenter's gap tolerance, if any.
    pub fn gap_tolerance(&self) -> Option<f64> {
        self.gap_tolerance
    }

    fn check_params(&self) -> Result<(), Error> {
        if !(self.max_seconds.is_finite() && self.max_seconds > 0.0) {
            return Err(Error::InvalidInput(format!(
                "max duration must be a positive number of seconds, got {}",
                self.max_seconds
            )));
        }
        if let Some(tolerance) = self.gap_tolerance {
            if !(tolerance.is_finite() && tolerance >= 0.0) {
                return Err(Error::InvalidInput(format!(
                    "gap tolerance must be a non-negative number of seconds, got {}",
                    tolerance
                )));
            }
        }
        Ok(())
    }

    /// Ensure intervals are well formed and sorted, and contiguous within tolerance if one is set.
    fn check_consistency(&self, intervals: &[Interval]) -> Result<(), Error> {
        for (idx, interval) in intervals.iter().enumerate() {
            if !(interval.start().is_finite() && interval.end().is_finite()) {
                return Err(Error::Consistency(format!(
                    "interval {} has non-finite bounds [{}, {}]",
                    idx,
                    interval.start(),
                    interval.end()
                )));
            }
            if interval.start() > interval.end() {
                return Err(Error::Consistency(format!(
                    "interval {} starts after it ends ({} > {})",
                    idx,
                    interval.start(),
                    interval.end()
                )));
            }
        }

        for (idx, (prev, next)) in intervals.iter().tuple_windows().enumerate() {
            if next.start() < prev.start() {
                return Err(Error::Consistency(format!(
                    "interval {} starts before interval {} ({} < {})",
                    idx + 1,
                    idx,
                    next.start(),
                    prev.start()
                )));
            }
            if let Some(tolerance) = self.gap_tolerance {
                let gap = (next.start() - prev.end()).abs();
                if gap > tolerance {
                    return Err(Error::Consistency(format!(
                        "intervals {} and {} are {}s apart (tolerance is {}s)",
                        idx,
                        idx + 1,
                        gap,
                        tolerance
                    )));
                }
            }
        }

        Ok(())
    }

    /// Partition `intervals` into segments.
    ///
    /// A segment is closed when adding the current interval would make it last more than
    /// `max_seconds`, measured from the segment start to the current interval's end.
    /// The closed segment then ends at the *previous* interval's end, and the next one starts at
    /// the current interval's start.
    ///
    /// Fails with [Error::InvalidInput] on empty input or invalid parameters,
    /// and with [Error::Consistency] on malformed or unsorted intervals.
    pub fn segment(&self, intervals: &[Interval]) -> Result<Vec<Segment>, Error> {
        self.check_params()?;
        let first = intervals
            .first()
            .ok_or_else(|| Error::InvalidInput("no intervals to segment".to_string()))?;
        self.check_consistency(intervals)?;

        let last_idx = intervals.len() - 1;
        let mut segments = Vec::new();
        let mut start = first.start();
        let mut labels: Vec<&str> = Vec::new();

        for (idx, interval) in intervals.iter().enumerate() {
            let elapsed = interval.end() - start;

            // pending labels are never empty past the first interval,
            // so idx - 1 is valid here.
            if elapsed > self.max_seconds && !labels.is_empty() {
                let end = intervals[idx - 1].end();
                segments.push(Segment::new(start, end, labels.join(" "), labels.len()));

                start = interval.start();
                labels.clear();
            }

            labels.push(interval.label());

            if idx == last_idx {
                segments.push(Segment::new(
                    start,
                    interval.end(),
                    labels.join(" "),
                    labels.len(),
                ));
            }
        }

        debug!(
            "grouped {} intervals into {} segments (max {}s)",
            intervals.len(),
            segments.len(),
            self.max_seconds
        );
        Ok(segments)
    }
}

/// Segment `intervals` with a [Segmenter] using default settings.
pub fn segment(intervals: &[Interval], max_seconds: f64) -> Result<Vec<Segment>, Error> {
    Segmenter::new(max_seconds).segment(intervals)
}
