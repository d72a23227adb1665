//! Labeled time spans.

/// A labeled time span, in seconds.
///
/// Intervals usually come from an alignment tier, where they are sorted by
/// start time and follow each other without gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
    label: String,
}

impl Interval {
    pub fn new(start: f64, end: f64, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Get the interval's start time (seconds).
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Get the interval's end time (seconds).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Get a reference to the interval's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A group of consecutive [Interval]s emitted by the segmenter.
///
/// Spans from the first grouped interval's start to the last one's end,
/// and holds the grouped labels joined by a single space.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start: f64,
    end: f64,
    label: String,
    nb_intervals: usize,
}

impl Segment {
    pub(crate) fn new(start: f64, end: f64, label: String, nb_intervals: usize) -> Self {
        Self {
            start,
            end,
            label,
            nb_intervals,
        }
    }

    /// Get the segment's start time (seconds).
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Get the segment's end time (seconds).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Get a reference to the segment's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of input intervals grouped in this segment.
    pub fn nb_intervals(&self) -> usize {
        self.nb_intervals
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_duration() {
        let i = Interval::new(1.5, 4.0, "hello");
        assert_eq!(i.duration(), 2.5);
        assert_eq!(i.label(), "hello");
    }

    #[test]
    fn segment_accessors() {
        let s = Segment::new(0.0, 11.0, "b c".to_string(), 2);
        assert_eq!(s.start(), 0.0);
        assert_eq!(s.end(), 11.0);
        assert_eq!(s.label(), "b c");
        assert_eq!(s.nb_intervals(), 2);
        assert_eq!(s.duration(), 11.0);
    }
}
