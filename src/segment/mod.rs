/*! Interval segmentation

Groups the labeled intervals of an alignment into segments of bounded duration.
See [Segmenter] for the grouping rules.

```
use corpus_prep::segment::{segment, Interval};

let intervals = vec![
    Interval::new(0.0, 4.0, "a"),
    Interval::new(4.0, 9.0, "b"),
    Interval::new(9.0, 11.0, "c"),
    Interval::new(11.0, 13.0, "d"),
];
let segments = segment(&intervals, 8.0).unwrap();
let labels: Vec<&str> = segments.iter().map(|s| s.label()).collect();
assert_eq!(labels, vec!["a", "b c", "d"]);
```
!*/
mod interval;
mod segmenter;

pub use interval::{Interval, Segment};
pub use segmenter::{segment, Segmenter};
