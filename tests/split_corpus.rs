use std::path::Path;

use corpus_prep::error::Error;
use corpus_prep::io::audio::{Audio, Samples};
use corpus_prep::processing::split;
use corpus_prep::segment::Segmenter;
use hound::{SampleFormat, WavSpec};
use tempfile::tempdir;

const SAMPLE_RATE: u32 = 8_000;

/// write a mono recording of `seconds` where each sample holds its frame index (mod 30000).
fn write_wav(path: &Path, seconds: u32) {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let samples = (0..seconds * SAMPLE_RATE)
        .map(|i| (i % 30_000) as i32)
        .collect();
    Audio::new(spec, Samples::Int(samples))
        .unwrap()
        .save(path)
        .unwrap();
}

/// write a long format TextGrid with a single word tier.
fn write_textgrid(path: &Path, intervals: &[(f64, f64, &str)]) {
    let xmax = intervals.last().unwrap().1;
    let mut content = format!(
        "File type = \"ooTextFile\"\nObject class = \"TextGrid\"\n\nxmin = 0\nxmax = {}\ntiers? <exists>\nsize = 1\nitem []:\n    item [1]:\n        class = \"IntervalTier\"\n        name = \"words\"\n        xmin = 0\n        xmax = {}\n        intervals: size = {}\n",
        xmax,
        xmax,
        intervals.len()
    );
    for (idx, (start, end, label)) in intervals.iter().enumerate() {
        content.push_str(&format!(
            "        intervals [{}]:\n            xmin = {}\n            xmax = {}\n            text = \"{}\"\n",
            idx + 1,
            start,
            end,
            label
        ));
    }
    std::fs::write(path, content).unwrap();
}

fn nb_frames(path: &Path) -> usize {
    Audio::open(path).unwrap().nb_frames()
}

#[test_log::test]
fn split_pairs() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    let dst = dst.path().join("out");

    write_wav(&src.path().join("rec1.wav"), 13);
    write_textgrid(
        &src.path().join("rec1.TextGrid"),
        &[(0.0, 4.0, "a"), (4.0, 9.0, "b"), (9.0, 11.0, "c"), (11.0, 13.0, "d")],
    );
    write_wav(&src.path().join("rec2.wav"), 3);
    write_textgrid(
        &src.path().join("rec2.TextGrid"),
        &[(0.0, 1.0, "hello"), (1.0, 2.0, ""), (2.0, 3.0, "world")],
    );

    let summary = split::split(src.path(), &dst, &Segmenter::new(8.0), false).unwrap();
    assert_eq!(summary.sources, 2);
    assert_eq!(summary.segments, 4);

    let read = |name: &str| std::fs::read_to_string(dst.join(name)).unwrap();
    assert_eq!(read("rec1_0.txt"), "a");
    assert_eq!(read("rec1_1.txt"), "b c");
    assert_eq!(read("rec1_2.txt"), "d");
    // blank interval dropped
    assert_eq!(read("rec2_0.txt"), "hello world");

    let rate = SAMPLE_RATE as usize;
    assert_eq!(nb_frames(&dst.join("rec1_0.wav")), 4 * rate);
    assert_eq!(nb_frames(&dst.join("rec1_1.wav")), 7 * rate);
    assert_eq!(nb_frames(&dst.join("rec1_2.wav")), 2 * rate);
    assert_eq!(nb_frames(&dst.join("rec2_0.wav")), 3 * rate);

    // second segment starts 4s into the recording
    match Audio::open(&dst.join("rec1_1.wav")).unwrap().samples() {
        Samples::Int(s) => assert_eq!(s[0], ((4 * SAMPLE_RATE) % 30_000) as i32),
        Samples::Float(_) => panic!("wrong sample format"),
    }

    assert!(!dst.join("rec1_3.txt").exists());
}

#[test_log::test]
fn keep_empty_labels() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();

    write_wav(&src.path().join("rec.wav"), 3);
    write_textgrid(
        &src.path().join("rec.TextGrid"),
        &[(0.0, 1.0, "hello"), (1.0, 2.0, ""), (2.0, 3.0, "world")],
    );

    split::split(src.path(), dst.path(), &Segmenter::new(8.0), true).unwrap();
    assert_eq!(
        std::fs::read_to_string(dst.path().join("rec_0.txt")).unwrap(),
        "hello  world"
    );
}

#[test_log::test]
fn strict_gap_tolerance() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();

    write_wav(&src.path().join("rec.wav"), 3);
    write_textgrid(
        &src.path().join("rec.TextGrid"),
        &[(0.0, 1.0, "hello"), (1.0, 2.0, ""), (2.0, 3.0, "world")],
    );

    // dropping the silence leaves a 1s gap
    let segmenter = Segmenter::new(8.0).with_gap_tolerance(0.5);
    let res = split::split(src.path(), dst.path(), &segmenter, false);
    assert!(matches!(res, Err(Error::Consistency(_))));
}

#[test_log::test]
fn silent_recording_fails() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();

    write_wav(&src.path().join("rec.wav"), 2);
    write_textgrid(&src.path().join("rec.TextGrid"), &[(0.0, 2.0, "")]);

    let res = split::split(src.path(), dst.path(), &Segmenter::new(8.0), false);
    assert!(matches!(res, Err(Error::InvalidInput(_))));
}
