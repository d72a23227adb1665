use std::path::Path;

use corpus_prep::error::Error;
use corpus_prep::processing::stats;
use tempfile::tempdir;

fn write_split(dir: &Path, files: &[(&str, &str)]) {
    std::fs::create_dir_all(dir).unwrap();
    for (name, content) in files {
        std::fs::write(dir.join(name), content).unwrap();
    }
}

#[test_log::test]
fn report_over_splits() {
    let root = tempdir().unwrap();
    let (train, dev, test) = (
        root.path().join("train"),
        root.path().join("dev"),
        root.path().join("test"),
    );

    write_split(
        &train,
        &[
            ("a_0.txt", "ang salita ng diyos\n"),
            ("a_1.txt", "ang diyos ay pag-ibig"),
            // not a transcript
            ("a_1.wav", "ignored ignored ignored"),
        ],
    );
    write_split(&dev, &[("b_0.txt", "ang pag-ibig ay mapagpasensya")]);
    write_split(&test, &[("c_0.txt", "salita\n\nsalita bago bago")]);

    let report = stats::stats(&train, &dev, &test).unwrap();

    assert_eq!(report.train.types, 6);
    assert_eq!(report.train.tokens, 8);
    assert_eq!(report.dev.types, 4);
    assert_eq!(report.test.tokens, 4);

    assert_eq!(report.dev_oov.types, 1);
    assert_eq!(report.dev_oov.tokens, 1);
    assert_eq!(report.dev_oov.rate, 0.25);

    assert_eq!(report.test_oov.types, 1);
    assert_eq!(report.test_oov.tokens, 2);
    assert_eq!(report.test_oov.rate, 0.5);

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["test_oov"]["tokens"], 2);
    assert_eq!(json["train"]["types"], 6);
}

#[test_log::test]
fn empty_splits() {
    let root = tempdir().unwrap();
    for split in ["train", "dev", "test"] {
        write_split(&root.path().join(split), &[]);
    }

    let report = stats::stats(
        &root.path().join("train"),
        &root.path().join("dev"),
        &root.path().join("test"),
    )
    .unwrap();
    assert_eq!(report.train.tokens, 0);
    assert_eq!(report.dev_oov.rate, 0.0);
}

#[test_log::test]
fn missing_split() {
    let root = tempdir().unwrap();
    write_split(&root.path().join("train"), &[]);
    write_split(&root.path().join("dev"), &[]);

    let res = stats::stats(
        &root.path().join("train"),
        &root.path().join("dev"),
        &root.path().join("test"),
    );
    assert!(matches!(res, Err(Error::InvalidInput(_))));
}
