use bundle_stats::bundle::MainBundle;
use bundle_stats::sizes::{find_sizes, gzip_size, PrettySize};
use std::fs;

#[test]
fn test_pretty_size_is_monotonic() {
    let samples: Vec<u64> = vec![
        0, 1, 999, 1023, 1024, 1025, 10_000, 1_048_575, 1_048_576, 3_000_000, 5_000_000_000,
    ];

    for pair in samples.windows(2) {
        let (smaller, larger) = (PrettySize::new(pair[0]), PrettySize::new(pair[1]));
        assert!(larger > smaller, "{larger} should sort above {smaller}");
    }
}

#[test]
fn test_larger_file_reports_larger_raw_size() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("dist")).unwrap();

    let mut main = MainBundle::standard(dir.path());
    main.with_meta = None;
    fs::write(&main.dist, "a".repeat(5000)).unwrap();
    fs::write(&main.dist_min, "a".repeat(4000)).unwrap();

    let report = find_sizes(main.artifacts()).unwrap();

    assert!(report.raw > report.minified);
    assert_eq!(report.raw.to_string(), "4.9 kB");
    assert_eq!(report.minified.to_string(), "3.9 kB");
}

#[test]
fn test_gzipped_size_matches_minified_content() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("dist")).unwrap();

    let mut main = MainBundle::standard(dir.path());
    main.with_meta = None;
    let minified = "function a(b){return b*2}".repeat(50);
    fs::write(&main.dist, "raw").unwrap();
    fs::write(&main.dist_min, &minified).unwrap();

    let report = find_sizes(main.artifacts()).unwrap();

    assert_eq!(report.gzipped.bytes(), gzip_size(minified.as_bytes()).unwrap());
}
