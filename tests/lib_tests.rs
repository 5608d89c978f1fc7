use std::path::PathBuf;
use std::sync::Arc;

use dupdirs::engine::parse_size;
use dupdirs::pipeline::{CancelToken, compare_pair};
use dupdirs::report::write_report;
use dupdirs::{DirGroup, DirPair, FileRecord, Fingerprint, MatchResult};

fn record(dir: &str, name: &str, fingerprint: Fingerprint) -> FileRecord {
    let directory = PathBuf::from(dir);
    FileRecord {
        path: directory.join(name),
        directory,
        fingerprint,
    }
}

fn group(dir: &str, files: Vec<FileRecord>) -> Arc<DirGroup> {
    Arc::new(DirGroup {
        directory: PathBuf::from(dir),
        files,
    })
}

fn fp(tag: u8) -> Fingerprint {
    [tag; 32]
}

// --- parse_size ---

#[test]
fn test_parse_size_bytes() {
    assert_eq!(parse_size("0B").unwrap(), 0);
    assert_eq!(parse_size("1B").unwrap(), 1);
    assert_eq!(parse_size("512B").unwrap(), 512);
}

#[test]
fn test_parse_size_binary_units() {
    assert_eq!(parse_size("10KB").unwrap(), 10 * 1024);
    assert_eq!(parse_size("3MB").unwrap(), 3 << 20);
    assert_eq!(parse_size("1GB").unwrap(), 1 << 30);
    assert_eq!(parse_size("2TB").unwrap(), 2_u64 << 40);
    assert_eq!(parse_size("1PB").unwrap(), 1_u64 << 50);
    assert_eq!(parse_size("1EB").unwrap(), 1_u64 << 60);
}

#[test]
fn test_parse_size_unit_case_insensitive() {
    assert_eq!(parse_size("10kb").unwrap(), 10 * 1024);
    assert_eq!(parse_size("1gB").unwrap(), 1 << 30);
}

#[test]
fn test_parse_size_must_start_with_digit() {
    assert!(parse_size("").is_err());
    assert!(parse_size("MB").is_err());
    assert!(parse_size("abc").is_err());
    assert!(parse_size("-1KB").is_err());
}

#[test]
fn test_parse_size_rejects_unknown_or_missing_unit() {
    assert!(parse_size("10").is_err());
    assert!(parse_size("10XB").is_err());
    assert!(parse_size("10 KB").is_err());
    assert!(parse_size("10KiB").is_err());
}

#[test]
fn test_parse_size_overflow() {
    assert!(parse_size("99999999999999999999B").is_err());
    assert!(parse_size("1000000EB").is_err());
}

// --- compare_pair ---

#[test]
fn test_compare_pair_matches_equal_fingerprints() {
    let pair = DirPair {
        left: group("/a", vec![record("/a", "one", fp(1)), record("/a", "two", fp(2))]),
        right: group("/b", vec![record("/b", "uno", fp(1)), record("/b", "tres", fp(3))]),
    };
    let result = compare_pair(&pair);
    assert_eq!(result.left, PathBuf::from("/a"));
    assert_eq!(result.right, PathBuf::from("/b"));
    assert_eq!(result.count(), 1);
    assert_eq!(result.matches[0].0.file_name(), "one");
    assert_eq!(result.matches[0].1.file_name(), "uno");
}

#[test]
fn test_compare_pair_no_matches() {
    let pair = DirPair {
        left: group("/a", vec![record("/a", "one", fp(1))]),
        right: group("/b", vec![record("/b", "two", fp(2))]),
    };
    assert_eq!(compare_pair(&pair).count(), 0);
}

#[test]
fn test_compare_pair_symmetry() {
    let left = group("/a", vec![record("/a", "x", fp(1)), record("/a", "y", fp(2))]);
    let right = group("/b", vec![record("/b", "p", fp(2)), record("/b", "q", fp(1))]);

    let forward = compare_pair(&DirPair {
        left: Arc::clone(&left),
        right: Arc::clone(&right),
    });
    let backward = compare_pair(&DirPair { left: right, right: left });

    let mut forward_set: Vec<(String, String)> = forward
        .matches
        .iter()
        .map(|(a, b)| (a.file_name().to_string(), b.file_name().to_string()))
        .collect();
    let mut backward_set: Vec<(String, String)> = backward
        .matches
        .iter()
        .map(|(a, b)| (b.file_name().to_string(), a.file_name().to_string()))
        .collect();
    forward_set.sort();
    backward_set.sort();
    assert_eq!(forward_set, backward_set);
}

#[test]
fn test_compare_pair_order_is_left_major() {
    // Two matching fingerprints on each side: order must be every right
    // match for the first left record, then for the second.
    let pair = DirPair {
        left: group("/a", vec![record("/a", "x", fp(7)), record("/a", "y", fp(7))]),
        right: group("/b", vec![record("/b", "p", fp(7)), record("/b", "q", fp(7))]),
    };
    let names: Vec<(String, String)> = compare_pair(&pair)
        .matches
        .iter()
        .map(|(a, b)| (a.file_name().to_string(), b.file_name().to_string()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("x".to_string(), "p".to_string()),
            ("x".to_string(), "q".to_string()),
            ("y".to_string(), "p".to_string()),
            ("y".to_string(), "q".to_string()),
        ]
    );
}

// --- report ---

fn scenario_results() -> Vec<MatchResult> {
    vec![MatchResult {
        left: PathBuf::from("/a"),
        right: PathBuf::from("/b"),
        matches: vec![
            (record("/a", "a.txt", fp(1)), record("/b", "a.txt", fp(1))),
            (record("/a", "b.txt", fp(2)), record("/b", "b.txt", fp(2))),
        ],
    }]
}

#[test]
fn test_report_block_layout() {
    let mut out = Vec::new();
    write_report(&mut out, scenario_results(), 1).unwrap();
    let expected = "\
+--------------+
|   /a == /b   |
+--------------+
|a.txt == a.txt|
|b.txt == b.txt|
+--------------+
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_report_threshold_filters_pairs() {
    let mut out = Vec::new();
    write_report(&mut out, scenario_results(), 3).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_report_writes_through_dyn_sink() {
    // The CLI hands the report a boxed sink, so rendering must accept an
    // unsized writer.
    let mut buf = Vec::new();
    let out: &mut dyn std::io::Write = &mut buf;
    write_report(out, scenario_results(), 1).unwrap();
    assert!(String::from_utf8(buf).unwrap().contains("a.txt == a.txt"));
}

#[test]
fn test_report_empty_results() {
    let mut out = Vec::new();
    write_report(&mut out, Vec::new(), 1).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_report_sorted_by_directory_pair() {
    let make = |left: &str, right: &str| MatchResult {
        left: PathBuf::from(left),
        right: PathBuf::from(right),
        matches: vec![(record(left, "f", fp(1)), record(right, "f", fp(1)))],
    };
    // Completion order from the pool is arbitrary; rendering must not be.
    let results = vec![make("/c", "/d"), make("/a", "/b"), make("/a", "/d")];
    let mut out = Vec::new();
    write_report(&mut out, results, 1).unwrap();
    let text = String::from_utf8(out).unwrap();
    let a_b = text.find("/a == /b").unwrap();
    let a_d = text.find("/a == /d").unwrap();
    let c_d = text.find("/c == /d").unwrap();
    assert!(a_b < a_d && a_d < c_d);
}

#[test]
fn test_report_widths_grow_with_long_filenames() {
    let results = vec![MatchResult {
        left: PathBuf::from("/a"),
        right: PathBuf::from("/b"),
        matches: vec![(
            record("/a", "a-very-long-name.bin", fp(1)),
            record("/b", "f", fp(1)),
        )],
    }];
    let mut out = Vec::new();
    write_report(&mut out, results, 1).unwrap();
    let text = String::from_utf8(out).unwrap();
    // width1 = len("a-very-long-name.bin") = 20, width2 = len("/b") = 2
    assert!(text.starts_with(&format!("+{}+\n", "-".repeat(20 + 2 + 4))));
    assert!(text.contains("|a-very-long-name.bin == f |"));
}

// --- CancelToken ---

#[test]
fn test_cancel_token_starts_untriggered() {
    let token = CancelToken::new();
    assert!(!token.is_canceled());
}

#[test]
fn test_cancel_token_cancel_is_idempotent() {
    let token = CancelToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_canceled());
}

#[test]
fn test_cancel_token_concurrent_cancels() {
    let token = CancelToken::new();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let token = token.clone();
            std::thread::spawn(move || token.cancel())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert!(token.is_canceled());
}

#[test]
fn test_cancel_token_clone_shares_state() {
    let token = CancelToken::new();
    let clone = token.clone();
    token.cancel();
    assert!(clone.is_canceled());
}

#[test]
fn test_cancel_token_unblocks_receiver() {
    let token = CancelToken::new();
    token.cancel();
    // Disconnected now: a blocking recv returns immediately instead of
    // hanging, which is what unblocks every stage on cancellation.
    assert!(token.canceled().recv().is_err());
}

// --- FileRecord ---

#[test]
fn test_file_record_file_name() {
    let rec = record("/some/dir", "file.txt", fp(0));
    assert_eq!(rec.file_name(), "file.txt");
    assert_eq!(rec.directory, PathBuf::from("/some/dir"));
}
