//! フォルダ読み込み〜レポート出力の統合テスト
//!
//! ## 変更履歴
//! - 2026-08-29: 初期作成

use reading_compat_rust::batch::{run_batch, BatchReport};
use reading_compat_rust::catalog::build_catalog;
use reading_compat_rust::error::CompatError;
use reading_compat_rust::export::{write_json, write_summary_csv};
use reading_compat_rust::loader::{load_records, scan_folder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn write_list(dir: &Path, file_name: &str, rows: &[(&str, &str, &str)]) {
    let mut file = File::create(dir.join(file_name)).expect("CSV作成に失敗");
    writeln!(file, "Title,Author,Status").unwrap();
    for (title, author, status) in rows {
        writeln!(file, "{},{},{}", title, author, status).unwrap();
    }
}

fn load_catalogs(dir: &Path) -> Vec<reading_compat_rust::catalog::PersonCatalog> {
    scan_folder(dir)
        .unwrap()
        .iter()
        .map(|source| {
            let records = load_records(&source.path).unwrap();
            build_catalog(&source.name, &records)
        })
        .collect()
}

#[test]
fn test_end_to_end_pair_count_and_range() {
    let dir = tempdir().expect("Failed to create temp dir");

    write_list(
        dir.path(),
        "Tracked_Books_-_Alice.csv",
        &[
            ("The Hobbit", "J.R.R. Tolkien", "finished"),
            ("Dune", "Frank Herbert", "finished"),
            ("Piranesi", "Susanna Clarke", "want_to_read"),
        ],
    );
    write_list(
        dir.path(),
        "Tracked_Books_-_Bob.csv",
        &[
            ("The Hobbit", "J.R.R. Tolkien", "finished"),
            ("Ulysses", "James Joyce", "did_not_finish"),
            ("Dune", "Frank Herbert", "want_to_read"),
        ],
    );
    write_list(
        dir.path(),
        "Tracked_Books_-_Carol.csv",
        &[
            ("Old Log", "Nobody", "deleted"),
            ("Piranesi", "Susanna Clarke", "finished"),
        ],
    );

    let catalogs = load_catalogs(dir.path());
    assert_eq!(catalogs.len(), 3);
    assert_eq!(catalogs[0].name, "Alice");

    let report = run_batch(&catalogs, false).unwrap();
    // C(3,2) = 3
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.metadata.total_pairings, 3);
    for result in &report.results {
        assert!(result.compatibility_score >= -15.0 && result.compatibility_score <= 100.0);
    }
    // スコア降順
    for pair in report.results.windows(2) {
        assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
    }
}

#[test]
fn test_deleted_records_excluded_end_to_end() {
    let dir = tempdir().expect("Failed to create temp dir");

    write_list(
        dir.path(),
        "Tracked_Books_-_Dave.csv",
        &[
            ("Shared Book", "Author A", "finished"),
            ("Gone Book", "Author B", "deleted"),
        ],
    );
    write_list(
        dir.path(),
        "Tracked_Books_-_Eve.csv",
        &[
            ("Shared Book", "Author A", "finished"),
            ("Gone Book", "Author B", "finished"),
        ],
    );

    let catalogs = load_catalogs(dir.path());
    let report = run_batch(&catalogs, false).unwrap();

    let result = &report.results[0];
    // Daveのdeleted分は共有に数えない
    assert_eq!(result.metrics.shared_books_finished, 1);
    assert_eq!(result.metrics.person1_books_finished, 1);
    assert_eq!(result.metrics.person2_books_finished, 2);
}

#[test]
fn test_too_few_sources_is_reported_not_panic() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_list(dir.path(), "Tracked_Books_-_Solo.csv", &[("A", "x", "finished")]);

    let catalogs = load_catalogs(dir.path());
    let err = run_batch(&catalogs, false).unwrap_err();
    assert!(matches!(err, CompatError::TooFewSources(1)));
}

#[test]
fn test_json_report_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");

    write_list(
        dir.path(),
        "Tracked_Books_-_Alice.csv",
        &[("The Hobbit", "J.R.R. Tolkien", "finished")],
    );
    write_list(
        dir.path(),
        "Tracked_Books_-_Bob.csv",
        &[("The Hobbit", "J.R.R. Tolkien", "finished")],
    );

    let catalogs = load_catalogs(dir.path());
    let report = run_batch(&catalogs, false).unwrap();

    let json_path = dir.path().join("outputs").join("compatibility_results.json");
    write_json(&report, &json_path).unwrap();
    assert!(json_path.exists(), "JSONファイルが作成されていない");

    let content = std::fs::read_to_string(&json_path).unwrap();
    let parsed: BatchReport = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.results.len(), report.results.len());
    assert_eq!(parsed.metadata.total_pairings, 1);
    assert_eq!(parsed.results[0].person1, "Alice");
    assert_eq!(parsed.results[0].person2, "Bob");
}

#[test]
fn test_summary_csv_written() {
    let dir = tempdir().expect("Failed to create temp dir");

    write_list(
        dir.path(),
        "Tracked_Books_-_Alice.csv",
        &[
            ("The Hobbit", "J.R.R. Tolkien", "finished"),
            ("Dune", "Frank Herbert", "finished"),
        ],
    );
    write_list(
        dir.path(),
        "Tracked_Books_-_Bob.csv",
        &[("Dune", "Frank Herbert", "finished")],
    );

    let catalogs = load_catalogs(dir.path());
    let report = run_batch(&catalogs, false).unwrap();

    let csv_path = dir.path().join("outputs").join("compatibility_summary.csv");
    write_summary_csv(&report, &csv_path).unwrap();
    assert!(csv_path.exists(), "CSVファイルが作成されていない");

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.contains("Person 1"));
    assert!(header.contains("Compatibility %"));
    assert_eq!(lines.count(), report.results.len());
}

#[test]
fn test_malformed_csv_skipped_by_caller() {
    // 壊れたリストを1件混ぜても残りのペア計算は成立する
    let dir = tempdir().expect("Failed to create temp dir");

    write_list(
        dir.path(),
        "Tracked_Books_-_Alice.csv",
        &[("The Hobbit", "J.R.R. Tolkien", "finished")],
    );
    write_list(
        dir.path(),
        "Tracked_Books_-_Bob.csv",
        &[("The Hobbit", "J.R.R. Tolkien", "finished")],
    );
    // ヘッダなし・列数も不揃いのファイル
    let mut broken = File::create(dir.path().join("Tracked_Books_-_Mallory.csv")).unwrap();
    writeln!(broken, "not,a,valid").unwrap();
    writeln!(broken, "reading list").unwrap();

    let sources = scan_folder(dir.path()).unwrap();
    assert_eq!(sources.len(), 3);

    let mut catalogs = Vec::new();
    for source in &sources {
        if let Ok(records) = load_records(&source.path) {
            catalogs.push(build_catalog(&source.name, &records));
        }
    }
    assert!(catalogs.len() >= 2);

    let report = run_batch(&catalogs, false).unwrap();
    assert!(!report.results.is_empty());
}
