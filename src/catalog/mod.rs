//! 読書記録のデータモデルとカテゴリ分類
//!
//! 1人分の読書記録（`BookRecord` の列）を、比較に使う
//! ステータス別のタイトル集合・著者集合（`PersonCatalog`）へ変換する。

use crate::normalizer::{normalize_title, primary_author};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 読書ステータス
///
/// 未知の値は `Other` として許容する（カテゴリ集合からは除外、
/// `all` にのみ計上）。`Deleted` は全集計から除外する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    Finished,
    CurrentlyReading,
    WantToRead,
    DidNotFinish,
    Deleted,
    Other,
}

impl ReadingStatus {
    /// 自由記述のステータス文字列をパースする（未知値は `Other`）
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "finished" => ReadingStatus::Finished,
            "currently_reading" => ReadingStatus::CurrentlyReading,
            "want_to_read" => ReadingStatus::WantToRead,
            "did_not_finish" => ReadingStatus::DidNotFinish,
            "deleted" => ReadingStatus::Deleted,
            _ => ReadingStatus::Other,
        }
    }

    /// 「読了扱い」（finished + currently_reading）かどうか
    pub fn counts_as_finished(&self) -> bool {
        matches!(self, ReadingStatus::Finished | ReadingStatus::CurrentlyReading)
    }
}

/// 読書記録1件（CSVの1行から生成、以後不変）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: Option<String>,
    pub author: Option<String>,
    pub status: ReadingStatus,
}

/// 正規化済みの1レコード（共有著者の冊数カウントに使う）
#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub title: String,
    pub author: String,
    pub status: ReadingStatus,
}

/// 1人分のカテゴリ別集合
///
/// タイトル・著者はすべて正規化済み。重複は集合として1つに
/// 潰れる（多重度は意図的に捨てる）。
#[derive(Debug, Clone, Default)]
pub struct PersonCatalog {
    pub name: String,
    /// 読了 + 読書中
    pub finished_titles: HashSet<String>,
    /// 読みたい（積読）
    pub want_titles: HashSet<String>,
    /// 途中放棄
    pub dnf_titles: HashSet<String>,
    /// 削除以外の全タイトル
    pub all_titles: HashSet<String>,
    /// 読了本の主著者（空文字列は除外）
    pub finished_authors: HashSet<String>,
    /// 全記録の主著者（空文字列は除外）
    pub all_authors: HashSet<String>,
    /// 正規化済みレコード（削除済みを除く、入力順）
    pub rows: Vec<CatalogRow>,
}

impl PersonCatalog {
    /// 読了率（読了扱い ÷ 全記録、全記録0件なら0）
    pub fn finish_rate(&self) -> f64 {
        if self.all_titles.is_empty() {
            0.0
        } else {
            self.finished_titles.len() as f64 / self.all_titles.len() as f64
        }
    }
}

/// 読書記録の列からカテゴリ集合を構築する
///
/// `deleted` は除外。タイトル・著者は正規化してから集合へ入れる。
/// 入力件数に対してO(n)。
pub fn build_catalog(name: &str, records: &[BookRecord]) -> PersonCatalog {
    let mut catalog = PersonCatalog {
        name: name.to_string(),
        ..Default::default()
    };

    for record in records {
        if record.status == ReadingStatus::Deleted {
            continue;
        }

        let title = normalize_title(record.title.as_deref().unwrap_or(""));
        let author = primary_author(record.author.as_deref().unwrap_or(""));

        catalog.all_titles.insert(title.clone());
        if !author.is_empty() {
            catalog.all_authors.insert(author.clone());
        }

        match record.status {
            s if s.counts_as_finished() => {
                catalog.finished_titles.insert(title.clone());
                if !author.is_empty() {
                    catalog.finished_authors.insert(author.clone());
                }
            }
            ReadingStatus::WantToRead => {
                catalog.want_titles.insert(title.clone());
            }
            ReadingStatus::DidNotFinish => {
                catalog.dnf_titles.insert(title.clone());
            }
            // Other: all にのみ計上
            _ => {}
        }

        catalog.rows.push(CatalogRow {
            title,
            author,
            status: record.status,
        });
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, author: &str, status: &str) -> BookRecord {
        BookRecord {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            status: ReadingStatus::parse(status),
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ReadingStatus::parse("finished"), ReadingStatus::Finished);
        assert_eq!(ReadingStatus::parse("currently_reading"), ReadingStatus::CurrentlyReading);
        assert_eq!(ReadingStatus::parse("want_to_read"), ReadingStatus::WantToRead);
        assert_eq!(ReadingStatus::parse("did_not_finish"), ReadingStatus::DidNotFinish);
        assert_eq!(ReadingStatus::parse("deleted"), ReadingStatus::Deleted);
        assert_eq!(ReadingStatus::parse("on_hold"), ReadingStatus::Other);
        assert_eq!(ReadingStatus::parse(""), ReadingStatus::Other);
    }

    #[test]
    fn test_build_catalog_partitions() {
        let records = vec![
            record("The Hobbit", "J.R.R. Tolkien", "finished"),
            record("Dune", "Frank Herbert", "currently_reading"),
            record("Piranesi", "Susanna Clarke", "want_to_read"),
            record("Ulysses", "James Joyce", "did_not_finish"),
            record("Ghost Book", "Nobody", "deleted"),
        ];
        let catalog = build_catalog("Alice", &records);

        assert_eq!(catalog.name, "Alice");
        // currently_reading は読了扱い
        assert!(catalog.finished_titles.contains("the hobbit"));
        assert!(catalog.finished_titles.contains("dune"));
        assert_eq!(catalog.finished_titles.len(), 2);
        assert_eq!(catalog.want_titles.len(), 1);
        assert_eq!(catalog.dnf_titles.len(), 1);
        // deleted は完全に除外
        assert_eq!(catalog.all_titles.len(), 4);
        assert!(!catalog.all_titles.contains("ghost book"));
        assert_eq!(catalog.rows.len(), 4);

        assert!(catalog.finished_authors.contains("j.r.r. tolkien"));
        assert!(catalog.finished_authors.contains("frank herbert"));
        assert_eq!(catalog.all_authors.len(), 4);
    }

    #[test]
    fn test_build_catalog_unknown_status_only_in_all() {
        let records = vec![record("Mystery", "Someone", "on_hold")];
        let catalog = build_catalog("Bob", &records);

        assert_eq!(catalog.all_titles.len(), 1);
        assert!(catalog.finished_titles.is_empty());
        assert!(catalog.want_titles.is_empty());
        assert!(catalog.dnf_titles.is_empty());
    }

    #[test]
    fn test_build_catalog_empty_author_excluded() {
        let records = vec![
            BookRecord {
                title: Some("Anonymous Work".to_string()),
                author: None,
                status: ReadingStatus::Finished,
            },
        ];
        let catalog = build_catalog("Carol", &records);

        assert!(catalog.all_authors.is_empty());
        assert!(catalog.finished_authors.is_empty());
        assert_eq!(catalog.finished_titles.len(), 1);
    }

    #[test]
    fn test_build_catalog_duplicates_collapse() {
        let records = vec![
            record("The Hobbit", "J.R.R. Tolkien", "finished"),
            record("THE HOBBIT!", "J.R.R. Tolkien", "finished"),
        ];
        let catalog = build_catalog("Dave", &records);

        assert_eq!(catalog.finished_titles.len(), 1);
        assert_eq!(catalog.rows.len(), 2);
    }

    #[test]
    fn test_finish_rate() {
        let records = vec![
            record("A", "x", "finished"),
            record("B", "y", "want_to_read"),
        ];
        let catalog = build_catalog("Eve", &records);
        assert!((catalog.finish_rate() - 0.5).abs() < 1e-9);

        let empty = build_catalog("Nobody", &[]);
        assert_eq!(empty.finish_rate(), 0.0);
    }
}
