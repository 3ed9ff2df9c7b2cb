//! 読書リストCSVの検出・読み込みモジュール
//!
//! フォルダ直下の `*.csv` を1人1ファイルとして読み込む。
//! 表示名はファイル名から導出する（`Tracked_Books_-_` 接頭辞を
//! 除去し、アンダースコアを空白へ）。

use crate::catalog::{BookRecord, ReadingStatus};
use crate::error::{CompatError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 検出した読書リスト1件
#[derive(Debug, Clone)]
pub struct ListSource {
    pub path: PathBuf,
    /// ファイル名から導出した表示名
    pub name: String,
}

/// CSVの1行（不明な列は無視、欠損は None）
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Author")]
    author: Option<String>,
    #[serde(rename = "Status")]
    status: Option<String>,
}

const LIST_PREFIX: &str = "Tracked_Books_-_";

/// フォルダ直下のCSVファイルを列挙する（ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<ListSource>> {
    if !folder.exists() {
        return Err(CompatError::FolderNotFound(folder.display().to_string()));
    }

    let mut sources = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            if ext.to_string_lossy().eq_ignore_ascii_case("csv") {
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();

                sources.push(ListSource {
                    path: path.to_path_buf(),
                    name: display_name(&stem),
                });
            }
        }
    }

    // ファイル名でソート
    sources.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(sources)
}

/// ファイル名の語幹から表示名を導出する
///
/// 接頭辞除去と `_` → 空白の置換で空になった場合は語幹をそのまま使う。
fn display_name(stem: &str) -> String {
    let name = stem
        .replace(LIST_PREFIX, "")
        .replace('_', " ")
        .trim()
        .to_string();
    if name.is_empty() {
        stem.to_string()
    } else {
        name
    }
}

/// CSVファイルを読書記録の列へ読み込む
///
/// ヘッダは `Title` / `Author` / `Status`（それ以外の列は無視）。
/// 欠損フィールドはエラーにせず `None` として取り込む。
pub fn load_records(path: &Path) -> Result<Vec<BookRecord>> {
    if !path.exists() {
        return Err(CompatError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let row = row?;
        records.push(BookRecord {
            title: row.title.filter(|t| !t.is_empty()),
            author: row.author.filter(|a| !a.is_empty()),
            status: ReadingStatus::parse(row.status.as_deref().unwrap_or("")),
        });
    }

    Ok(records)
}
