//! レポート出力モジュール
//!
//! バッチ結果をJSON（全詳細）とCSV（サマリ）へ書き出し、
//! コンソールに上位ペアを表示する。

use crate::batch::BatchReport;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// 出力形式
#[derive(Clone, Copy, Debug, Default)]
pub enum ExportFormat {
    Json,
    Csv,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, csv, or both", s)),
        }
    }
}

/// レポートをJSONへ書き出す
pub fn write_json(report: &BatchReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(output_path, json)?;
    Ok(())
}

/// サマリCSVを書き出す
///
/// 診断文は最初の一文のみ（`.` 区切りの先頭）を載せる。
pub fn write_summary_csv(report: &BatchReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(output_path)?;

    writer.write_record([
        "Person 1",
        "Person 2",
        "Compatibility %",
        "Shared Books",
        "Shared Authors",
        "Can Recommend",
        "Diagnosis",
    ])?;

    for result in &report.results {
        let first_sentence = result.diagnosis.split('.').next().unwrap_or("");
        writer.write_record([
            result.person1.as_str(),
            result.person2.as_str(),
            &format!("{:.1}", result.compatibility_score),
            &result.metrics.shared_books_finished.to_string(),
            &result.metrics.shared_authors.to_string(),
            &result.metrics.cross_recommendations.to_string(),
            first_sentence,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// 上位ペアをコンソールに表示する
pub fn print_top_matches(report: &BatchReport, top: usize) {
    println!("\n🏆 TOP {} MATCHES:", top);
    for (i, result) in report.results.iter().take(top).enumerate() {
        println!(
            "{}. {} × {}: {:.1}%",
            i + 1,
            result.person1,
            result.person2,
            result.compatibility_score
        );
    }
}

/// 形式指定に従って出力ファイルを生成する
///
/// 書き出したファイルのパスを返す。
pub fn export_report(
    report: &BatchReport,
    format: ExportFormat,
    output_dir: &Path,
    json_name: &str,
    csv_name: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    match format {
        ExportFormat::Json => {
            let path = output_dir.join(json_name);
            println!("- JSONを生成中...");
            write_json(report, &path)?;
            println!("✔ JSON出力: {}", path.display());
            written.push(path);
        }
        ExportFormat::Csv => {
            let path = output_dir.join(csv_name);
            println!("- サマリCSVを生成中...");
            write_summary_csv(report, &path)?;
            println!("✔ CSV出力: {}", path.display());
            written.push(path);
        }
        ExportFormat::Both => {
            let json_path = output_dir.join(json_name);
            println!("- JSONを生成中...");
            write_json(report, &json_path)?;
            println!("✔ JSON出力: {}", json_path.display());
            written.push(json_path);

            let csv_path = output_dir.join(csv_name);
            println!("- サマリCSVを生成中...");
            write_summary_csv(report, &csv_path)?;
            println!("✔ CSV出力: {}", csv_path.display());
            written.push(csv_path);
        }
    }

    Ok(written)
}
