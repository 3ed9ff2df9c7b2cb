//! 全ペア比較の実行モジュール
//!
//! 読み込み済みカタログの全組み合わせ C(N,2) を比較し、
//! スコア降順に並べたレポートを構築する。1ペアの失敗は
//! 報告して読み飛ばし、他ペアの処理は継続する。

use crate::catalog::PersonCatalog;
use crate::diagnosis::generate_diagnosis;
use crate::error::{CompatError, Result};
use crate::scoring::{
    self, PairMetrics, PairResult, SHARED_BOOKS_SAMPLE, SHARED_TBR_SAMPLE, TOP_AUTHORS,
};
use serde::{Deserialize, Serialize};

/// レポートのメタ情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub total_pairings: usize,
    /// 平均相性スコア（パーセント、小数1桁。ペア0件なら0.0）
    pub average_compatibility: f64,
}

/// バッチ実行の成果物（JSON出力のルート）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub metadata: ReportMetadata,
    pub results: Vec<PairResult>,
}

/// 2人のカタログを比較して1件の結果を組み立てる
pub fn compare_pair(c1: &PersonCatalog, c2: &PersonCatalog) -> Result<PairResult> {
    let breakdown = scoring::score(c1, c2);
    let total = breakdown.total();

    let shared_finished = c1.finished_titles.intersection(&c2.finished_titles).count();
    let cross_recs = scoring::cross_recommendations(c1, c2);
    let disagreements = scoring::disagreements(c1, c2);

    let author_details = scoring::shared_author_details(c1, c2);
    let shared_authors = author_details.len();

    let diagnosis = generate_diagnosis(
        total,
        c1.finished_titles.len(),
        c2.finished_titles.len(),
        shared_finished,
        shared_authors,
        cross_recs,
        disagreements,
    );

    let mut top_shared_authors = author_details;
    top_shared_authors.truncate(TOP_AUTHORS);

    Ok(PairResult {
        person1: c1.name.clone(),
        person2: c2.name.clone(),
        compatibility_score: scoring::to_percent(total),
        metrics: PairMetrics {
            person1_books_finished: c1.finished_titles.len(),
            person2_books_finished: c2.finished_titles.len(),
            shared_books_finished: shared_finished,
            shared_authors,
            cross_recommendations: cross_recs,
            shared_tbr: c1.want_titles.intersection(&c2.want_titles).count(),
            disagreements,
        },
        top_shared_books: scoring::sorted_sample(
            &c1.finished_titles,
            &c2.finished_titles,
            SHARED_BOOKS_SAMPLE,
        ),
        top_shared_authors,
        shared_tbr_sample: scoring::sorted_sample(
            &c1.want_titles,
            &c2.want_titles,
            SHARED_TBR_SAMPLE,
        ),
        diagnosis,
        score_breakdown: breakdown.rounded(),
    })
}

/// 全ペアを比較しスコア降順のレポートを返す
///
/// カタログが2件未満なら `TooFewSources`。1ペアの失敗は
/// コンソールに報告して残りを継続する（ペア単位の部分失敗隔離）。
pub fn run_batch(catalogs: &[PersonCatalog], verbose: bool) -> Result<BatchReport> {
    if catalogs.len() < 2 {
        return Err(CompatError::TooFewSources(catalogs.len()));
    }

    let mut results = Vec::new();
    for i in 0..catalogs.len() {
        for j in (i + 1)..catalogs.len() {
            let (c1, c2) = (&catalogs[i], &catalogs[j]);
            match compare_pair(c1, c2) {
                Ok(result) => {
                    if verbose {
                        println!("  {} × {}: {:.1}%", c1.name, c2.name, result.compatibility_score);
                    }
                    results.push(result);
                }
                Err(e) => {
                    println!("  ✗ {} × {} の比較に失敗: {}", c1.name, c2.name, e);
                }
            }
        }
    }

    // スコア降順（同点は算出順のまま）
    results.sort_by(|a, b| {
        b.compatibility_score
            .partial_cmp(&a.compatibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let average = if results.is_empty() {
        0.0
    } else {
        let sum: f64 = results.iter().map(|r| r.compatibility_score).sum();
        (sum / results.len() as f64 * 10.0).round() / 10.0
    };

    Ok(BatchReport {
        metadata: ReportMetadata {
            generated_at: chrono::Local::now().to_rfc3339(),
            total_pairings: results.len(),
            average_compatibility: average,
        },
        results,
    })
}
