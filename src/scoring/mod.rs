//! 相性スコア算出モジュール
//!
//! 2人のカタログから6成分の重み付き複合スコアを算出する。
//!
//! ## 成分と重み
//! 1. 共有読了本 35% … 小さい方の蔵書数で正規化
//! 2. 共有著者 30% … Jaccardの平方根（部分一致でも点が付くよう圧縮）
//! 3. 相互推薦 10% … 一方が読了済みで他方が読みたい本（双方向）
//! 4. 共有積読 20% … Jaccard（平方根なし）
//! 5. 読書行動 5% … 読了率の近さ70% + 蔵書規模比30%
//! 6. 対立ペナルティ … 読了×途中放棄の衝突、1件-0.02、下限-0.15

mod types;

pub use types::{PairMetrics, PairResult, ScoreBreakdown, SharedAuthor};

use crate::catalog::PersonCatalog;
use crate::normalizer::title_case;
use std::collections::HashSet;

/// 共有読了本サンプルの上限
pub const SHARED_BOOKS_SAMPLE: usize = 10;
/// 共有積読サンプルの上限
pub const SHARED_TBR_SAMPLE: usize = 5;
/// 共有著者詳細の上限
pub const TOP_AUTHORS: usize = 5;

/// Jaccard係数（和集合が空なら0）
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// 2人のカタログから重み付きスコア内訳を算出する
///
/// 引数を入れ替えても総合スコアは変わらない（全成分が対称）。
/// 分母が0になるケースはすべて成分0として扱う。
pub fn score(c1: &PersonCatalog, c2: &PersonCatalog) -> ScoreBreakdown {
    let f1 = c1.finished_titles.len();
    let f2 = c2.finished_titles.len();
    let shared_finished = c1.finished_titles.intersection(&c2.finished_titles).count();

    let mut breakdown = ScoreBreakdown::default();

    // 1. 共有読了本（35%）: 少ない方の蔵書数で正規化
    if f1 + f2 > 0 && f1.min(f2) > 0 {
        let ratio = shared_finished as f64 / f1.min(f2) as f64;
        breakdown.shared_finished = ratio.min(1.0) * 0.35;
    }

    // 2. 共有著者（30%）
    if !c1.all_authors.is_empty() || !c2.all_authors.is_empty() {
        breakdown.shared_authors = jaccard(&c1.all_authors, &c2.all_authors).sqrt() * 0.30;
    }

    // 3. 相互推薦（10%）
    let cross = cross_recommendations(c1, c2);
    let total_possible = f1 + f2;
    if total_possible > 0 {
        let ratio = cross as f64 / (total_possible as f64 * 0.1);
        breakdown.cross_recommendations = ratio.min(1.0) * 0.10;
    }

    // 4. 共有積読（20%）
    breakdown.shared_tbr = jaccard(&c1.want_titles, &c2.want_titles) * 0.20;

    // 5. 読書行動（5%）
    let rate_similarity = 1.0 - (c1.finish_rate() - c2.finish_rate()).abs();
    let a1 = c1.all_titles.len();
    let a2 = c2.all_titles.len();
    let size_ratio = if a1.max(a2) > 0 {
        a1.min(a2) as f64 / a1.max(a2) as f64
    } else {
        0.0
    };
    breakdown.reading_behavior = (rate_similarity * 0.7 + size_ratio * 0.3) * 0.05;

    // 6. 対立ペナルティ
    let disagreements = disagreements(c1, c2);
    breakdown.disagreement_penalty = -(disagreements as f64 * 0.02).min(0.15);

    breakdown
}

/// 相互推薦可能数（一方が読了済み ∩ 他方が読みたい、双方向の合計）
pub fn cross_recommendations(c1: &PersonCatalog, c2: &PersonCatalog) -> usize {
    c1.finished_titles.intersection(&c2.want_titles).count()
        + c2.finished_titles.intersection(&c1.want_titles).count()
}

/// 意見対立数（一方が読了 ∩ 他方が途中放棄、双方向の合計）
pub fn disagreements(c1: &PersonCatalog, c2: &PersonCatalog) -> usize {
    c1.finished_titles.intersection(&c2.dnf_titles).count()
        + c2.finished_titles.intersection(&c1.dnf_titles).count()
}

/// 共有著者の詳細リストを算出する（全件、切り詰めは呼び出し側）
///
/// 対象は両者の読了著者の積集合。各自の読了扱いレコード数を数え、
/// 合計冊数の降順で並べる。基底順は正規化著者名の辞書順なので、
/// 同数のときはアルファベット順に落ちる（安定ソート）。
pub fn shared_author_details(c1: &PersonCatalog, c2: &PersonCatalog) -> Vec<SharedAuthor> {
    let mut shared: Vec<&String> = c1
        .finished_authors
        .intersection(&c2.finished_authors)
        .collect();
    shared.sort();

    let mut details: Vec<SharedAuthor> = shared
        .into_iter()
        .map(|author| {
            let count = |catalog: &PersonCatalog| {
                catalog
                    .rows
                    .iter()
                    .filter(|r| r.status.counts_as_finished() && &r.author == author)
                    .count()
            };
            let person1_count = count(c1);
            let person2_count = count(c2);
            SharedAuthor {
                author: title_case(author),
                person1_count,
                person2_count,
                total: person1_count + person2_count,
            }
        })
        .collect();

    details.sort_by(|a, b| b.total.cmp(&a.total));
    details
}

/// 積集合を辞書順に並べて上限まで切り出す
///
/// 元の集合に順序はないため、再現可能な出力のために
/// 正規化タイトルの辞書順を正準順とする。
pub fn sorted_sample(a: &HashSet<String>, b: &HashSet<String>, cap: usize) -> Vec<String> {
    let mut sample: Vec<String> = a.intersection(b).cloned().collect();
    sample.sort();
    sample.truncate(cap);
    sample
}

/// スコアをパーセント表記（小数1桁）へ丸める
pub fn to_percent(total: f64) -> f64 {
    (total * 1000.0).round() / 10.0
}
