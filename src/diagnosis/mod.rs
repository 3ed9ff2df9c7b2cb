//! 定性診断テキスト生成モジュール
//!
//! スコアとメトリクスから英語の診断文を組み立てる。
//! 固定順の条件付き節を単一スペースで連結するだけの純関数。

/// 相性レベル（スコア閾値で決定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Moderate,
    Low,
    Minimal,
}

impl CompatibilityLevel {
    /// 0..1スケールのスコアからレベルを決める
    pub fn from_score(score: f64) -> Self {
        if score >= 0.70 {
            CompatibilityLevel::Excellent
        } else if score >= 0.50 {
            CompatibilityLevel::Good
        } else if score >= 0.30 {
            CompatibilityLevel::Moderate
        } else if score >= 0.15 {
            CompatibilityLevel::Low
        } else {
            CompatibilityLevel::Minimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompatibilityLevel::Excellent => "EXCELLENT",
            CompatibilityLevel::Good => "GOOD",
            CompatibilityLevel::Moderate => "MODERATE",
            CompatibilityLevel::Low => "LOW",
            CompatibilityLevel::Minimal => "MINIMAL",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            CompatibilityLevel::Excellent => "🌟",
            CompatibilityLevel::Good => "😊",
            CompatibilityLevel::Moderate => "👍",
            CompatibilityLevel::Low => "🤔",
            CompatibilityLevel::Minimal => "😅",
        }
    }
}

/// 診断文を生成する
///
/// `score` は0..1スケールの総合スコア。節は以下の固定順で評価し、
/// 条件を満たしたものだけを単一スペースで連結する。
/// 1. レベル見出し（常に出力）
/// 2. 共有読了本の多寡
/// 3. 蔵書規模の偏り（差が20冊以上のときのみ）
/// 4. 推薦可能性（5冊以下は省略）
/// 5. 意見対立（0件は省略）
/// 6. 著者の重なり（2人以下は省略）
pub fn generate_diagnosis(
    score: f64,
    person1_finished: usize,
    person2_finished: usize,
    shared_finished: usize,
    shared_authors: usize,
    cross_recs: usize,
    disagreements: usize,
) -> String {
    let level = CompatibilityLevel::from_score(score);
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "{} {} COMPATIBILITY ({:.1}%)",
        level.glyph(),
        level.label(),
        score * 100.0
    ));

    if shared_finished > 10 {
        parts.push(format!("Strong overlap with {} shared books.", shared_finished));
    } else if shared_finished > 5 {
        parts.push(format!("Decent overlap with {} shared books.", shared_finished));
    } else if shared_finished > 2 {
        parts.push(format!("Some overlap with {} shared books.", shared_finished));
    } else {
        parts.push(format!("Limited overlap with only {} shared books.", shared_finished));
    }

    let size_diff = person1_finished.abs_diff(person2_finished);
    if size_diff >= 20 {
        if person1_finished > person2_finished * 2 {
            parts.push("Large library size difference - first reader is much more prolific.".to_string());
        } else if person2_finished > person1_finished * 2 {
            parts.push("Large library size difference - second reader is much more prolific.".to_string());
        }
    }

    if cross_recs > 20 {
        parts.push(format!("Excellent recommendation potential ({} books to share).", cross_recs));
    } else if cross_recs > 10 {
        parts.push(format!("Good recommendation potential ({} books to share).", cross_recs));
    } else if cross_recs > 5 {
        parts.push(format!("Some recommendation potential ({} books to share).", cross_recs));
    }

    if disagreements > 5 {
        parts.push(format!("Notable taste differences ({} disagreements).", disagreements));
    } else if disagreements > 0 {
        parts.push(format!("Minor taste differences ({} disagreements).", disagreements));
    }

    if shared_authors > 5 {
        parts.push(format!("Very strong author overlap ({} shared).", shared_authors));
    } else if shared_authors > 2 {
        parts.push(format!("Good author overlap ({} shared).", shared_authors));
    }

    parts.join(" ")
}
