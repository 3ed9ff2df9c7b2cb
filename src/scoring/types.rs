use serde::{Deserialize, Serialize};

/// スコア内訳（各成分は重み乗算済み、合計が総合スコア）
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 共有読了本（重み0.35）
    pub shared_finished: f64,
    /// 共有著者（重み0.30、Jaccardの平方根）
    pub shared_authors: f64,
    /// 相互推薦可能性（重み0.10）
    pub cross_recommendations: f64,
    /// 共有積読（重み0.20）
    pub shared_tbr: f64,
    /// 読書行動の類似（重み0.05）
    pub reading_behavior: f64,
    /// 意見対立ペナルティ（常に0以下、下限-0.15）
    pub disagreement_penalty: f64,
}

impl ScoreBreakdown {
    /// 総合スコア（0..1スケール、ペナルティ込みで負になり得る）
    pub fn total(&self) -> f64 {
        self.shared_finished
            + self.shared_authors
            + self.cross_recommendations
            + self.shared_tbr
            + self.reading_behavior
            + self.disagreement_penalty
    }

    /// 出力用に各成分を小数3桁へ丸める
    pub fn rounded(&self) -> ScoreBreakdown {
        fn r3(v: f64) -> f64 {
            (v * 1000.0).round() / 1000.0
        }
        ScoreBreakdown {
            shared_finished: r3(self.shared_finished),
            shared_authors: r3(self.shared_authors),
            cross_recommendations: r3(self.cross_recommendations),
            shared_tbr: r3(self.shared_tbr),
            reading_behavior: r3(self.reading_behavior),
            disagreement_penalty: r3(self.disagreement_penalty),
        }
    }
}

/// 集計メトリクス（件数）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairMetrics {
    pub person1_books_finished: usize,
    pub person2_books_finished: usize,
    pub shared_books_finished: usize,
    pub shared_authors: usize,
    pub cross_recommendations: usize,
    pub shared_tbr: usize,
    pub disagreements: usize,
}

/// 共有著者の詳細（表示用に再大文字化した著者名と各自の冊数）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedAuthor {
    pub author: String,
    pub person1_count: usize,
    pub person2_count: usize,
    pub total: usize,
}

/// ペア1組の比較結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairResult {
    pub person1: String,
    pub person2: String,
    /// パーセント表記、小数1桁（-15.0 〜 100.0）
    pub compatibility_score: f64,
    pub metrics: PairMetrics,
    /// 共有読了本のサンプル（正規化タイトルの辞書順、最大10件）
    pub top_shared_books: Vec<String>,
    /// 共有著者の上位（合計冊数の降順、最大5件）
    pub top_shared_authors: Vec<SharedAuthor>,
    /// 共有積読のサンプル（辞書順、最大5件）
    pub shared_tbr_sample: Vec<String>,
    pub diagnosis: String,
    pub score_breakdown: ScoreBreakdown,
}
