//! タイトル・著者名の正規化モジュール
//!
//! 比較用の正規化キーを生成する。全関数は純粋で決定的。
//!
//! ## 正規化ルール
//! 1. タイトル: 小文字化 → 記号除去 → 空白圧縮
//! 2. 著者: `+` 区切りの先頭（主著者）のみ、小文字化

lazy_static::lazy_static! {
    // Unicode対応の \w / \s 判定（記号・約物を落とす）
    static ref NON_WORD_RE: regex::Regex = regex::Regex::new(r"[^\w\s]").unwrap();
}

/// タイトルを比較用キーに正規化する
///
/// 空入力は空文字列を返す。冪等（2回適用しても結果は同じ）。
pub fn normalize_title(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }
    let lowered = title.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 著者文字列から主著者を抽出する
///
/// 共著は `+` 区切り。先頭の著者を小文字化して返す。
/// 名前中の記号（ピリオド等）はそのまま保持する。
pub fn primary_author(author: &str) -> String {
    if author.is_empty() {
        return String::new();
    }
    author
        .split('+')
        .next()
        .map(|a| a.trim().to_lowercase())
        .unwrap_or_default()
}

/// 表示用に各単語の先頭を大文字化する
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
