use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompatError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("読書リストが見つかりません: {0}")]
    NoReadingLists(String),

    #[error("比較には読書リストが2件以上必要です（検出: {0}件）")]
    TooFewSources(usize),

    #[error("CSV解析エラー: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompatError>;
