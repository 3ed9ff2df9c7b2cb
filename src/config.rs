use crate::error::{CompatError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSONレポートのファイル名
    pub output_json: String,
    /// サマリCSVのファイル名
    pub output_csv: String,
    /// コンソールに表示する上位ペア数
    pub top_display: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_json: "compatibility_results.json".into(),
            output_csv: "compatibility_summary.csv".into(),
            top_display: 10,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CompatError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("reading-compat").join("config.json"))
    }
}
