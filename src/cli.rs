use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reading-compat")]
#[command(about = "読書リスト相性診断・ランキング生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダ内の読書リストを総当たりで比較しレポートを出力
    Analyze {
        /// 読書リストCSVのフォルダ
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力先ディレクトリ（デフォルト: 入力フォルダ/outputs）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/csv/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// コンソールに表示する上位ペア数（省略時は設定値）
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// 2つの読書リストだけを比較して結果を表示
    Pair {
        /// 1人目の読書リストCSV
        #[arg(required = true)]
        file1: PathBuf,

        /// 2人目の読書リストCSV
        #[arg(required = true)]
        file2: PathBuf,
    },

    /// 設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
