//! Reading Compatibility Analyzer
//!
//! 読書リスト（CSV）同士の相性スコアを算出し、
//! ランキング付きレポートを生成する。

pub mod batch;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod export;
pub mod loader;
pub mod normalizer;
pub mod scoring;

pub use batch::{compare_pair, run_batch, BatchReport};
pub use catalog::{build_catalog, BookRecord, PersonCatalog, ReadingStatus};
pub use diagnosis::generate_diagnosis;
pub use error::{CompatError, Result};
pub use scoring::{score, PairResult, ScoreBreakdown};
