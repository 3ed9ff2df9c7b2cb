use clap::Parser;
use reading_compat_rust::{batch, catalog, cli, config, error, export, loader};

use cli::{Cli, Commands};
use config::Config;
use error::{CompatError, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { folder, output, format, top } => {
            println!("📚 reading-compat - 相性診断\n");

            // 1. 読書リスト検出
            println!("[1/3] 読書リストをスキャン中...");
            let sources = loader::scan_folder(&folder)?;
            if sources.is_empty() {
                return Err(CompatError::NoReadingLists(folder.display().to_string()));
            }
            if sources.len() < 2 {
                return Err(CompatError::TooFewSources(sources.len()));
            }
            println!("✔ {}件の読書リストを検出", sources.len());
            let pair_count = sources.len() * (sources.len() - 1) / 2;
            println!("  {}組の相性を算出します\n", pair_count);

            // 2. 読み込みと比較
            println!("[2/3] 相性を算出中...");
            let mut catalogs = Vec::new();
            for source in &sources {
                match loader::load_records(&source.path) {
                    Ok(records) => {
                        println!("  ✓ {}: {}件", source.name, records.len());
                        catalogs.push(catalog::build_catalog(&source.name, &records));
                    }
                    Err(e) => {
                        // 読めないリストは報告して読み飛ばす
                        println!("  ✗ {} の読み込みに失敗: {}", source.path.display(), e);
                    }
                }
            }
            let report = batch::run_batch(&catalogs, cli.verbose)?;
            println!("✔ 算出完了\n");

            // 3. 出力
            println!("[3/3] レポートを出力中...");
            let output_dir = output.unwrap_or_else(|| folder.join("outputs"));
            export::export_report(
                &report,
                format,
                &output_dir,
                &config.output_json,
                &config.output_csv,
            )?;

            export::print_top_matches(&report, top.unwrap_or(config.top_display));

            println!("\n✅ 診断完了");
        }

        Commands::Pair { file1, file2 } => {
            println!("📚 reading-compat - ペア比較\n");

            let mut catalogs = Vec::new();
            for path in [&file1, &file2] {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();
                let records = loader::load_records(path)?;
                println!("✓ {}: {}件", name, records.len());
                catalogs.push(catalog::build_catalog(&name, &records));
            }

            let result = batch::compare_pair(&catalogs[0], &catalogs[1])?;

            println!("\n{} × {}: {:.1}%", result.person1, result.person2, result.compatibility_score);
            println!("{}", result.diagnosis);
            if !result.top_shared_books.is_empty() {
                println!("\n共有読了本（最大{}件）:", result.top_shared_books.len());
                for title in &result.top_shared_books {
                    println!("  - {}", title);
                }
            }
            if !result.top_shared_authors.is_empty() {
                println!("\n共有著者:");
                for author in &result.top_shared_authors {
                    println!(
                        "  - {} ({}冊 / {}冊)",
                        author.author, author.person1_count, author.person2_count
                    );
                }
            }
        }

        Commands::Config { show } => {
            if show {
                println!("設定:");
                println!("  JSON出力: {}", config.output_json);
                println!("  CSV出力: {}", config.output_csv);
                println!("  上位表示数: {}", config.top_display);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
