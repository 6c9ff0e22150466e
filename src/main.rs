use clap::Parser;
use keyword_tagger::{cli, config, dictionary_editor, error, pipeline, preview};
use cli::{Cli, Commands, DictAction};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Classify { input, output, dict, text_column, preview: preview_rows, show_dictionaries } => {
            println!("📑 keyword-tagger - 辞書分類\n");
            let config = Config::load()?;

            let options = pipeline::ClassifyOptions {
                input,
                output,
                dictionary: dict,
                text_column: text_column.unwrap_or_else(|| config.text_column.clone()),
                output_file_name: config.output_file_name.clone(),
                show_progress: !cli.verbose,
            };

            let outcome = pipeline::classify_file(&options)?;

            println!("\n集計:");
            preview::print_summary(&outcome.summary);

            let rows = preview_rows.unwrap_or(config.preview_rows);
            if rows > 0 {
                println!("\n🔍 プレビュー (先頭{}件)", rows.min(outcome.dataset.len()));
                print!("{}", preview::render_preview(&outcome.dataset, rows));
            }

            if show_dictionaries {
                println!("\n使用した辞書:");
                println!("{}", outcome.dictionaries.to_json_pretty()?);
            }

            println!("\n✅ 分類完了");
        }

        Commands::Dict { action } => match action {
            DictAction::Show { dict } => dictionary_editor::show(dict.as_deref())?,
            DictAction::Edit { dict } => dictionary_editor::edit(&dict)?,
            DictAction::Reset { dict } => dictionary_editor::reset(&dict)?,
            DictAction::Check { dict } => dictionary_editor::check(&dict)?,
        },

        Commands::Config { set_text_column, set_preview_rows, show } => {
            let mut config = Config::load()?;

            if let Some(column) = set_text_column {
                config.set_text_column(column)?;
                println!("✔ テキスト列を設定しました");
            }

            if let Some(rows) = set_preview_rows {
                config.set_preview_rows(rows)?;
                println!("✔ プレビュー行数を設定しました");
            }

            if show {
                println!("設定:");
                println!("  テキスト列: {}", config.text_column);
                println!("  プレビュー行数: {}", config.preview_rows);
                println!("  出力ファイル名: {}", config.output_file_name);
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
