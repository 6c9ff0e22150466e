use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keyword-tagger")]
#[command(about = "キーワード辞書によるテキスト分類・タグ付けツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSV/Excelのテキスト列を分類してタグ列を付与
    Classify {
        /// 入力ファイル (csv/tsv/xlsx/xls/ods)
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル (csv/xlsx)（デフォルト: 入力フォルダ/classified_data.csv）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 辞書JSONファイル（省略時はデフォルト辞書）
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// 分類対象のテキスト列名（デフォルト: Statement）
        #[arg(short = 'c', long)]
        text_column: Option<String>,

        /// プレビュー行数（0で非表示）
        #[arg(long)]
        preview: Option<usize>,

        /// 使用した辞書を表示
        #[arg(long)]
        show_dictionaries: bool,
    },

    /// 辞書の表示・編集
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },

    /// 設定を表示/編集
    Config {
        /// テキスト列名を設定
        #[arg(long)]
        set_text_column: Option<String>,

        /// プレビュー行数を設定
        #[arg(long)]
        set_preview_rows: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum DictAction {
    /// 辞書をJSONで表示
    Show {
        /// 辞書JSONファイル（省略時はデフォルト辞書）
        #[arg(short, long)]
        dict: Option<PathBuf>,
    },

    /// エディタで辞書を編集
    Edit {
        /// 辞書JSONファイル（存在しなければ作成）
        #[arg(short, long, required = true)]
        dict: PathBuf,
    },

    /// デフォルト辞書に戻す
    Reset {
        /// 辞書JSONファイル
        #[arg(short, long, required = true)]
        dict: PathBuf,
    },

    /// 辞書ファイルを検証
    Check {
        /// 辞書JSONファイル
        #[arg(required = true)]
        dict: PathBuf,
    },
}
