use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-describe")]
#[command(about = "画像説明文を Word/テキスト/ZIP/TEI XML/CSV に出力するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 説明文をエクスポート
    Export {
        /// 入力JSONファイル、または画像フォルダ（同名 .txt を説明文として読む）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力形式（複数指定可、`all` で全形式。省略時は設定の既定値）
        #[arg(short, long)]
        format: Vec<String>,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ベースファイル名（拡張子なし）
        #[arg(short, long)]
        name: Option<String>,
    },

    /// 対応している出力形式を一覧表示
    Formats,

    /// 対話的に形式とファイル名を選んで出力
    Interactive {
        /// 入力JSONファイル、または画像フォルダ
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 設定ファイルのパスを表示
        #[arg(long)]
        path: bool,
    },
}
