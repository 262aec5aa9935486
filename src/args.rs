// src/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::parsers::{self, SelectionArg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "doc_stats",
    version = crate::VERSION,
    about = "ドキュメントの行数/単語数/文字数を解析するツール"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// あいさつを表示
    Greet,

    /// 現在時刻と日付を表示
    Time,

    /// ドキュメントを解析して詳細レポートを出力
    Analyze {
        /// 対象ファイル (省略時は標準入力から読み込み)
        #[arg(value_hint = ValueHint::FilePath)]
        path: Option<PathBuf>,

        /// 選択範囲 (例: 1:0..2:3, 0始まりの 行:文字, 終端は排他)
        #[arg(long)]
        select: Option<SelectionArg>,

        /// 出力フォーマット
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// 行数と単語数のみをステータス行に一時表示
    Quick {
        /// 対象ファイル (省略時は標準入力から読み込み)
        #[arg(value_hint = ValueHint::FilePath)]
        path: Option<PathBuf>,

        /// 表示を消すまでの秒数
        #[arg(long, default_value = "5", value_parser = parsers::parse_hold_seconds)]
        hold: u64,
    },
}
