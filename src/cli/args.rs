// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use code_counter_core::DEFAULT_LANGUAGE;

use super::value_enum::CliOutputShape;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "code_counter",
    version = crate::VERSION,
    about = "ソースコードの行をコード/空行/行コメント/ブロックコメントに分類して集計するツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 集計するファイル（`-` または省略時は標準入力）
    #[arg(value_hint = ValueHint::FilePath, conflicts_with = "text")]
    pub inputs: Vec<PathBuf>,

    /// ファイルの代わりにソースコード文字列を直接分類する
    #[arg(long, value_name = "SOURCE")]
    pub text: Option<String>,

    /// 既定の言語（名前またはエイリアス）
    #[arg(short, long, default_value = DEFAULT_LANGUAGE, help_heading = "言語")]
    pub language: String,

    /// ファイルの拡張子から言語を選ぶ（--language より優先）
    #[arg(long, help_heading = "言語")]
    pub by_suffix: bool,

    /// 追加の言語定義ファイル（.json / .yaml / .yml）
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "言語")]
    pub languages: Option<PathBuf>,

    /// 言語テーブルを表示して終了
    #[arg(long, help_heading = "言語")]
    pub list_languages: bool,

    /// 全入力の件数を累積し、最後に1件だけ出力する
    #[arg(long, help_heading = "集計")]
    pub cumulative: bool,

    /// 入力ごとの結果に加えて合計も出力する
    #[arg(long, conflicts_with = "cumulative", help_heading = "集計")]
    pub total: bool,

    /// ブロックコメント内では行コメント・空行の判定より先にブロックとして数える
    #[arg(long, help_heading = "集計")]
    pub block_first: bool,

    /// `/* note */` のように同じ行で閉じるブロックコメントも開いたままとして扱う
    #[arg(long, help_heading = "集計")]
    pub keep_same_line_open: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "mapping", help_heading = "出力")]
    pub format: CliOutputShape,

    /// rows 形式の区切り文字
    #[arg(long, default_value = ",", help_heading = "出力")]
    pub delimiter: String,

    /// 各行の分類結果をデバッグログに出力する
    #[arg(short, long)]
    pub verbose: bool,
}
