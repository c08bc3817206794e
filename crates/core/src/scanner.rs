// crates/core/src/scanner.rs
//! 行分類ステートマシン
//!
//! 1回の走査の間だけ「ブロックコメント内かどうか」を保持し、
//! 各物理行を コード / 空行 / 行コメント / ブロックコメント に分類します。

use crate::language::{BlockMarker, LanguageDescriptor};

/// 行の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Code,
    Blank,
    Inline,
    Block,
}

impl LineKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Blank => "blank",
            Self::Inline => "inline",
            Self::Block => "block",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// ブロックコメント内の行に対する判定順序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentPrecedence {
    /// 行コメント・空行の判定をブロック状態より先に行う。
    /// ブロック内で行コメント記号から始まる行は行コメントとして数えられる。
    #[default]
    InlineFirst,
    /// ブロックが開いている間は全ての行をブロックコメントとして数える
    BlockFirst,
}

/// 走査ルール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRules {
    pub precedence: CommentPrecedence,
    /// 開始記号の後ろが終了記号で終わる行（`/* note */`）をその場で閉じる
    pub close_same_line: bool,
}

impl ScanRules {
    /// 判定順序・同一行の扱いとも、特別扱いなしの素のアルゴリズム
    pub const fn literal() -> Self {
        Self { precedence: CommentPrecedence::InlineFirst, close_same_line: false }
    }
}

impl Default for ScanRules {
    fn default() -> Self {
        Self { precedence: CommentPrecedence::InlineFirst, close_same_line: true }
    }
}

/// 走査中のブロックコメント状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState<'a> {
    #[default]
    Closed,
    /// 開いているブロックの記号の組（開始行は消費済み）
    Open(&'a BlockMarker),
}

/// 1言語・1走査ぶんの行分類器
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    language: &'a LanguageDescriptor,
    rules: ScanRules,
    block: BlockState<'a>,
}

impl<'a> LineScanner<'a> {
    pub fn new(language: &'a LanguageDescriptor, rules: ScanRules) -> Self {
        Self { language, rules, block: BlockState::Closed }
    }

    /// 1行を分類する。`None` は入力切れとして空行扱い。
    pub fn classify(&mut self, line: Option<&str>) -> LineKind {
        let Some(line) = line else {
            return LineKind::Blank;
        };
        let trimmed = line.trim();

        if let (CommentPrecedence::BlockFirst, BlockState::Open(marker)) =
            (self.rules.precedence, self.block)
        {
            return self.continue_block(trimmed, marker);
        }

        if trimmed.starts_with(self.language.inline_marker.as_str()) {
            return LineKind::Inline;
        }
        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        match self.block {
            BlockState::Closed => self.open_block(trimmed),
            BlockState::Open(marker) => self.continue_block(trimmed, marker),
        }
    }

    fn open_block(&mut self, trimmed: &str) -> LineKind {
        let language = self.language;
        for marker in &language.block_markers {
            if let Some(rest) = trimmed.strip_prefix(marker.start.as_str()) {
                let closes_here = self.rules.close_same_line && rest.ends_with(marker.end.as_str());
                if !closes_here {
                    self.block = BlockState::Open(marker);
                }
                return LineKind::Block;
            }
        }
        LineKind::Code
    }

    fn continue_block(&mut self, trimmed: &str, marker: &'a BlockMarker) -> LineKind {
        if trimmed.ends_with(marker.end.as_str()) {
            self.block = BlockState::Closed;
        }
        LineKind::Block
    }

    pub const fn block_state(&self) -> BlockState<'a> {
        self.block
    }

    pub const fn is_in_block_comment(&self) -> bool {
        matches!(self.block, BlockState::Open(_))
    }

    /// 状態をリセット
    pub fn reset(&mut self) {
        self.block = BlockState::Closed;
    }
}
