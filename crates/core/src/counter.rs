// crates/core/src/counter.rs
//! 行カウンター
//!
//! 言語の解決、入力の読み込み、1パスの走査、件数の更新をまとめて行います。
//! 累積モードではインスタンスが呼び出しをまたいで状態を持つため、
//! 複数スレッドから同じインスタンスを使う場合は呼び出し側で排他制御が必要です。

use code_counter_shared_kernel::{DomainError, LineCount, LookupField, Result};
use log::{debug, info};

use crate::config::CounterConfig;
use crate::language::{builtin_table, LanguageDescriptor, LanguageTable};
use crate::report::{ClassificationResult, Rendered};
use crate::scanner::{LineKind, LineScanner};
use crate::source::Source;

/// 分類ごとの行数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    pub code: LineCount,
    pub blank: LineCount,
    pub inline: LineCount,
    pub block: LineCount,
}

impl CounterState {
    /// 1行を加算し、加算後のその分類の件数を返す
    pub fn record(&mut self, kind: LineKind) -> LineCount {
        let slot = match kind {
            LineKind::Code => &mut self.code,
            LineKind::Blank => &mut self.blank,
            LineKind::Inline => &mut self.inline,
            LineKind::Block => &mut self.block,
        };
        slot.increment();
        *slot
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn remark(&self) -> LineCount {
        self.inline + self.block
    }

    pub fn total_lines(&self) -> LineCount {
        self.code + self.blank + self.remark()
    }
}

/// 既定言語・累積モード・出力形式を束ねたカウンター
#[derive(Debug, Clone)]
pub struct LineCounter<'t> {
    table: &'t LanguageTable,
    default_language: &'t LanguageDescriptor,
    config: CounterConfig,
    state: CounterState,
}

impl LineCounter<'static> {
    /// 組み込みテーブルを使うカウンター
    pub fn with_builtin(config: CounterConfig) -> Result<Self> {
        Self::new(config, builtin_table())
    }
}

impl<'t> LineCounter<'t> {
    /// 既定言語が解決できない場合は失敗する
    pub fn new(config: CounterConfig, table: &'t LanguageTable) -> Result<Self> {
        let default_language = table.resolve(&config.language)?;
        Ok(Self { table, default_language, config, state: CounterState::default() })
    }

    /// 入力を分類して結果を返す
    ///
    /// 言語の優先順位: 拡張子による選択 > `language` > 既定言語。
    /// 言語の解決と入力の読み込みは件数を変更する前に行われるため、
    /// 失敗した場合に状態は変化しない。
    pub fn classify(
        &mut self,
        source: Source<'_>,
        language: Option<&str>,
        select_by_suffix: bool,
    ) -> Result<ClassificationResult> {
        let descriptor = self.resolve_language(&source, language, select_by_suffix)?;
        let text = source.into_text()?;
        Ok(self.classify_lines(text.lines(), descriptor))
    }

    /// 文字列（またはファイルパス）を分類する簡易版
    pub fn classify_str(&mut self, content: &str, language: Option<&str>) -> Result<ClassificationResult> {
        self.classify(Source::detect(content), language, false)
    }

    /// 設定された出力形式で結果を返す
    pub fn classify_rendered(
        &mut self,
        source: Source<'_>,
        language: Option<&str>,
        select_by_suffix: bool,
    ) -> Result<Rendered> {
        let result = self.classify(source, language, select_by_suffix)?;
        self.render(&result)
    }

    /// 行の並びを1パスで分類する
    ///
    /// ブロックコメントの状態はこの呼び出しの中だけで保持される。
    /// 累積モードでも前回の呼び出しで閉じなかったブロックは引き継がない。
    pub fn classify_lines<'l, I>(&mut self, lines: I, language: &LanguageDescriptor) -> ClassificationResult
    where
        I: IntoIterator<Item = &'l str>,
    {
        if !self.config.cumulative {
            self.state.reset();
        }

        let mut scanner = LineScanner::new(language, self.config.rules);
        for line in lines {
            let kind = scanner.classify(Some(line));
            let count = self.state.record(kind);
            debug!("{:<6} : {} - {}", kind.label(), count, line);
        }
        if scanner.is_in_block_comment() {
            debug!("input ended inside an unterminated block comment");
        }

        ClassificationResult::from_state(language.name.as_str(), &self.state)
    }

    pub fn render(&self, result: &ClassificationResult) -> Result<Rendered> {
        result.render(self.config.shape)
    }

    fn resolve_language(
        &self,
        source: &Source<'_>,
        language: Option<&str>,
        select_by_suffix: bool,
    ) -> Result<&'t LanguageDescriptor> {
        if select_by_suffix {
            let path = source.as_path().ok_or_else(|| DomainError::UnknownLanguage {
                field: LookupField::Suffix,
                key: "<non-path input>".to_string(),
            })?;
            let descriptor = self.table.for_path(path)?;
            info!("selected language '{}' from {}", descriptor.name, path.display());
            return Ok(descriptor);
        }

        match language {
            Some(key) => Ok(self.table.resolve(key)?),
            None => Ok(self.default_language),
        }
    }

    pub const fn state(&self) -> &CounterState {
        &self.state
    }

    pub const fn default_language(&self) -> &'t LanguageDescriptor {
        self.default_language
    }

    /// 件数を0に戻す
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
