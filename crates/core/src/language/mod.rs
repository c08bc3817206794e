// crates/core/src/language/mod.rs
//! 言語ルールテーブル
//!
//! 各言語のコメント構文（行コメント記号とブロックコメント記号の組）を
//! 不変のテーブルとして保持し、名前・エイリアス・拡張子で検索します。

pub mod builtin;
pub mod loader;

use std::path::Path;

use code_counter_shared_kernel::{DomainError, DomainResult, LookupField};
use serde::{Deserialize, Serialize};

pub use builtin::builtin_table;

/// ブロックコメントの開始/終了記号の組
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockMarker {
    pub start: String,
    pub end: String,
}

impl BlockMarker {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }
}

/// 1言語ぶんのコメント構文と識別キー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    pub name: String,
    pub alias: String,
    pub suffix: String,
    pub inline_marker: String,
    /// 先頭から順に評価され、最初に一致した組が採用される
    #[serde(default)]
    pub block_markers: Vec<BlockMarker>,
}

impl LanguageDescriptor {
    pub fn new(
        name: impl Into<String>,
        alias: impl Into<String>,
        suffix: impl Into<String>,
        inline_marker: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
            suffix: suffix.into(),
            inline_marker: inline_marker.into(),
            block_markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_block(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.block_markers.push(BlockMarker::new(start, end));
        self
    }

    pub fn matches(&self, key: LanguageKey<'_>) -> bool {
        match key {
            LanguageKey::Name(name) => self.name == name,
            LanguageKey::Alias(alias) => self.alias == alias,
            LanguageKey::NameOrAlias(key) => self.name == key || self.alias == key,
            LanguageKey::Suffix(suffix) => self.suffix == suffix,
        }
    }

    /// 空の記号は全ての行に前方一致してしまうため拒否する
    pub fn validate(&self) -> DomainResult<()> {
        let invalid = |reason: &str| DomainError::InvalidLanguage {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if self.inline_marker.is_empty() {
            return Err(invalid("inline marker must not be empty"));
        }
        if self
            .block_markers
            .iter()
            .any(|marker| marker.start.is_empty() || marker.end.is_empty())
        {
            return Err(invalid("block markers must not be empty"));
        }
        Ok(())
    }
}

/// テーブル検索キー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageKey<'a> {
    Name(&'a str),
    Alias(&'a str),
    NameOrAlias(&'a str),
    /// 先頭のドットを含まない拡張子
    Suffix(&'a str),
}

impl<'a> LanguageKey<'a> {
    pub const fn field(self) -> LookupField {
        match self {
            Self::Name(_) => LookupField::Name,
            Self::Alias(_) => LookupField::Alias,
            Self::NameOrAlias(_) => LookupField::NameOrAlias,
            Self::Suffix(_) => LookupField::Suffix,
        }
    }

    pub const fn value(self) -> &'a str {
        match self {
            Self::Name(v) | Self::Alias(v) | Self::NameOrAlias(v) | Self::Suffix(v) => v,
        }
    }
}

/// 不変の言語記述子テーブル
///
/// 同じキーに複数の記述子が一致する場合は先頭のものが採用されます。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageTable {
    descriptors: Vec<LanguageDescriptor>,
}

impl LanguageTable {
    /// 記述子を検証してテーブルを作成
    pub fn new(descriptors: Vec<LanguageDescriptor>) -> DomainResult<Self> {
        descriptors.iter().try_for_each(LanguageDescriptor::validate)?;
        Ok(Self { descriptors })
    }

    /// 組み込みテーブルの複製
    pub fn builtin() -> Self {
        builtin_table().clone()
    }

    /// 定義ファイル（.json / .yaml / .yml）を読み込み、組み込みテーブルに追加する
    pub fn load(path: &Path) -> code_counter_shared_kernel::Result<Self> {
        loader::load_table(path)
    }

    /// 組み込みテーブルの複製に記述子を追加したテーブルを返す
    pub fn builtin_with(extra: Vec<LanguageDescriptor>) -> DomainResult<Self> {
        builtin_table().with_descriptors(extra)
    }

    /// 既存の記述子の後ろに追加する（既存のキーが優先される）
    pub fn with_descriptors(&self, extra: Vec<LanguageDescriptor>) -> DomainResult<Self> {
        let mut descriptors = self.descriptors.clone();
        descriptors.extend(extra);
        Self::new(descriptors)
    }

    pub fn lookup(&self, key: LanguageKey<'_>) -> DomainResult<&LanguageDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.matches(key))
            .ok_or_else(|| DomainError::UnknownLanguage {
                field: key.field(),
                key: key.value().to_string(),
            })
    }

    /// 名前またはエイリアスで検索
    pub fn resolve(&self, key: &str) -> DomainResult<&LanguageDescriptor> {
        self.lookup(LanguageKey::NameOrAlias(key))
    }

    /// パスの拡張子で検索
    pub fn for_path(&self, path: &Path) -> DomainResult<&LanguageDescriptor> {
        let suffix = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        self.lookup(LanguageKey::Suffix(suffix))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a LanguageTable {
    type Item = &'a LanguageDescriptor;
    type IntoIter = std::slice::Iter<'a, LanguageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
