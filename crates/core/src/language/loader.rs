// crates/core/src/language/loader.rs
//! 言語定義ファイルの読み込み
//!
//! 記述子の配列、または `languages` キーを持つテーブルを受け付けます。
//!
//! ```json
//! [{ "name": "lua", "alias": "lua", "suffix": "lua", "inline_marker": "--",
//!    "block_markers": [{ "start": "--[[", "end": "]]" }] }]
//! ```

use std::fs;
use std::path::Path;

use code_counter_shared_kernel::{DomainError, ErrorContext, InfrastructureError, Result};
use log::info;
use serde::Deserialize;

use super::{LanguageDescriptor, LanguageTable};

#[derive(Deserialize)]
#[serde(untagged)]
enum DefinitionsFile {
    List(Vec<LanguageDescriptor>),
    Table { languages: Vec<LanguageDescriptor> },
}

impl DefinitionsFile {
    fn into_descriptors(self) -> Vec<LanguageDescriptor> {
        match self {
            Self::List(descriptors) | Self::Table { languages: descriptors } => descriptors,
        }
    }
}

/// 定義ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
}

impl DefinitionFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

pub fn from_json_str(input: &str) -> Result<Vec<LanguageDescriptor>> {
    let file: DefinitionsFile = serde_json::from_str(input)?;
    Ok(file.into_descriptors())
}

#[cfg(feature = "yaml")]
pub fn from_yaml_str(input: &str) -> Result<Vec<LanguageDescriptor>> {
    let file: DefinitionsFile = serde_yaml::from_str(input)?;
    Ok(file.into_descriptors())
}

pub fn parse(input: &str, format: DefinitionFormat) -> Result<Vec<LanguageDescriptor>> {
    match format {
        DefinitionFormat::Json => from_json_str(input),
        #[cfg(feature = "yaml")]
        DefinitionFormat::Yaml => from_yaml_str(input),
        #[cfg(not(feature = "yaml"))]
        DefinitionFormat::Yaml => Err(DomainError::InvalidConfiguration {
            reason: "YAML language definitions require the `yaml` feature".to_string(),
        }
        .into()),
    }
}

/// 定義ファイルを読み込み、記述子の一覧を返す
pub fn load_definitions(path: &Path) -> Result<Vec<LanguageDescriptor>> {
    let format = DefinitionFormat::from_path(path).ok_or_else(|| DomainError::InvalidConfiguration {
        reason: format!(
            "unsupported language definitions file '{}' (expected .json, .yaml or .yml)",
            path.display()
        ),
    })?;

    let input = fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let descriptors =
        parse(&input, format).with_context(|| format!("parsing '{}'", path.display()))?;
    info!("loaded {} language definition(s) from {}", descriptors.len(), path.display());
    Ok(descriptors)
}

/// 組み込みテーブルに定義ファイルの記述子を追加したテーブルを返す
pub fn load_table(path: &Path) -> Result<LanguageTable> {
    let extra = load_definitions(path)?;
    Ok(LanguageTable::builtin_with(extra)?)
}
