// crates/core/src/config.rs
use derive_builder::Builder;

use crate::report::OutputShape;
use crate::scanner::ScanRules;

/// 既定の言語キー
pub const DEFAULT_LANGUAGE: &str = "python";

/// カウンター生成時の設定
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CounterConfig {
    /// 既定の言語（名前またはエイリアス）
    #[builder(default = "String::from(DEFAULT_LANGUAGE)")]
    pub language: String,
    /// 呼び出しをまたいで件数を累積する
    #[builder(default)]
    pub cumulative: bool,
    #[builder(default)]
    pub shape: OutputShape,
    #[builder(default)]
    pub rules: ScanRules,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            language: String::from(DEFAULT_LANGUAGE),
            cumulative: false,
            shape: OutputShape::default(),
            rules: ScanRules::default(),
        }
    }
}

impl CounterConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.language {
            Some(language) if language.trim().is_empty() => {
                Err("language key must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}
