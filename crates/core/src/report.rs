// crates/core/src/report.rs
//! 集計結果とその表示形式

use std::fmt;

use code_counter_shared_kernel::{LineCount, Result};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::counter::CounterState;

/// 結果の列名（表示順）
pub const FIELD_NAMES: [&str; 6] = ["language", "code", "blank", "inline", "block", "remark"];

/// 言語の異なる結果を合算したときの言語名
pub const MIXED_LANGUAGE: &str = "mixed";

/// 出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputShape {
    /// キー付きのレコード
    #[default]
    Mapping,
    /// ヘッダ行と値行の組
    Rows,
    /// レコードのJSON文字列
    Json,
    /// レコードのYAML文字列
    #[cfg(feature = "yaml")]
    Yaml,
}

/// 1回の分類の結果スナップショット
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClassificationResult {
    pub language: String,
    pub code: LineCount,
    pub blank: LineCount,
    pub inline: LineCount,
    pub block: LineCount,
}

impl ClassificationResult {
    pub fn from_state(language: impl Into<String>, state: &CounterState) -> Self {
        Self {
            language: language.into(),
            code: state.code,
            blank: state.blank,
            inline: state.inline,
            block: state.block,
        }
    }

    /// 行コメント + ブロックコメント
    pub fn remark(&self) -> LineCount {
        self.inline + self.block
    }

    pub fn total_lines(&self) -> LineCount {
        self.code + self.blank + self.remark()
    }

    /// 件数を合算する
    ///
    /// 言語名は両者が同じ（または片方が空）ならそのまま、異なれば [`MIXED_LANGUAGE`] になる。
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let language = match (self.language.as_str(), other.language.as_str()) {
            ("", language) | (language, "") => language,
            (left, right) if left == right => left,
            _ => MIXED_LANGUAGE,
        };
        Self {
            language: language.to_string(),
            code: self.code + other.code,
            blank: self.blank + other.blank,
            inline: self.inline + other.inline,
            block: self.block + other.block,
        }
    }

    pub fn rows(&self) -> ReportRows {
        ReportRows {
            header: FIELD_NAMES,
            values: vec![
                ReportValue::Text(self.language.clone()),
                ReportValue::Count(self.code.value()),
                ReportValue::Count(self.blank.value()),
                ReportValue::Count(self.inline.value()),
                ReportValue::Count(self.block.value()),
                ReportValue::Count(self.remark().value()),
            ],
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn render(&self, shape: OutputShape) -> Result<Rendered> {
        Ok(match shape {
            OutputShape::Mapping => Rendered::Mapping(self.clone()),
            OutputShape::Rows => Rendered::Rows(self.rows()),
            OutputShape::Json => Rendered::Text(self.to_json()?),
            #[cfg(feature = "yaml")]
            OutputShape::Yaml => Rendered::Text(self.to_yaml()?),
        })
    }
}

impl Serialize for ClassificationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("ClassificationResult", FIELD_NAMES.len())?;
        record.serialize_field("language", &self.language)?;
        record.serialize_field("code", &self.code)?;
        record.serialize_field("blank", &self.blank)?;
        record.serialize_field("inline", &self.inline)?;
        record.serialize_field("block", &self.block)?;
        record.serialize_field("remark", &self.remark())?;
        record.end()
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        for (i, (name, value)) in rows.header.iter().zip(&rows.values).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name:<8} {value}")?;
        }
        Ok(())
    }
}

/// 値行のセル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Text(String),
    Count(usize),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

/// ヘッダ行と値行の組
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRows {
    pub header: [&'static str; 6],
    pub values: Vec<ReportValue>,
}

impl ReportRows {
    /// 区切り文字で連結した2行のテキスト
    pub fn to_delimited(&self, delimiter: &str) -> String {
        let values: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        format!("{}\n{}", self.header.join(delimiter), values.join(delimiter))
    }
}

/// 設定された出力形式で整形された結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Mapping(ClassificationResult),
    Rows(ReportRows),
    Text(String),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping(result) => write!(f, "{result}"),
            Self::Rows(rows) => f.write_str(&rows.to_delimited(",")),
            Self::Text(text) => f.write_str(text.trim_end()),
        }
    }
}
