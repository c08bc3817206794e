// src/cli/value_enum.rs
use clap::ValueEnum;
use code_counter_core::OutputShape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputShape {
    Mapping,
    Rows,
    Json,
    Yaml,
}

impl From<CliOutputShape> for OutputShape {
    fn from(value: CliOutputShape) -> Self {
        match value {
            CliOutputShape::Mapping => OutputShape::Mapping,
            CliOutputShape::Rows => OutputShape::Rows,
            CliOutputShape::Json => OutputShape::Json,
            CliOutputShape::Yaml => OutputShape::Yaml,
        }
    }
}

impl From<OutputShape> for CliOutputShape {
    fn from(value: OutputShape) -> Self {
        match value {
            OutputShape::Mapping => CliOutputShape::Mapping,
            OutputShape::Rows => CliOutputShape::Rows,
            OutputShape::Json => CliOutputShape::Json,
            OutputShape::Yaml => CliOutputShape::Yaml,
        }
    }
}
