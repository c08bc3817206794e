// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod counter;
pub mod language;
pub mod report;
pub mod scanner;
pub mod source;

pub use code_counter_shared_kernel::{CodeCounterError, LineCount, Result};
pub use config::{CounterConfig, CounterConfigBuilder, DEFAULT_LANGUAGE};
pub use counter::{CounterState, LineCounter};
pub use language::{builtin_table, BlockMarker, LanguageDescriptor, LanguageKey, LanguageTable};
pub use report::{ClassificationResult, OutputShape, Rendered, ReportRows, ReportValue, FIELD_NAMES, MIXED_LANGUAGE};
pub use scanner::{BlockState, CommentPrecedence, LineKind, LineScanner, ScanRules};
pub use source::Source;
