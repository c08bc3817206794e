// src/cli/config.rs
use code_counter_core::{CommentPrecedence, CounterConfig, CounterConfigBuilder, ScanRules};
use code_counter_shared_kernel::PresentationError;

use super::args::Args;

impl From<&Args> for ScanRules {
    fn from(args: &Args) -> Self {
        let precedence = if args.block_first {
            CommentPrecedence::BlockFirst
        } else {
            CommentPrecedence::InlineFirst
        };
        Self { precedence, close_same_line: !args.keep_same_line_open }
    }
}

impl TryFrom<&Args> for CounterConfig {
    type Error = PresentationError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        CounterConfigBuilder::default()
            .language(args.language.as_str())
            .cumulative(args.cumulative)
            .shape(args.format)
            .rules(ScanRules::from(args))
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
