// src/cli/mod.rs
mod args;
mod config;
mod value_enum;

pub use args::Args;
use code_counter_shared_kernel::{PresentationError, PresentationResult};
pub use value_enum::CliOutputShape;

/// clap だけでは表現できない組み合わせを検証する
pub fn validate(args: &Args) -> PresentationResult<()> {
    if args.delimiter.is_empty() {
        return Err(PresentationError::InvalidValue {
            flag: "--delimiter".to_string(),
            value: String::new(),
            reason: "must not be empty".to_string(),
        });
    }
    if args.by_suffix && args.text.is_some() {
        return Err(PresentationError::InvalidValue {
            flag: "--by-suffix".to_string(),
            value: "true".to_string(),
            reason: "language cannot be derived from a suffix when --text is given".to_string(),
        });
    }
    Ok(())
}
