// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    CodeCounterError, DomainError, DomainResult, ErrorContext, InfrastructureError,
    LookupField, PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::LineCount;
