//! Core error type.
//!
//! Sub-crates define their own error enums (`RouteError`, `DataError`) and
//! either wrap `CoreError` as a variant or convert via `From`.

use thiserror::Error;

/// Errors produced by `tn-core` itself.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("duplicate city {0:?} in city table")]
    DuplicateCity(String),
}

/// Shorthand result type for `tn-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
