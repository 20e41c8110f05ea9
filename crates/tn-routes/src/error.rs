//! Simulator error type.
//!
//! Both variants are precondition violations: they are surfaced to the
//! caller immediately and never retried.  Storage problems in a fixture
//! source are not errors here at all — they resolve to "no fixtures" before
//! reaching the simulator (see [`crate::fixtures`]).

use thiserror::Error;

/// Errors produced by `tn-routes`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Origin or destination is not in the city table.
    #[error("unknown city {0:?}")]
    InvalidEndpoint(String),

    /// Origin and destination are the same city.
    #[error("origin and destination are both {0:?}")]
    SameEndpoint(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
