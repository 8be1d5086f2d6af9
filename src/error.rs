//! Error types for the mapping engine.
//!
//! The engine keeps a deliberately small taxonomy:
//!
//! - [`MapError::InvalidRecordKind`] - a value fed where a record was expected
//!   is not object-shaped
//! - [`MapError::Fragment`] - the fragment walk could not process the given
//!   structure (invariant guard, a defect signal rather than user error)
//! - [`MapError::MapperNotInjected`] - a mapper-aware strategy was invoked
//!   without the engine injecting itself first
//! - [`MapError::Json`] - serde failures in the record source adapter
//! - [`MapError::Strategy`] - transparent carrier for errors raised by caller
//!   strategies; the engine never catches, wraps or retries them
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

/// Errors produced while mapping records.
#[derive(Debug, Error)]
pub enum MapError {
    /// A bulk-mode input item (or a collection element) was not a record.
    ///
    /// Carries the name of the JSON kind actually found.
    #[error("Record must be an object, found {0}")]
    InvalidRecordKind(&'static str),

    /// The fragment walk could not process the given structure.
    #[error("Cannot resolve mapping fragment: {0}")]
    Fragment(String),

    /// A mapper-aware strategy was invoked outside the engine.
    #[error("Strategy '{0}' requires a mapper but none was injected")]
    MapperNotInjected(&'static str),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error raised by a strategy, propagated unmodified.
    #[error("{0}")]
    Strategy(Box<dyn std::error::Error + Send + Sync>),
}

impl MapError {
    /// Wrap an arbitrary error raised by a strategy implementation.
    pub fn strategy(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        MapError::Strategy(error.into())
    }
}

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;
