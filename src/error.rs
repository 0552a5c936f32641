//! Error types.
//!
//! Planning itself cannot fail; errors only arise while turning a request
//! document into typed input records.

use thiserror::Error;

/// A request document that could not be turned into planning input.
///
/// Any such error aborts the whole request: no partial result is produced.
#[derive(Debug, Error)]
pub enum InputError {
    /// The body is not a JSON object of the expected shape.
    #[error("invalid request body: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// One record inside a list is missing a field or has a wrong type.
    #[error("malformed {record} at {list}[{index}]: {source}")]
    MalformedRecord {
        list: &'static str,
        record: &'static str,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl InputError {
    /// Name of the offending list, if the error is record-level.
    pub fn list(&self) -> Option<&'static str> {
        match self {
            InputError::InvalidJson(_) => None,
            InputError::MalformedRecord { list, .. } => Some(list),
        }
    }
}

/// A strategy name that matches no known solver.
///
/// Callers that want the documented fallback should use
/// [`SolverStrategy::resolve`](crate::solver::SolverStrategy::resolve)
/// instead of handling this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown solver strategy: {0}")]
pub struct UnknownStrategy(pub String);
