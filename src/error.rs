use thiserror::Error;

use crate::model::AreaId;

/// Top-level error type for roomtrace.
#[derive(Debug, Error)]
pub enum RoomtraceError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the plan data model.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("{kind} {id} not found")]
    EntityNotFound { kind: &'static str, id: u64 },

    #[error("invalid {kind} {id}: {reason}")]
    InvalidEntity {
        kind: &'static str,
        id: u64,
        reason: String,
    },
}

/// Errors related to operations run against a plan.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("area {0} not found")]
    UnknownArea(AreaId),
}

/// Convenience type alias for results using [`RoomtraceError`].
pub type Result<T> = std::result::Result<T, RoomtraceError>;
