use thiserror::Error;

use crate::instance_ring::RingError;
use crate::types::{InstanceKey, ShapeKindError};

/// Errors surfaced by the instance state engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Ring(#[from] RingError),

    #[error(transparent)]
    ShapeKind(#[from] ShapeKindError),

    /// A publish tick was requested for a key with no registered spec
    #[error("no publish spec registered for {key}")]
    UnknownPublication { key: InstanceKey },
}
