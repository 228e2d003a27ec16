//! Errors surfaced by the runtime.

use companion_core::{ActorId, CatalogError, CompanionError, ErrorSeverity};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("companion manager is not active")]
    Inactive,

    #[error("actor {actor} is neither tracked nor a companion")]
    NotTracked { actor: ActorId },
}

impl CompanionError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Catalog(error) => error.severity(),
            RuntimeError::Inactive | RuntimeError::NotTracked { .. } => ErrorSeverity::Degraded,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Catalog(error) => error.error_code(),
            RuntimeError::Inactive => "RUNTIME_INACTIVE",
            RuntimeError::NotTracked { .. } => "RUNTIME_NOT_TRACKED",
        }
    }
}
