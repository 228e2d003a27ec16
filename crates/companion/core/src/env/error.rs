//! Host interaction errors.

use crate::error::{CompanionError, ErrorSeverity};
use crate::types::{ActorId, FormId};

/// Errors reported when a host call cannot be issued or is refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The handle policy could not represent the actor right now.
    #[error("could not get object handle for actor {actor}")]
    HandleUnavailable { actor: ActorId },

    /// The scripting dispatcher refused the call; no acknowledgment will follow.
    #[error("could not dispatch script function {function}")]
    DispatchFailed { function: &'static str },

    /// The call was dispatched but never acknowledged within the configured timeout.
    #[error("script function {function} was not acknowledged in time")]
    AckTimeout { function: &'static str },

    /// The actor has no value owner (not loaded, or not an actor at all).
    #[error("actor {actor} has no actor value owner")]
    NoValueOwner { actor: ActorId },

    /// The host rejected a grant.
    #[error("host rejected {operation} of {form} on actor {actor}")]
    Rejected {
        operation: &'static str,
        actor: ActorId,
        form: FormId,
    },
}

impl CompanionError for HostError {
    fn severity(&self) -> ErrorSeverity {
        use HostError::*;
        match self {
            HandleUnavailable { .. } | DispatchFailed { .. } | AckTimeout { .. } => {
                ErrorSeverity::Transient
            }
            NoValueOwner { .. } | Rejected { .. } => ErrorSeverity::Degraded,
        }
    }

    fn error_code(&self) -> &'static str {
        use HostError::*;
        match self {
            HandleUnavailable { .. } => "HOST_HANDLE_UNAVAILABLE",
            DispatchFailed { .. } => "HOST_DISPATCH_FAILED",
            AckTimeout { .. } => "HOST_ACK_TIMEOUT",
            NoValueOwner { .. } => "HOST_NO_VALUE_OWNER",
            Rejected { .. } => "HOST_REJECTED",
        }
    }
}
