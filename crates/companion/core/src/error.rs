//! Common error infrastructure for companion-core.
//!
//! Domain-specific errors live beside the code that raises them
//! ([`crate::catalog::CatalogError`], [`crate::env::HostError`]). This module
//! provides the shared severity classification every error reports.
//!
//! # Severity Classes
//!
//! - **Fatal**: the catalog is corrupt or incompatible; the feature must not
//!   activate for this session.
//! - **Degraded**: the host rejected a single grant; the companion ends up in a
//!   valid but weaker state and processing continues.
//! - **Transient**: the host could not service a request right now; the
//!   operation is abandoned and the next tick or user action requests it again.
//!
//! Wrong item kinds and already-held unlocks are not errors at all. They are
//! guarded early returns.

/// Severity level of an error, used to pick the recovery strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Aborts bring-up of the whole feature.
    Fatal,

    /// Logged and skipped; independent work continues.
    Degraded,

    /// Operation abandoned for this call; no retry is scheduled.
    Transient,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Degraded => "degraded",
            Self::Transient => "transient",
        }
    }

    /// Returns true if the feature cannot continue after this error.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all companion errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not by impact on the player
pub trait CompanionError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
