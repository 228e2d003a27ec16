//! Catalog build errors.
//!
//! Every variant is fatal: a catalog that cannot be fully resolved means the
//! installed content is corrupt or incompatible, and there is no partial
//! configuration worth running with.

use crate::ability::{AbilityKind, CompanionClass};
use crate::env::FormKind;
use crate::error::{CompanionError, ErrorSeverity};
use crate::types::FormRef;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("could not load form: {form}")]
    MissingAsset { form: FormRef },

    #[error("could not cast form: {form} to {expected} (found {found})")]
    WrongKind {
        form: FormRef,
        expected: FormKind,
        found: FormKind,
    },

    #[error("{kind} has no name: {form}")]
    Unnamed { form: FormRef, kind: FormKind },

    #[error("unlock {form} gated at {gate} follows gate {previous} in {class} {ability} group")]
    UnorderedGates {
        form: FormRef,
        class: CompanionClass,
        ability: AbilityKind,
        gate: u8,
        previous: u8,
    },

    #[error("item {form} has an empty activation band [{min}, {max}]")]
    InvalidBand { form: FormRef, min: f32, max: f32 },
}

impl CompanionError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            MissingAsset { .. } => "CATALOG_MISSING_ASSET",
            WrongKind { .. } => "CATALOG_WRONG_KIND",
            Unnamed { .. } => "CATALOG_UNNAMED",
            UnorderedGates { .. } => "CATALOG_UNORDERED_GATES",
            InvalidBand { .. } => "CATALOG_INVALID_BAND",
        }
    }
}
