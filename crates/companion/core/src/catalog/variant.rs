use crate::env::AssetSource;

/// Which authored ruleset the catalog is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RulesetVariant {
    Base,
    /// Selected when the overhaul's marker source file is loaded.
    Overhaul,
}

impl RulesetVariant {
    pub fn detect(assets: &dyn AssetSource, overhaul_marker: &str) -> Self {
        if assets.has_source(overhaul_marker) {
            Self::Overhaul
        } else {
            Self::Base
        }
    }
}
