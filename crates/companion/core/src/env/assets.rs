use crate::types::{FormId, FormRef};

/// Resolves authored references to live host assets.
///
/// Lookups happen only while the catalog is being built. After that the
/// catalog holds plain [`FormId`]s and never consults the source again.
pub trait AssetSource: Send + Sync {
    /// Looks up a single asset. Returns `None` if the source file is not loaded
    /// or the local id does not exist in it.
    fn lookup(&self, form: &FormRef) -> Option<FormRecord>;

    /// Returns true if the given source file is part of the loaded content.
    fn has_source(&self, file: &str) -> bool;
}

/// What the host knows about an asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRecord {
    pub id: FormId,
    pub kind: FormKind,
    pub name: String,
}

impl FormRecord {
    pub fn new(id: FormId, kind: FormKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
        }
    }
}

/// Asset kinds the catalog distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FormKind {
    Npc,
    Package,
    Perk,
    Spell,
    Armor,
    Weapon,
    Other,
}
