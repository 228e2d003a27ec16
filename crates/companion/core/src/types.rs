//! Identifier newtypes shared by every layer.
//!
//! All identifiers are opaque to this crate: the host allocates them and this
//! crate only compares, hashes and forwards them.

use core::fmt;

/// Resolved identity of a host asset (actor base, package, perk, spell, armor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormId(pub u32);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Unresolved reference to an asset: a local offset within a source file.
///
/// References are what rule tables are authored in; the asset source turns
/// them into [`FormId`]s when the catalog is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormRef {
    pub local_id: u32,
    pub source: String,
}

impl FormRef {
    pub fn new(local_id: u32, source: impl Into<String>) -> Self {
        Self {
            local_id,
            source: source.into(),
        }
    }
}

impl fmt::Display for FormRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X} from {}", self.local_id, self.source)
    }
}

/// A live actor reference in the host simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Scripting handle for an actor, issued by the host's handle policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub u64);

/// Opaque per-stack inventory data the host needs to unequip a specific copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExtraDataId(pub u64);

/// World-space position used for distance checks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}
