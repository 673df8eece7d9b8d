//! Fundamental value types shared by every entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in logical canvas space (800×600 units, y grows downward).
pub type Point = glam::DVec2;

/// Identity of a live entity, unique within its collection for its lifetime.
///
/// Allocated from a monotonic per-session counter, so identities are never
/// reused until the whole `GameState` is replaced by a restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}
