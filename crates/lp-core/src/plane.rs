//! Social-plane registry.
//!
//! Every activity targets one *plane* — the social configuration of the
//! classroom while it runs (individual work, team work, whole-class work).
//! Planes are referenced by `PlaneId` everywhere in the engine; the registry
//! is the single place that maps ids to names and descriptions.

use crate::error::{CoreError, CoreResult};
use crate::ids::PlaneId;

/// Name and human-readable description of one plane.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneInfo {
    pub name: String,
    pub description: String,
}

/// Ordered, indexed set of planes.
///
/// Immutable after construction; `PlaneId(i)` is the index of the `i`-th
/// entry passed to [`PlaneRegistry::new`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneRegistry {
    planes: Vec<PlaneInfo>,
}

impl PlaneRegistry {
    pub fn new(planes: Vec<PlaneInfo>) -> Self {
        Self { planes }
    }

    /// The standard three-plane classroom registry.
    pub fn classroom() -> Self {
        let plane = |name: &str, description: &str| PlaneInfo {
            name: name.to_string(),
            description: description.to_string(),
        };
        Self::new(vec![
            plane("individual", "Each learner works alone"),
            plane("team", "Learners work in small groups"),
            plane("class", "The whole class works together"),
        ])
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Resolve a plane name (exact, case-sensitive) to its id.
    pub fn index_of(&self, name: &str) -> CoreResult<PlaneId> {
        self.planes
            .iter()
            .position(|p| p.name == name)
            .map(|i| PlaneId(i as u8))
            .ok_or_else(|| CoreError::UnknownPlane(name.to_string()))
    }

    pub fn name_of(&self, id: PlaneId) -> Option<&str> {
        self.planes.get(id.index()).map(|p| p.name.as_str())
    }

    pub fn describe(&self, id: PlaneId) -> Option<&str> {
        self.planes.get(id.index()).map(|p| p.description.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaneInfo> {
        self.planes.iter()
    }
}

impl Default for PlaneRegistry {
    fn default() -> Self {
        Self::classroom()
    }
}
