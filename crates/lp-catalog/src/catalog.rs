//! The ordered, indexed activity catalog.

use lp_core::ActivityId;

use crate::definition::ActivityDefinition;
use crate::error::{CatalogError, CatalogResult};

/// An immutable, index-addressed set of activity definitions.
///
/// `ActivityId(i)` is always the `i`-th entry; construction rejects
/// definitions whose `id` disagrees with their position, so per-plan counter
/// arrays can be indexed directly by id.
#[derive(Clone, Debug)]
pub struct ActivityCatalog {
    definitions: Vec<ActivityDefinition>,
}

impl ActivityCatalog {
    /// Build a catalog, validating every definition and the id ↔ index
    /// correspondence.
    pub fn new(definitions: Vec<ActivityDefinition>) -> CatalogResult<Self> {
        for (i, def) in definitions.iter().enumerate() {
            def.validate()?;
            if def.id.index() != i {
                return Err(CatalogError::Parse(format!(
                    "definition {:?} carries id {} but sits at index {i}",
                    def.name, def.id
                )));
            }
        }
        Ok(Self { definitions })
    }

    pub fn get(&self, id: ActivityId) -> Option<&ActivityDefinition> {
        self.definitions.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityDefinition> {
        self.definitions.iter()
    }
}
