//! `lp-catalog` — activity definitions and CSV loading.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`definition`] | `ActivityDefinition`                                |
//! | [`catalog`]    | `ActivityCatalog`                                   |
//! | [`loader`]     | `load_catalog_csv`, `load_catalog_reader`           |
//! | [`error`]      | `CatalogError`, `CatalogResult<T>`                  |
//!
//! # Resolution model (summary)
//!
//! An `ActivityDefinition` knows *what it does from where*: given an arrival
//! state and a chosen duration,
//!
//! ```text
//! start = arrival lifted to the precondition
//! end   = start + profile.at(duration)
//! ```
//!
//! That single primitive ([`ActivityDefinition::resolve_from`]) is what both
//! the plan restructurer and the candidate scorer are built on.

pub mod catalog;
pub mod definition;
pub mod error;
pub mod loader;


pub use catalog::ActivityCatalog;
pub use definition::ActivityDefinition;
pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog_csv, load_catalog_reader};
