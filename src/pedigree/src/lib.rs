//! Pedigree model and pedigree-to-configuration transformation.
//!
//! A `PedigreeDescription` is walked once, in canonical order, for every recognized category.
//! Each walk yields the matching sample IDs, which are then joined into a single comma-separated list.

pub mod member;
pub use member::{PedigreeMember, DiseaseStatus, Gender, InclusionFlag, InclusionFlags};

mod description;
pub use description::{PedigreeDescription, Role};

pub mod partition;
pub use partition::{select_ids, join_ids};

mod category;
pub use category::{Category, CategoryLists, Selector};

mod structure;
pub use structure::{StructureLists, MISSING_ID};

#[cfg(test)] mod tests;
