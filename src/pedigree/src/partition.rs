use std::fmt::Display;

use itertools::Itertools;

use crate::{PedigreeDescription, PedigreeMember};

/// Separator used between sample IDs of a serialized list.
pub const ID_SEPARATOR: &str = ",";

/// Collect the sample IDs of every member satisfying `selector`, in canonical traversal order.
///
/// Duplicated IDs are preserved. The partitioner is category-agnostic: callers supply
/// one selector per category.
pub fn select_ids<F>(pedigree: &PedigreeDescription, selector: F) -> Vec<&str>
where   F: Fn(&PedigreeMember) -> bool,
{
    pedigree.members()
        .filter(|member| selector(member))
        .map(|member| member.sample_id.as_str())
        .collect()
}

/// Join a sequence of IDs with `ID_SEPARATOR`.
/// An empty sequence yields an empty string. Empty IDs are kept as-is, thus `["A", ""]` yields `"A,"`
pub fn join_ids<T, I>(ids: T) -> String
where   T: IntoIterator<Item = I>,
        I: Display,
{
    ids.into_iter().join(ID_SEPARATOR)
}
