use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use log::debug;

use crate::{
    PedigreeDescription,
    PedigreeMember,
    DiseaseStatus,
    InclusionFlag,
    partition::{select_ids, join_ids},
};

/// Every ID list the transformer knows how to produce. Each category owns its configuration key
/// and its member selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    HardDepthLimit,
    HardAlleleFrequencyLimit,
    KeepInformative,
    Affected,
    NonAffected,
    Carrier,
}

impl Category {
    /// Recognized categories, in the order their keys appear within the configuration file.
    pub const ALL: [Self; 6] = [
        Self::HardDepthLimit,
        Self::HardAlleleFrequencyLimit,
        Self::KeepInformative,
        Self::Affected,
        Self::NonAffected,
        Self::Carrier,
    ];

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::HardDepthLimit           => "dp.hard.limit.ids",
            Self::HardAlleleFrequencyLimit => "af.hard.limit.ids",
            Self::KeepInformative          => "keep.informative.ids",
            Self::Affected                 => "affected.ids",
            Self::NonAffected              => "nonaffected.ids",
            Self::Carrier                  => "carrier.ids",
        }
    }

    /// What a member must carry to belong to this category.
    #[must_use]
    pub fn selector(&self) -> Selector {
        match self {
            Self::HardDepthLimit           => Selector::Flag(InclusionFlag::HardDepthLimit),
            Self::HardAlleleFrequencyLimit => Selector::Flag(InclusionFlag::HardAlleleFrequencyLimit),
            Self::KeepInformative          => Selector::Flag(InclusionFlag::KeepInformative),
            Self::Affected                 => Selector::Status(DiseaseStatus::Affected),
            Self::NonAffected              => Selector::Status(DiseaseStatus::NonAffected),
            Self::Carrier                  => Selector::Status(DiseaseStatus::Carrier),
        }
    }

    /// Return `true` if `member` belongs to this category.
    #[must_use]
    pub fn selects(&self, member: &PedigreeMember) -> bool {
        match self.selector() {
            Selector::Status(status) => member.has_status(&status),
            Selector::Flag(flag)     => member.has_flag(flag),
        }
    }
}

/// A category either selects members through their disease status, or through one of their inclusion flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Status(DiseaseStatus),
    Flag(InclusionFlag),
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One serialized ID list per recognized category, kept in `Category::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLists {
    lists: IndexMap<Category, String>,
}

impl CategoryLists {
    /// Partition the pedigree across every recognized category.
    #[must_use]
    pub fn from_pedigree(pedigree: &PedigreeDescription) -> Self {
        let lists = Category::ALL.into_iter()
            .map(|category| {
                let ids = select_ids(pedigree, |member| category.selects(member));
                debug!("{category}: {} matching member(s)", ids.len());
                (category, join_ids(ids))
            })
            .collect();
        Self { lists }
    }

    /// Serialized list of the given category. Empty if no member matched.
    #[must_use]
    pub fn get(&self, category: Category) -> &str {
        self.lists.get(&category).map_or("", String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        self.lists.iter().map(|(category, ids)| (*category, ids.as_str()))
    }
}

/// Print each list as a `key=value` line.
impl Display for CategoryLists {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (category, ids) in self.iter() {
            writeln!(f, "{}={ids}", category.key())?;
        }
        Ok(())
    }
}
