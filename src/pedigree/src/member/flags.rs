use serde::{Serialize, Deserialize};

/// A boolean marker requesting that a member's sample ID be written in an auxiliary filter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InclusionFlag {
    KeepInformative,
    HardDepthLimit,
    HardAlleleFrequencyLimit,
}

impl InclusionFlag {
    pub const ALL: [Self; 3] = [Self::KeepInformative, Self::HardDepthLimit, Self::HardAlleleFrequencyLimit];
}

/// Set of inclusion flags carried by a single pedigree member. Unset flags default to `false`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionFlags {
    #[serde(default, alias = "keepInformativeIDs")]
    pub keep_informative: bool,
    #[serde(default, alias = "keepLimitIDHardDP")]
    pub keep_hard_depth_limit: bool,
    #[serde(default, alias = "keepLimitIDHardAF")]
    pub keep_hard_allele_frequency_limit: bool,
}

impl InclusionFlags {
    /// Every flag raised.
    #[must_use]
    pub fn all() -> Self {
        Self { keep_informative: true, keep_hard_depth_limit: true, keep_hard_allele_frequency_limit: true }
    }

    #[must_use]
    pub fn is_set(&self, flag: InclusionFlag) -> bool {
        match flag {
            InclusionFlag::KeepInformative          => self.keep_informative,
            InclusionFlag::HardDepthLimit           => self.keep_hard_depth_limit,
            InclusionFlag::HardAlleleFrequencyLimit => self.keep_hard_allele_frequency_limit,
        }
    }

    pub fn set(&mut self, flag: InclusionFlag, value: bool) {
        let field = match flag {
            InclusionFlag::KeepInformative          => &mut self.keep_informative,
            InclusionFlag::HardDepthLimit           => &mut self.keep_hard_depth_limit,
            InclusionFlag::HardAlleleFrequencyLimit => &mut self.keep_hard_allele_frequency_limit,
        };
        *field = value;
    }
}
