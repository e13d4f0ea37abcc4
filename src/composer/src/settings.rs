use std::{fmt::{self, Display, Formatter}, fs::File, path::Path};

use serde::{Serialize, Deserialize};
use log::debug;

use located_error::prelude::*;
use crate::SettingsError;

/// Every non-ID value of a Hopla configuration file.
///
/// Keys missing from a user-provided settings file keep their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub family : String,
    pub filter1: Filter1Settings,
    pub merlin : MerlinSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter1Settings {
    /// Minimum depth of coverage. Variants failing this limit in any `dp.hard.limit.ids` sample are filtered out.
    #[serde(rename = "dp.hard.limit")]
    pub depth_hard_limit: u32,

    /// Minimum depth of coverage. Only the non-complying sample is filtered out.
    #[serde(rename = "dp.soft.limit")]
    pub depth_soft_limit: u32,

    /// Minimum allele frequency. Variants failing this limit in any `af.hard.limit.ids` sample are filtered out.
    #[serde(rename = "af.hard.limit")]
    pub allele_frequency_hard_limit: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerlinModel {
    Sample,
    Best,
}

impl Display for MerlinModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample => write!(f, "sample"),
            Self::Best   => write!(f, "best"),
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerlinSettings {
    pub model: MerlinModel,

    /// Minimum number of variants within a same-haplotype segment.
    #[serde(rename = "min.seg.var")]
    pub min_seg_var: u32,

    #[serde(rename = "min.seg.var.X")]
    pub min_seg_var_x: u32,

    /// Window size (bp) used to correct haplotypes through weighted neighbourhood voting.
    #[serde(rename = "window.size.voting")]
    pub voting_window_size: u64,

    #[serde(rename = "window.size.voting.X", skip_serializing_if = "Option::is_none")]
    pub voting_window_size_x: Option<u64>,

    #[serde(rename = "keep.chromosomes.only")]
    pub keep_chromosomes_only: bool,

    #[serde(rename = "keep.regions.only")]
    pub keep_regions_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { family: String::from("Hopla"), filter1: Filter1Settings::default(), merlin: MerlinSettings::default() }
    }
}

impl Default for Filter1Settings {
    fn default() -> Self {
        Self { depth_hard_limit: 10, depth_soft_limit: 10, allele_frequency_hard_limit: 0.25 }
    }
}

impl Default for MerlinSettings {
    fn default() -> Self {
        Self {
            model                : MerlinModel::Best,
            min_seg_var          : 5,
            min_seg_var_x        : 15,
            voting_window_size   : 10_000_000,
            voting_window_size_x : None,
            keep_chromosomes_only: false,
            keep_regions_only    : false,
        }
    }
}

impl Settings {
    /// Superimpose the contents of a `.yaml` settings file onto the default settings.
    ///
    /// # Errors
    /// - if `path` cannot be opened.
    /// - if `serde_yaml` fails to parse its contents.
    pub fn load(path: &Path) -> Result<Self> {
        let loc_msg = || format!("While loading settings from '{}'", path.display());
        let file = File::open(path).map_err(SettingsError::Open).with_loc(loc_msg)?;
        let settings: Self = serde_yaml::from_reader(file).map_err(SettingsError::Parse).with_loc(loc_msg)?;
        debug!("Loaded settings: {settings:?}");
        Ok(settings)
    }

    /// Replace the family name.
    #[must_use]
    pub fn with_family(mut self, family: &str) -> Self {
        self.family = family.to_string();
        self
    }
}
