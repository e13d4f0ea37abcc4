use std::fmt::{self, Display, Formatter};

use log::{debug, info};
use pedigree::{PedigreeDescription, CategoryLists, Category, StructureLists};

use crate::{ConfigLine, Settings};

/// A fully composed Hopla configuration file.
///
/// Keys are always written in the same order:
/// `family`, pedigree structure, filter 1, filter 2, annotation, then merlin settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigText {
    lines: Vec<ConfigLine>,
}

impl ConfigText {
    /// Compose the configuration text of a pedigree.
    #[must_use]
    pub fn compose(pedigree: &PedigreeDescription, settings: &Settings) -> Self {
        info!("Composing configuration for family '{}' ({} members)", settings.family, pedigree.len());
        let structure = StructureLists::from_pedigree(pedigree);
        let lists     = CategoryLists::from_pedigree(pedigree);

        let mut text = Self::default();
        text.comment("Hopla configuration file")
            .comment(&format!("Generated by hopla-config v{}", env!("CARGO_PKG_VERSION")))
            .entry("family", &settings.family);

        text.section("Pedigree: one entry per sample. Parents are referred to by sample ID, or NA if unknown.")
            .entry("sample.ids", &structure.sample_ids)
            .entry("father.ids", &structure.father_ids)
            .entry("mother.ids", &structure.mother_ids)
            .entry("genders",    &structure.genders);

        let filter1 = &settings.filter1;
        text.section("Filter 1: depth and allele frequency limits")
            .entry("dp.hard.limit", filter1.depth_hard_limit)
            .category(&lists, Category::HardDepthLimit)
            .entry("dp.soft.limit", filter1.depth_soft_limit)
            .entry("af.hard.limit", filter1.allele_frequency_hard_limit)
            .category(&lists, Category::HardAlleleFrequencyLimit);

        text.section("Filter 2: informative variants")
            .category(&lists, Category::KeepInformative);

        text.section("Annotation: disease status")
            .category(&lists, Category::Affected)
            .category(&lists, Category::NonAffected)
            .category(&lists, Category::Carrier);

        let merlin = &settings.merlin;
        text.section("Merlin haplotyping")
            .entry("model",              merlin.model)
            .entry("min.seg.var",        merlin.min_seg_var)
            .entry("min.seg.var.X",      merlin.min_seg_var_x)
            .entry("window.size.voting", merlin.voting_window_size);
        if let Some(window_size) = merlin.voting_window_size_x {
            text.entry("window.size.voting.X", window_size);
        }
        text.entry("keep.chromosomes.only", merlin.keep_chromosomes_only)
            .entry("keep.regions.only",     merlin.keep_regions_only);

        debug!("Composed {} configuration lines", text.lines.len());
        text
    }

    /// Only the per-category `key=value` lines, without comments nor settings.
    #[must_use]
    pub fn from_lists(lists: &CategoryLists) -> Self {
        let mut text = Self::default();
        for (category, _) in lists.iter() {
            text.category(lists, category);
        }
        text
    }

    fn comment(&mut self, text: &str) -> &mut Self {
        self.lines.push(ConfigLine::comment(text));
        self
    }

    fn entry(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.lines.push(ConfigLine::entry(key, value));
        self
    }

    fn category(&mut self, lists: &CategoryLists, category: Category) -> &mut Self {
        self.entry(category.key(), lists.get(category))
    }

    /// Start a new section: a blank line, followed by a comment.
    fn section(&mut self, title: &str) -> &mut Self {
        self.lines.push(ConfigLine::Blank);
        self.comment(title)
    }

    #[must_use]
    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }
}

impl Display for ConfigText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
