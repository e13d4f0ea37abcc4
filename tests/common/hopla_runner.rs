use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use super::Fixture;

/// Builds and runs a `hopla-config` command line, the way a user would type it.
#[derive(Default)]
pub struct HoplaRunnerBuilder {
    command  : String,
    pedigree : Option<String>,
    settings : Option<String>,
    family   : Option<String>,
    overwrite: bool,
}

impl HoplaRunnerBuilder {
    pub fn new(command: &str) -> Self {
        Self { command: command.to_string(), ..Default::default() }
    }

    pub fn set_pedigree(mut self, pedigree: &str) -> Self {
        self.pedigree = Some(pedigree.to_string());
        self
    }

    pub fn set_settings(mut self, settings: &str) -> Self {
        self.settings = Some(settings.to_string());
        self
    }

    pub fn set_family(mut self, family: &str) -> Self {
        self.family = Some(family.to_string());
        self
    }

    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Copy every requested test-data file into temporary directories, and reserve an output file.
    pub fn build(self, output_filename: &str) -> HoplaRunner {
        HoplaRunner {
            pedigree : self.pedigree.as_deref().map(Fixture::copy),
            settings : self.settings.as_deref().map(Fixture::copy),
            output   : Fixture::blank(output_filename),
            command  : self.command,
            family   : self.family,
            overwrite: self.overwrite,
        }
    }
}

pub struct HoplaRunner {
    command  : String,
    pedigree : Option<Fixture>,
    settings : Option<Fixture>,
    family   : Option<String>,
    output   : Fixture,
    overwrite: bool,
}

impl HoplaRunner {
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["hopla-config".to_string(), self.command.clone()];
        let mut push = |flag: &str, value: String| args.extend([flag.to_string(), value]);
        if let Some(pedigree) = &self.pedigree { push("--pedigree", pedigree.to_string()); }
        if let Some(settings) = &self.settings { push("--settings", settings.to_string()); }
        if let Some(family)   = &self.family   { push("--family",   family.clone()); }
        push("--output", self.output.to_string());
        if self.overwrite {
            args.push("--overwrite".to_string());
        }
        args
    }

    pub fn run(&self) -> Result<()> {
        let cli = parser::Cli::try_parse_from(self.args())?;
        hopla_config::run(cli)
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn pedigree(&self) -> Option<PathBuf> {
        self.pedigree.as_ref().map(|fixture| fixture.to_path_buf())
    }
}
