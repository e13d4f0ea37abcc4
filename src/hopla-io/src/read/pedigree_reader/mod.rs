use std::{fs::File, io::Read, path::Path};

use log::{info, warn};
use pedigree::PedigreeDescription;

use located_error::prelude::*;

mod error;
pub use error::PedigreeReaderError;

/// Reader of `.yaml` pedigree definition files.
pub struct PedigreeReader;

impl PedigreeReader {
    /// Parse a `.yaml` pedigree definition file into a `PedigreeDescription`.
    ///
    /// # Errors
    /// - if `path` cannot be opened.
    /// - if the file is not a valid pedigree definition (e.g. a missing grandparent or parent role).
    pub fn from_path(path: &Path) -> Result<PedigreeDescription> {
        let loc_msg = || format!("While parsing pedigree definition file '{}'", path.display());
        info!("Reading pedigree definition from {}", path.display());
        let file = File::open(path).map_err(PedigreeReaderError::Open).with_loc(loc_msg)?;
        Self::from_reader(file).with_loc(loc_msg)
    }

    /// Parse a pedigree definition from any reader.
    /// Members carrying an unrecognized disease status are reported, but kept.
    pub fn from_reader<R: Read>(reader: R) -> Result<PedigreeDescription> {
        let pedigree: PedigreeDescription = serde_yaml::from_reader(reader)
            .map_err(PedigreeReaderError::Parse)
            .loc("While deserializing pedigree definition")?;

        for (role, member) in pedigree.unrecognized_statuses() {
            warn!(
                "Unrecognized disease status '{}' for {role} '{}'. This sample will not be written in any disease status list.",
                member.disease_status, member.sample_id
            );
        }
        Ok(pedigree)
    }

    /// Serialize a pedigree definition as `.yaml`.
    pub fn to_yaml(pedigree: &PedigreeDescription) -> Result<String> {
        serde_yaml::to_string(pedigree)
            .map_err(PedigreeReaderError::Serialize)
            .loc("While serializing pedigree definition")
    }
}
