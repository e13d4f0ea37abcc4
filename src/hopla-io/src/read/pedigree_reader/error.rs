use thiserror::Error;

#[derive(Error, Debug)]
pub enum PedigreeReaderError {
    #[error("Failed to open pedigree definition file")]
    Open(#[source] std::io::Error),

    #[error("Invalid pedigree definition. Note that all six grandparent and parent roles must be defined")]
    Parse(#[source] serde_yaml::Error),

    #[error("Failed to serialize pedigree definition")]
    Serialize(#[source] serde_yaml::Error),
}
