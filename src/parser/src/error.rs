use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("File {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("{} is not a File", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to serialize command line arguments")]
    Serialize(#[source] serde_yaml::Error),
}
