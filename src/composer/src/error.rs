use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Unable to open settings file")]
    Open(#[source] std::io::Error),

    #[error("Unable to parse settings file")]
    Parse(#[source] serde_yaml::Error),
}
