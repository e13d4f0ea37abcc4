//! Hopla configuration settings and text composition.

mod error;
pub use error::SettingsError;

pub mod settings;
pub use settings::{Settings, Filter1Settings, MerlinSettings, MerlinModel};

mod line;
pub use line::{ConfigLine, COMMENT_PREFIX};

mod text;
pub use text::ConfigText;
