use std::fmt::{self, Display, Formatter};

/// Prefix of every comment line.
pub const COMMENT_PREFIX: &str = "#";

/// A single line of a Hopla configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLine {
    Comment(String),
    Entry{key: String, value: String},
    Blank,
}

impl ConfigLine {
    pub fn comment(text: &str) -> Self {
        Self::Comment(text.to_string())
    }

    pub fn entry(key: &str, value: impl Display) -> Self {
        Self::Entry{key: key.to_string(), value: value.to_string()}
    }
}

impl Display for ConfigLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text)       => write!(f, "{COMMENT_PREFIX} {text}"),
            Self::Entry{key, value}   => write!(f, "{key}={value}"),
            Self::Blank               => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ConfigLine::comment("Pedigree").to_string(), "# Pedigree");
        assert_eq!(ConfigLine::entry("nonaffected.ids", "G1,G3").to_string(), "nonaffected.ids=G1,G3");
        assert_eq!(ConfigLine::entry("carrier.ids", "").to_string(), "carrier.ids=");
        assert_eq!(ConfigLine::Blank.to_string(), "");
    }
}
