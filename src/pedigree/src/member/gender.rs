use std::{fmt::{self, Formatter, Display}, str::FromStr, convert::Infallible};

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male"   | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            _                    => Self::Unknown,
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.to_string()
    }
}

impl FromStr for Gender {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Genders are written the way the `genders=` configuration key expects them.
impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Male    => "M",
            Self::Female  => "F",
            Self::Unknown => "NA"
        })
    }
}
