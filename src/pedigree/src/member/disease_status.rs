use std::{fmt::{self, Display, Formatter}, str::FromStr, convert::Infallible};

use serde::{Serialize, Deserialize};

/// Disease status of a pedigree member.
///
/// Values are matched exactly: anything outside of `nonaffected | affected | carrier | NA`
/// (including `Affected` or ` carrier `) is kept as `Unrecognized`, and never matches a
/// disease-status category. An empty value is `NA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiseaseStatus {
    NonAffected,
    Affected,
    Carrier,
    #[default]
    NotAvailable,
    Unrecognized(String),
}

impl DiseaseStatus {
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for DiseaseStatus {
    fn from(s: &str) -> Self {
        match s {
            "nonaffected" => Self::NonAffected,
            "affected"    => Self::Affected,
            "carrier"     => Self::Carrier,
            "NA" | ""     => Self::NotAvailable,
            _             => Self::Unrecognized(s.to_string()),
        }
    }
}

impl From<String> for DiseaseStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<DiseaseStatus> for String {
    fn from(status: DiseaseStatus) -> Self {
        status.to_string()
    }
}

impl FromStr for DiseaseStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for DiseaseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAffected      => write!(f, "nonaffected"),
            Self::Affected         => write!(f, "affected"),
            Self::Carrier          => write!(f, "carrier"),
            Self::NotAvailable     => write!(f, "NA"),
            Self::Unrecognized(s)  => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        assert_eq!(DiseaseStatus::from("nonaffected"), DiseaseStatus::NonAffected);
        assert_eq!(DiseaseStatus::from("affected"),    DiseaseStatus::Affected);
        assert_eq!(DiseaseStatus::from("carrier"),     DiseaseStatus::Carrier);
        assert_eq!(DiseaseStatus::from("NA"),          DiseaseStatus::NotAvailable);
        assert_eq!(DiseaseStatus::from(""),            DiseaseStatus::NotAvailable);
    }

    #[test]
    fn unrecognized_is_kept_verbatim() {
        let status = DiseaseStatus::from("unaffected?");
        assert_eq!(status, DiseaseStatus::Unrecognized("unaffected?".to_string()));
        assert!(!status.is_recognized());
        assert_eq!(status.to_string(), "unaffected?");
    }

    #[test]
    fn matching_is_exact() {
        for raw in ["Nonaffected", "AFFECTED", " carrier ", "na", "carrier\n"] {
            assert_eq!(DiseaseStatus::from(raw), DiseaseStatus::Unrecognized(raw.to_string()), "{raw:?}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(DiseaseStatus::NonAffected.to_string(), "nonaffected");
        assert_eq!(DiseaseStatus::Affected.to_string(), "affected");
        assert_eq!(DiseaseStatus::Carrier.to_string(), "carrier");
        assert_eq!(DiseaseStatus::NotAvailable.to_string(), "NA");
    }

    #[test]
    fn default_is_not_available() {
        assert_eq!(DiseaseStatus::default(), DiseaseStatus::NotAvailable);
    }
}
