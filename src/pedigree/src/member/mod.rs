use serde::{Serialize, Deserialize};

mod disease_status;
pub use disease_status::DiseaseStatus;

mod gender;
pub use gender::Gender;

mod flags;
pub use flags::{InclusionFlag, InclusionFlags};

/// Space padding lengths used for `std::fmt::Display` of PedigreeMember
const ID_DISPLAY_LEN    : usize = 12;
const STATUS_DISPLAY_LEN: usize = 12;

/// A single individual of the pedigree.
/// # Fields:
/// - `sample_id`     : identifier of the sample. Expected to be unique within the pedigree, but never checked.
/// - `disease_status`: `nonaffected`, `affected`, `carrier` or `NA`.
/// - `gender`        : `M`, `F` or `NA`. Only used to fill the `genders=` configuration line.
/// - `flags`         : auxiliary filter lists this member should be written into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedigreeMember {
    #[serde(alias = "sampleID")]
    pub sample_id     : String,
    #[serde(default, alias = "diseaseStatus")]
    pub disease_status: DiseaseStatus,
    #[serde(default)]
    pub gender        : Gender,
    #[serde(flatten)]
    pub flags         : InclusionFlags,
}

impl PedigreeMember {
    pub fn new(sample_id: &str, disease_status: DiseaseStatus, gender: Gender) -> Self {
        Self { sample_id: sample_id.to_string(), disease_status, gender, flags: InclusionFlags::default() }
    }

    /// Raise or lower a single inclusion flag, builder-style.
    #[must_use]
    pub fn with_flag(mut self, flag: InclusionFlag, value: bool) -> Self {
        self.flags.set(flag, value);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: InclusionFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn has_status(&self, status: &DiseaseStatus) -> bool {
        &self.disease_status == status
    }

    #[must_use]
    pub fn has_flag(&self, flag: InclusionFlag) -> bool {
        self.flags.is_set(flag)
    }
}

impl std::fmt::Display for PedigreeMember {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "id: {: <ID_DISPLAY_LEN$} status: {: <STATUS_DISPLAY_LEN$} gender: {}", self.sample_id, self.disease_status, self.gender)
    }
}
