use crate::{PedigreeDescription, partition::join_ids};

/// Placeholder written for an unknown parent.
pub const MISSING_ID: &str = "NA";

/// Serialized pedigree structure: one entry per member, in canonical traversal order.
/// - `sample_ids`: member sample IDs.
/// - `father_ids`: sample ID of each member's father, or `MISSING_ID`.
/// - `mother_ids`: sample ID of each member's mother, or `MISSING_ID`.
/// - `genders`   : `M`, `F` or `NA`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureLists {
    pub sample_ids: String,
    pub father_ids: String,
    pub mother_ids: String,
    pub genders   : String,
}

impl StructureLists {
    #[must_use]
    pub fn from_pedigree(pedigree: &PedigreeDescription) -> Self {
        let mut sample_ids = Vec::with_capacity(pedigree.len());
        let mut father_ids = Vec::with_capacity(pedigree.len());
        let mut mother_ids = Vec::with_capacity(pedigree.len());
        let mut genders    = Vec::with_capacity(pedigree.len());

        for (role, member) in pedigree.iter() {
            let [father, mother] = match pedigree.parents_of(role) {
                Some([father, mother]) => [father.sample_id.as_str(), mother.sample_id.as_str()],
                None                   => [MISSING_ID, MISSING_ID],
            };
            sample_ids.push(member.sample_id.as_str());
            father_ids.push(father);
            mother_ids.push(mother);
            genders.push(member.gender);
        }

        Self {
            sample_ids: join_ids(sample_ids),
            father_ids: join_ids(father_ids),
            mother_ids: join_ids(mother_ids),
            genders   : join_ids(genders),
        }
    }
}
