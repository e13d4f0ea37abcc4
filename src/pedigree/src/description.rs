use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Deserialize};
use log::trace;

use crate::member::{PedigreeMember, DiseaseStatus, Gender, InclusionFlag, InclusionFlags};

/// Position of a member within the pedigree.
/// `Sibling` and `Embryo` carry the 0-based index of the member within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    PaternalGrandfather,
    PaternalGrandmother,
    MaternalGrandfather,
    MaternalGrandmother,
    Father,
    Mother,
    Sibling(usize),
    Embryo(usize),
}

impl Role {
    /// The six single-valued roles, in canonical order.
    pub const FIXED: [Self; 6] = [
        Self::PaternalGrandfather,
        Self::PaternalGrandmother,
        Self::MaternalGrandfather,
        Self::MaternalGrandmother,
        Self::Father,
        Self::Mother,
    ];

    /// Return the `[father, mother]` roles of this role, or `None` for grandparents,
    /// whose parents are not part of the pedigree.
    #[must_use]
    pub fn parents(&self) -> Option<[Role; 2]> {
        match self {
            Self::Father                      => Some([Self::PaternalGrandfather, Self::PaternalGrandmother]),
            Self::Mother                      => Some([Self::MaternalGrandfather, Self::MaternalGrandmother]),
            Self::Sibling(_) | Self::Embryo(_) => Some([Self::Father, Self::Mother]),
            _                                 => None,
        }
    }

    /// Sample ID given to this role's member when generating a blank pedigree.
    #[must_use]
    pub fn default_sample_id(&self) -> String {
        match self {
            Self::PaternalGrandfather => "PGF".to_string(),
            Self::PaternalGrandmother => "PGM".to_string(),
            Self::MaternalGrandfather => "MGF".to_string(),
            Self::MaternalGrandmother => "MGM".to_string(),
            Self::Father              => "U1".to_string(),
            Self::Mother              => "U2".to_string(),
            Self::Sibling(i)          => format!("S{}", i + 1),
            Self::Embryo(i)           => format!("E{}", i + 1),
        }
    }

    /// Expected gender of the role, if the role implies one.
    #[must_use]
    pub fn default_gender(&self) -> Gender {
        match self {
            Self::PaternalGrandfather | Self::MaternalGrandfather | Self::Father => Gender::Male,
            Self::PaternalGrandmother | Self::MaternalGrandmother | Self::Mother => Gender::Female,
            Self::Sibling(_) | Self::Embryo(_)                                   => Gender::Unknown,
        }
    }

    /// Blank member for this role: default ID and gender, `NA` status.
    /// Parents are kept in every filter list; grandparents are not marked as informative.
    #[must_use]
    pub fn default_member(&self) -> PedigreeMember {
        let member = PedigreeMember::new(&self.default_sample_id(), DiseaseStatus::NotAvailable, self.default_gender())
            .with_flags(InclusionFlags::all());
        match self.parents() {
            Some(_) => member,
            None    => member.with_flag(InclusionFlag::KeepInformative, false),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaternalGrandfather => write!(f, "paternal grandfather"),
            Self::PaternalGrandmother => write!(f, "paternal grandmother"),
            Self::MaternalGrandfather => write!(f, "maternal grandfather"),
            Self::MaternalGrandmother => write!(f, "maternal grandmother"),
            Self::Father              => write!(f, "father"),
            Self::Mother              => write!(f, "mother"),
            Self::Sibling(i)          => write!(f, "sibling #{}", i + 1),
            Self::Embryo(i)           => write!(f, "embryo #{}", i + 1),
        }
    }
}

/// Full family structure: six fixed roles, plus ordered siblings and embryos.
///
/// Every fixed role is always present. Traversal is always performed in the canonical order:
/// paternal grandfather, paternal grandmother, maternal grandfather, maternal grandmother,
/// father, mother, siblings (input order), embryos (input order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedigreeDescription {
    pub paternal_grandfather: PedigreeMember,
    pub paternal_grandmother: PedigreeMember,
    pub maternal_grandfather: PedigreeMember,
    pub maternal_grandmother: PedigreeMember,
    pub father              : PedigreeMember,
    pub mother              : PedigreeMember,
    #[serde(default)]
    pub siblings            : Vec<PedigreeMember>,
    #[serde(default)]
    pub embryos             : Vec<PedigreeMember>,
}

impl Default for PedigreeDescription {
    /// Blank pedigree, with default members for the six fixed roles and no siblings nor embryos.
    fn default() -> Self {
        Self {
            paternal_grandfather: Role::PaternalGrandfather.default_member(),
            paternal_grandmother: Role::PaternalGrandmother.default_member(),
            maternal_grandfather: Role::MaternalGrandfather.default_member(),
            maternal_grandmother: Role::MaternalGrandmother.default_member(),
            father              : Role::Father.default_member(),
            mother              : Role::Mother.default_member(),
            siblings            : Vec::new(),
            embryos             : Vec::new(),
        }
    }
}

impl PedigreeDescription {
    /// Return the member holding the given role, or `None` if a sibling/embryo index is out of bounds.
    #[must_use]
    pub fn member(&self, role: Role) -> Option<&PedigreeMember> {
        match role {
            Role::PaternalGrandfather => Some(&self.paternal_grandfather),
            Role::PaternalGrandmother => Some(&self.paternal_grandmother),
            Role::MaternalGrandfather => Some(&self.maternal_grandfather),
            Role::MaternalGrandmother => Some(&self.maternal_grandmother),
            Role::Father              => Some(&self.father),
            Role::Mother              => Some(&self.mother),
            Role::Sibling(i)          => self.siblings.get(i),
            Role::Embryo(i)           => self.embryos.get(i),
        }
    }

    /// Iterate over every `(Role, &PedigreeMember)` pair, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &PedigreeMember)> + '_ {
        let fixed = [
            (Role::PaternalGrandfather, &self.paternal_grandfather),
            (Role::PaternalGrandmother, &self.paternal_grandmother),
            (Role::MaternalGrandfather, &self.maternal_grandfather),
            (Role::MaternalGrandmother, &self.maternal_grandmother),
            (Role::Father,              &self.father),
            (Role::Mother,              &self.mother),
        ];
        fixed.into_iter()
            .chain(self.siblings.iter().enumerate().map(|(i, member)| (Role::Sibling(i), member)))
            .chain(self.embryos.iter().enumerate().map(|(i, member)| (Role::Embryo(i), member)))
            .inspect(|(role, member)| trace!("{role}: {member}"))
    }

    /// Iterate over every member, in canonical order.
    pub fn members(&self) -> impl Iterator<Item = &PedigreeMember> + '_ {
        self.iter().map(|(_, member)| member)
    }

    /// Return the `[father, mother]` members of the given role, or `None` for grandparents.
    #[must_use]
    pub fn parents_of(&self, role: Role) -> Option<[&PedigreeMember; 2]> {
        let [father, mother] = role.parents()?;
        Some([self.member(father)?, self.member(mother)?])
    }

    /// Total number of members (six fixed roles + siblings + embryos).
    #[must_use]
    pub fn len(&self) -> usize {
        Role::FIXED.len() + self.siblings.len() + self.embryos.len()
    }

    /// A pedigree always holds its six fixed roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over members whose disease status could not be recognized.
    pub fn unrecognized_statuses(&self) -> impl Iterator<Item = (Role, &PedigreeMember)> + '_ {
        self.iter().filter(|(_, member)| !member.disease_status.is_recognized())
    }
}
