use crate::{PedigreeDescription, PedigreeMember, DiseaseStatus, Gender, InclusionFlag, Role};

/// Mock a member with no inclusion flag raised.
pub fn mock_member(id: &str, status: DiseaseStatus) -> PedigreeMember {
    PedigreeMember::new(id, status, Gender::Unknown)
}

/// Mock a blank pedigree (see `PedigreeDescription::default()`), with `n_siblings` siblings
/// and `n_embryos` embryos. Siblings and embryos carry `NA` statuses and no flags.
pub fn mock_pedigree(n_siblings: usize, n_embryos: usize) -> PedigreeDescription {
    let mock = |role: Role| mock_member(&role.default_sample_id(), DiseaseStatus::NotAvailable);
    PedigreeDescription {
        siblings: (0..n_siblings).map(|i| mock(Role::Sibling(i))).collect(),
        embryos : (0..n_embryos).map(|i| mock(Role::Embryo(i))).collect(),
        ..PedigreeDescription::default()
    }
}

/// Overwrite the disease status of every member of the pedigree.
pub fn set_all_statuses(pedigree: &mut PedigreeDescription, status: &DiseaseStatus) {
    let fixed = [
        &mut pedigree.paternal_grandfather,
        &mut pedigree.paternal_grandmother,
        &mut pedigree.maternal_grandfather,
        &mut pedigree.maternal_grandmother,
        &mut pedigree.father,
        &mut pedigree.mother,
    ];
    for member in fixed.into_iter().chain(pedigree.siblings.iter_mut()).chain(pedigree.embryos.iter_mut()) {
        member.disease_status = status.clone();
    }
}

/// Reference pedigree:
/// - G1 (nonaffected), G2 (affected), G3 (nonaffected), G4 (NA)
/// - F (NA), M (nonaffected). Both parents are kept as informative.
/// - siblings: S1 (nonaffected), S2 (affected)
/// - embryos : E1 (nonaffected)
pub fn example_pedigree() -> PedigreeDescription {
    use DiseaseStatus::{NonAffected, Affected, NotAvailable};
    PedigreeDescription {
        paternal_grandfather: mock_member("G1", NonAffected),
        paternal_grandmother: mock_member("G2", Affected),
        maternal_grandfather: mock_member("G3", NonAffected),
        maternal_grandmother: mock_member("G4", NotAvailable),
        father              : mock_member("F",  NotAvailable).with_flag(InclusionFlag::KeepInformative, true),
        mother              : mock_member("M",  NonAffected).with_flag(InclusionFlag::KeepInformative, true),
        siblings            : vec![mock_member("S1", NonAffected), mock_member("S2", Affected)],
        embryos             : vec![mock_member("E1", NonAffected)],
    }
}
