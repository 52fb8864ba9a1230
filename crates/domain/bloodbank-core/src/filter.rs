use crate::{BloodType, Donor};

/// Case-insensitive substring match on "first last", email or blood type.
/// An empty term matches every donor.
pub fn donor_matches(donor: &Donor, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    donor.full_name().to_lowercase().contains(&needle)
        || donor.email.to_lowercase().contains(&needle)
        || donor.blood_type.as_str().to_lowercase().contains(&needle)
}

pub fn filter_donors<'a>(donors: &'a [Donor], term: &str) -> Vec<&'a Donor> {
    donors.iter().filter(|d| donor_matches(d, term)).collect()
}

/// Distinct blood types in order of first appearance.
pub fn distinct_blood_types(donors: &[Donor]) -> Vec<BloodType> {
    let mut seen = Vec::new();
    for donor in donors {
        if !seen.contains(&donor.blood_type) {
            seen.push(donor.blood_type);
        }
    }
    seen
}
