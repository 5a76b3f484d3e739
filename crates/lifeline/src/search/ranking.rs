use itertools::Itertools;

use super::Candidate;

/// Merge the three loader outputs into one ranked list.
///
/// Ordering is category priority first (blood banks, hospitals, donors),
/// ascending distance within a category, and display name as the final
/// deterministic tie-break for exactly equal distances. No deduplication:
/// one real-world entity cannot appear in two category sets.
pub(crate) fn merge_and_rank(
    blood_banks: Vec<Candidate>,
    hospitals: Vec<Candidate>,
    donors: Vec<Candidate>,
) -> Vec<Candidate> {
    blood_banks
        .into_iter()
        .chain(hospitals)
        .chain(donors)
        .sorted_by(|a, b| {
            a.priority()
                .cmp(&b.priority())
                .then_with(|| a.distance().total_cmp(&b.distance()))
                .then_with(|| a.name().cmp(b.name()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use lifeline_registry::{BloodBankRecord, DonorRecord, GeoJsonPoint, HospitalRecord};

    use super::*;
    use crate::search::Candidate;

    fn bank(name: &str, distance: f64) -> Candidate {
        Candidate::BloodBank {
            record: BloodBankRecord {
                name: name.to_owned(),
                address: None,
                phone: None,
                location_coords: GeoJsonPoint::new(72.88, 19.08),
                blood_inventory: Default::default(),
            },
            distance,
        }
    }

    fn hospital(name: &str, distance: f64) -> Candidate {
        Candidate::Hospital {
            record: HospitalRecord {
                name: name.to_owned(),
                address: None,
                phone: None,
                location_coords: GeoJsonPoint::new(72.88, 19.08),
                blood_inventory: Default::default(),
                organ_inventory: Default::default(),
            },
            distance,
        }
    }

    fn donor(name: &str, distance: f64) -> Candidate {
        Candidate::Donor {
            record: DonorRecord {
                name: name.to_owned(),
                email: "d@example.com".to_owned(),
                phone: "0".to_owned(),
                location: "Fort".to_owned(),
                blood_group: lifeline_registry::BloodGroup::OPositive,
                organs: vec![],
                location_coords: GeoJsonPoint::new(72.88, 19.08),
                registered_at: None,
            },
            distance,
        }
    }

    #[test]
    fn categories_partition_the_output() {
        let ranked = merge_and_rank(
            vec![bank("b", 9_000.0)],
            vec![hospital("h", 100.0)],
            vec![donor("d", 1.0)],
        );

        // A nearer hospital or donor never outranks a farther blood bank.
        let priorities: Vec<u8> = ranked.iter().map(Candidate::priority).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
    }

    #[test]
    fn distance_orders_within_a_category() {
        let ranked = merge_and_rank(
            vec![bank("far", 5_000.0), bank("near", 10.0)],
            vec![],
            vec![donor("d2", 800.0), donor("d1", 200.0)],
        );

        assert_eq!(ranked[0].name(), "near");
        assert_eq!(ranked[1].name(), "far");
        assert_eq!(ranked[2].name(), "d1");
        assert_eq!(ranked[3].name(), "d2");
    }

    #[test]
    fn equal_distances_tie_break_on_name() {
        let ranked = merge_and_rank(
            vec![bank("zeta", 500.0), bank("alpha", 500.0)],
            vec![],
            vec![],
        );
        assert_eq!(ranked[0].name(), "alpha");
        assert_eq!(ranked[1].name(), "zeta");

        // Same input in the other order ranks identically.
        let reversed = merge_and_rank(
            vec![bank("alpha", 500.0), bank("zeta", 500.0)],
            vec![],
            vec![],
        );
        assert_eq!(reversed[0].name(), "alpha");
        assert_eq!(reversed[1].name(), "zeta");
    }

    #[test]
    fn empty_inputs_merge_to_empty() {
        assert!(merge_and_rank(vec![], vec![], vec![]).is_empty());
    }
}
