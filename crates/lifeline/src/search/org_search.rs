use tracing::{debug, instrument};

use lifeline_registry::{BloodBankRecord, HospitalRecord, Locatable};

use super::{Candidate, SearchFilter};
use crate::geo::QueryPoint;

/// Records with a well-formed location inside the radius, paired with
/// their distance from the query point. Malformed locations are dropped
/// here, before any distance is computed.
fn within_radius<'a, T: Locatable>(
    origin: &'a QueryPoint,
    radius_meters: f64,
    records: &'a [T],
) -> impl Iterator<Item = (&'a T, f64)> {
    records.iter().filter_map(move |record| {
        let (lng, lat) = record.coords().position()?;
        let distance = origin.distance_to(lng, lat);
        (distance <= radius_meters).then_some((record, distance))
    })
}

/// Blood banks in range with stock for the requested blood type.
///
/// Blood banks keep no organ inventory, so an organ filter excludes the
/// whole category.
#[instrument(name = "Blood Bank Search", level = "debug", skip(records))]
pub(crate) fn blood_bank_search_inner(
    origin: &QueryPoint,
    radius_meters: f64,
    filter: Option<&SearchFilter>,
    records: &[BloodBankRecord],
) -> Vec<Candidate> {
    let candidates: Vec<Candidate> = within_radius(origin, radius_meters, records)
        .filter(|(bank, _)| match filter {
            None => true,
            Some(SearchFilter::BloodType(group)) => bank.blood_units(*group) > 0,
            Some(SearchFilter::Organ(_)) => false,
        })
        .map(|(bank, distance)| Candidate::BloodBank {
            record: bank.clone(),
            distance,
        })
        .collect();

    debug!(candidates = candidates.len(), "Blood bank search complete");
    candidates
}

/// Hospitals in range with stock for the requested blood type or organ.
#[instrument(name = "Hospital Search", level = "debug", skip(records))]
pub(crate) fn hospital_search_inner(
    origin: &QueryPoint,
    radius_meters: f64,
    filter: Option<&SearchFilter>,
    records: &[HospitalRecord],
) -> Vec<Candidate> {
    let candidates: Vec<Candidate> = within_radius(origin, radius_meters, records)
        .filter(|(hospital, _)| match filter {
            None => true,
            Some(SearchFilter::BloodType(group)) => hospital.blood_units(*group) > 0,
            Some(SearchFilter::Organ(organ)) => hospital.organ_units(*organ) > 0,
        })
        .map(|(hospital, distance)| Candidate::Hospital {
            record: hospital.clone(),
            distance,
        })
        .collect();

    debug!(candidates = candidates.len(), "Hospital search complete");
    candidates
}
