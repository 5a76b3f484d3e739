use serde::Serialize;

use lifeline_registry::{BloodBankRecord, DonorRecord, GeoJsonPoint, HospitalRecord};

/// One entry in a ranked search result.
///
/// A candidate pairs a source record with the distance (meters) from the
/// query point computed for this search; the distance exists only inside
/// one response and is never persisted. Serialization tags each entry with
/// its category (`"bloodbank"`, `"hospital"`, `"donor"`) and flattens the
/// record fields alongside `distance`, matching the registry wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Candidate {
    #[serde(rename = "bloodbank")]
    BloodBank {
        #[serde(flatten)]
        record: BloodBankRecord,
        distance: f64,
    },
    #[serde(rename = "hospital")]
    Hospital {
        #[serde(flatten)]
        record: HospitalRecord,
        distance: f64,
    },
    #[serde(rename = "donor")]
    Donor {
        #[serde(flatten)]
        record: DonorRecord,
        distance: f64,
    },
}

impl Candidate {
    /// Distance in meters from the query point.
    #[must_use]
    pub fn distance(&self) -> f64 {
        match self {
            Self::BloodBank { distance, .. }
            | Self::Hospital { distance, .. }
            | Self::Donor { distance, .. } => *distance,
        }
    }

    /// Category rank: organizations come before individual donors.
    #[must_use]
    pub fn priority(&self) -> u8 {
        match self {
            Self::BloodBank { .. } => 1,
            Self::Hospital { .. } => 2,
            Self::Donor { .. } => 3,
        }
    }

    /// Display name of the underlying record.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BloodBank { record, .. } => &record.name,
            Self::Hospital { record, .. } => &record.name,
            Self::Donor { record, .. } => &record.name,
        }
    }

    /// Location point of the underlying record.
    #[must_use]
    pub fn location(&self) -> &GeoJsonPoint {
        match self {
            Self::BloodBank { record, .. } => &record.location_coords,
            Self::Hospital { record, .. } => &record.location_coords,
            Self::Donor { record, .. } => &record.location_coords,
        }
    }

    #[must_use]
    pub fn is_blood_bank(&self) -> bool {
        matches!(self, Self::BloodBank { .. })
    }

    #[must_use]
    pub fn is_hospital(&self) -> bool {
        matches!(self, Self::Hospital { .. })
    }

    #[must_use]
    pub fn is_donor(&self) -> bool {
        matches!(self, Self::Donor { .. })
    }
}
