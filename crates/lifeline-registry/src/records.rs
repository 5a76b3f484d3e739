//! Record types shared by the registry collections and the donor store.
//!
//! All types deserialize from the wire format used by the registry files:
//! camelCase field names, GeoJSON point locations as
//! `{"type": "Point", "coordinates": [lng, lat]}`, and inventory maps keyed
//! by blood-group or organ labels.

use std::{fmt, str::FromStr};

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The eight supported blood-group labels.
///
/// Labels are matched case-sensitively and exactly; there is no
/// normalization of the wire form (`"O+"` matches, `"o+"` does not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// All blood groups in label order.
    pub const ALL: [Self; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    /// The wire label for this blood group.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| UnknownLabel::blood_group(s))
    }
}

/// The supported organ-donation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Organ {
    Kidney,
    Liver,
    Heart,
    Lungs,
    Pancreas,
    Eyes,
}

impl Organ {
    /// All organs in label order.
    pub const ALL: [Self; 6] = [
        Self::Kidney,
        Self::Liver,
        Self::Heart,
        Self::Lungs,
        Self::Pancreas,
        Self::Eyes,
    ];

    /// The wire label for this organ.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kidney => "Kidney",
            Self::Liver => "Liver",
            Self::Heart => "Heart",
            Self::Lungs => "Lungs",
            Self::Pancreas => "Pancreas",
            Self::Eyes => "Eyes",
        }
    }
}

impl fmt::Display for Organ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Organ {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|organ| organ.as_str() == s)
            .ok_or_else(|| UnknownLabel::organ(s))
    }
}

/// A label that does not belong to the relevant closed enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: {label:?}")]
pub struct UnknownLabel {
    kind: &'static str,
    label: String,
}

impl UnknownLabel {
    fn blood_group(label: &str) -> Self {
        Self {
            kind: "blood group",
            label: label.to_owned(),
        }
    }

    fn organ(label: &str) -> Self {
        Self {
            kind: "organ",
            label: label.to_owned(),
        }
    }
}

/// A GeoJSON point as stored in registry files: `coordinates` is
/// `[longitude, latitude]`.
///
/// Records arrive from external files, so the coordinate array is kept as
/// parsed and only interpreted through [`GeoJsonPoint::position`], which
/// yields a position for well-formed points only. A point is well-formed
/// when it has exactly two finite coordinates inside geographic range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPoint {
    #[serde(rename = "type", default = "default_point_type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

fn default_point_type() -> String {
    "Point".to_owned()
}

impl GeoJsonPoint {
    /// Build a point from a `(longitude, latitude)` pair.
    #[must_use]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self {
            kind: default_point_type(),
            coordinates: vec![lng, lat],
        }
    }

    /// The `(longitude, latitude)` pair, or `None` for malformed points.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        match self.coordinates.as_slice() {
            &[lng, lat]
                if lng.is_finite()
                    && lat.is_finite()
                    && (-180.0..=180.0).contains(&lng)
                    && (-90.0..=90.0).contains(&lat) =>
            {
                Some((lng, lat))
            }
            _ => None,
        }
    }

    /// Whether the point can be used for distance computation.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.position().is_some()
    }
}

/// Anything that carries a registry location point.
///
/// The loader uses this to drop records whose location cannot be used for
/// distance computation.
pub trait Locatable {
    fn coords(&self) -> &GeoJsonPoint;
}

/// A blood bank with a per-blood-group unit inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodBankRecord {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub location_coords: GeoJsonPoint,
    #[serde(default)]
    pub blood_inventory: AHashMap<BloodGroup, u32>,
}

impl BloodBankRecord {
    /// Units currently available for a blood group (0 when absent).
    #[must_use]
    pub fn blood_units(&self, group: BloodGroup) -> u32 {
        self.blood_inventory.get(&group).copied().unwrap_or(0)
    }
}

impl Locatable for BloodBankRecord {
    fn coords(&self) -> &GeoJsonPoint {
        &self.location_coords
    }
}

/// A hospital with both blood and organ unit inventories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalRecord {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub location_coords: GeoJsonPoint,
    #[serde(default)]
    pub blood_inventory: AHashMap<BloodGroup, u32>,
    #[serde(default)]
    pub organ_inventory: AHashMap<Organ, u32>,
}

impl HospitalRecord {
    /// Units currently available for a blood group (0 when absent).
    #[must_use]
    pub fn blood_units(&self, group: BloodGroup) -> u32 {
        self.blood_inventory.get(&group).copied().unwrap_or(0)
    }

    /// Units currently available for an organ (0 when absent).
    #[must_use]
    pub fn organ_units(&self, organ: Organ) -> u32 {
        self.organ_inventory.get(&organ).copied().unwrap_or(0)
    }
}

impl Locatable for HospitalRecord {
    fn coords(&self) -> &GeoJsonPoint {
        &self.location_coords
    }
}

/// A registered donor.
///
/// `location` is the free-text area label donors register under; the
/// geographic position lives in `location_coords`. `organs` lists the
/// organ-donation pledges and may be empty for blood-only donors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub blood_group: BloodGroup,
    #[serde(default)]
    pub organs: Vec<Organ>,
    pub location_coords: GeoJsonPoint,
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
}

impl DonorRecord {
    /// Whether this donor has pledged the given organ.
    #[must_use]
    pub fn donates_organ(&self, organ: Organ) -> bool {
        self.organs.contains(&organ)
    }
}

impl Locatable for DonorRecord {
    fn coords(&self) -> &GeoJsonPoint {
        &self.location_coords
    }
}
