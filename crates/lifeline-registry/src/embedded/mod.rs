//! Sample registry data compiled into the crate.
//!
//! A small Mumbai-region dataset ships with the library so that examples
//! and tests work out of the box without any external files. The JSON is
//! parsed once on first access; the files are validated by this crate's
//! tests, so a parse failure here is a packaging defect.

use once_cell::sync::Lazy;

use crate::records::{BloodBankRecord, DonorRecord, HospitalRecord};

static BLOOD_BANKS: Lazy<Vec<BloodBankRecord>> = Lazy::new(|| {
    serde_json::from_str(include_str!("data/bloodbanks.json"))
        .expect("embedded blood bank dataset must parse")
});

static HOSPITALS: Lazy<Vec<HospitalRecord>> = Lazy::new(|| {
    serde_json::from_str(include_str!("data/hospitals.json"))
        .expect("embedded hospital dataset must parse")
});

static DONORS: Lazy<Vec<DonorRecord>> = Lazy::new(|| {
    serde_json::from_str(include_str!("data/donors.json"))
        .expect("embedded donor dataset must parse")
});

/// The embedded blood bank collection.
#[must_use]
pub fn blood_banks() -> &'static [BloodBankRecord] {
    &BLOOD_BANKS
}

/// The embedded hospital collection.
#[must_use]
pub fn hospitals() -> &'static [HospitalRecord] {
    &HOSPITALS
}

/// The embedded donor collection.
#[must_use]
pub fn donors() -> &'static [DonorRecord] {
    &DONORS
}
