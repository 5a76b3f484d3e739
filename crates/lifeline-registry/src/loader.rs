//! Tolerant loading of registry collections from JSON files.
//!
//! Collections are flat JSON arrays maintained outside the process. A file
//! that cannot be read or is not an array is a whole-source failure and
//! surfaces as [`RegistryError`]; individual elements that fail to
//! deserialize, or whose location point is malformed, are dropped without
//! an error so one junk record never takes a source down.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{
    RegistryError, Result,
    records::{BloodBankRecord, HospitalRecord, Locatable},
};

/// Load one collection from a JSON array file, keeping only records that
/// deserialize cleanly and carry a well-formed location.
pub fn load_records<T>(path: impl AsRef<Path>) -> Result<Vec<T>>
where
    T: DeserializeOwned + Locatable,
{
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;

    let serde_json::Value::Array(elements) = value else {
        return Err(RegistryError::NotAnArray(path.to_path_buf()));
    };

    let total = elements.len();
    let records: Vec<T> = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value::<T>(element).ok())
        .filter(|record| record.coords().is_well_formed())
        .collect();

    if records.len() < total {
        debug!(
            path = %path.display(),
            skipped = total - records.len(),
            kept = records.len(),
            "Dropped malformed registry records"
        );
    }

    Ok(records)
}

/// The organization registries consulted by every proximity search.
///
/// `RegistryData` is constructed once at startup and passed by reference
/// into the searcher; it is never ambient global state, so tests can
/// substitute fixture data at construction time. Collections are immutable
/// after construction — refreshing from disk means building a new
/// `RegistryData` and swapping it in.
#[derive(Debug, Clone, Default)]
pub struct RegistryData {
    blood_banks: Vec<BloodBankRecord>,
    hospitals: Vec<HospitalRecord>,
}

impl RegistryData {
    /// Build a registry from in-memory records.
    #[must_use]
    pub fn from_records(
        blood_banks: Vec<BloodBankRecord>,
        hospitals: Vec<HospitalRecord>,
    ) -> Self {
        Self {
            blood_banks,
            hospitals,
        }
    }

    /// Load both registries, failing on the first whole-source error.
    pub fn load(
        blood_bank_path: impl AsRef<Path>,
        hospital_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let blood_banks = load_records(&blood_bank_path)?;
        let hospitals = load_records(&hospital_path)?;

        info!(
            blood_banks = blood_banks.len(),
            hospitals = hospitals.len(),
            "Loaded organization registries"
        );

        Ok(Self {
            blood_banks,
            hospitals,
        })
    }

    /// Load both registries, degrading a failed source to an empty
    /// collection.
    ///
    /// The failure is logged once here at startup; later searches see an
    /// empty collection rather than a per-request error.
    #[must_use]
    pub fn load_or_empty(
        blood_bank_path: impl AsRef<Path>,
        hospital_path: impl AsRef<Path>,
    ) -> Self {
        let blood_banks = load_or_empty_source(blood_bank_path.as_ref(), "blood bank registry");
        let hospitals = load_or_empty_source(hospital_path.as_ref(), "hospital registry");

        Self {
            blood_banks,
            hospitals,
        }
    }

    /// The registry compiled into the crate (small Mumbai-region sample).
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            blood_banks: crate::embedded::blood_banks().to_vec(),
            hospitals: crate::embedded::hospitals().to_vec(),
        }
    }

    /// All loaded blood banks.
    #[must_use]
    pub fn blood_banks(&self) -> &[BloodBankRecord] {
        &self.blood_banks
    }

    /// All loaded hospitals.
    #[must_use]
    pub fn hospitals(&self) -> &[HospitalRecord] {
        &self.hospitals
    }

    /// Whether both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blood_banks.is_empty() && self.hospitals.is_empty()
    }
}

fn load_or_empty_source<T>(path: &Path, what: &str) -> Vec<T>
where
    T: DeserializeOwned + Locatable,
{
    match load_records(path) {
        Ok(records) => records,
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Failed to load {what}; continuing with an empty collection"
            );
            Vec::new()
        }
    }
}
