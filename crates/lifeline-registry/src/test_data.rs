//! Test fixture generation for registry collections.
//!
//! Writes registry JSON files into temporary files so loader, store, and
//! search tests can exercise the real file-loading path without touching
//! checked-in data.

use std::io::Write;

use serde_json::{Value, json};
use tempfile::NamedTempFile;
use tracing::info;

use crate::Result;

/// Configuration for generated registry fixtures.
#[derive(Debug, Clone)]
pub struct TestDataConfig {
    /// Number of valid blood bank records to generate
    pub blood_banks: usize,
    /// Number of valid hospital records to generate
    pub hospitals: usize,
    /// Number of valid donor records to generate
    pub donors: usize,
    /// Whether to interleave malformed records (string coordinates,
    /// wrong-length arrays, missing location) between the valid ones
    pub include_malformed: bool,
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self {
            blood_banks: 4,
            hospitals: 3,
            donors: 5,
            include_malformed: false,
        }
    }
}

impl TestDataConfig {
    /// Minimal data for unit tests
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            blood_banks: 1,
            hospitals: 1,
            donors: 1,
            include_malformed: false,
        }
    }

    /// Larger data for integration tests
    #[must_use]
    pub fn sample() -> Self {
        Self {
            blood_banks: 8,
            hospitals: 5,
            donors: 10,
            include_malformed: false,
        }
    }
}

const BLOOD_LABELS: [&str; 4] = ["O+", "A+", "B+", "AB+"];
const ORGAN_LABELS: [&str; 3] = ["Kidney", "Liver", "Eyes"];

// Fixture records fan out north-east from this point, one step per index.
const BASE_LNG: f64 = 72.86;
const BASE_LAT: f64 = 19.01;
const STEP_DEG: f64 = 0.01;

/// Create blood bank and hospital fixture files for a configuration.
pub fn create_registry_files(
    config: &TestDataConfig,
) -> Result<(NamedTempFile, NamedTempFile)> {
    info!("Creating registry test data with config: {:?}", config);

    let blood_banks = write_collection(blood_bank_values(config), config.include_malformed)?;
    let hospitals = write_collection(hospital_values(config), config.include_malformed)?;

    Ok((blood_banks, hospitals))
}

/// Create a donor fixture file for a configuration.
pub fn create_donor_file(config: &TestDataConfig) -> Result<NamedTempFile> {
    write_collection(donor_values(config), config.include_malformed)
}

fn blood_bank_values(config: &TestDataConfig) -> Vec<Value> {
    (0..config.blood_banks)
        .map(|i| {
            json!({
                "name": format!("Test Blood Bank {i}"),
                "address": format!("{i} Fixture Road"),
                "locationCoords": point(i),
                "bloodInventory": {
                    (BLOOD_LABELS[i % BLOOD_LABELS.len()]): (i as u32 % 5) + 1,
                    "O-": i as u32 % 2,
                }
            })
        })
        .collect()
}

fn hospital_values(config: &TestDataConfig) -> Vec<Value> {
    (0..config.hospitals)
        .map(|i| {
            json!({
                "name": format!("Test Hospital {i}"),
                "locationCoords": point(i + 1),
                "bloodInventory": {
                    (BLOOD_LABELS[i % BLOOD_LABELS.len()]): (i as u32 % 4) + 1,
                },
                "organInventory": {
                    (ORGAN_LABELS[i % ORGAN_LABELS.len()]): (i as u32 % 3) + 1,
                }
            })
        })
        .collect()
}

fn donor_values(config: &TestDataConfig) -> Vec<Value> {
    (0..config.donors)
        .map(|i| {
            let organs: Vec<&str> = if i % 2 == 0 {
                vec![ORGAN_LABELS[i % ORGAN_LABELS.len()]]
            } else {
                vec![]
            };
            json!({
                "name": format!("Test Donor {i}"),
                "email": format!("donor{i}@example.com"),
                "phone": format!("+91-90000-{i:05}"),
                "location": format!("Area {}", i % 3),
                "bloodGroup": BLOOD_LABELS[i % BLOOD_LABELS.len()],
                "organs": organs,
                "locationCoords": point(i + 2),
            })
        })
        .collect()
}

fn point(index: usize) -> Value {
    let offset = STEP_DEG * index as f64;
    json!({
        "type": "Point",
        "coordinates": [BASE_LNG + offset, BASE_LAT + offset],
    })
}

fn malformed_values() -> Vec<Value> {
    vec![
        // Non-numeric coordinates
        json!({
            "name": "Broken Coordinates",
            "locationCoords": { "type": "Point", "coordinates": ["x", "y"] },
        }),
        // Wrong-length coordinate array
        json!({
            "name": "Short Coordinates",
            "locationCoords": { "type": "Point", "coordinates": [1] },
        }),
        // Missing location entirely
        json!({
            "name": "No Coordinates",
        }),
    ]
}

fn write_collection(mut values: Vec<Value>, include_malformed: bool) -> Result<NamedTempFile> {
    if include_malformed {
        let malformed = malformed_values();
        for (slot, bad) in malformed.into_iter().enumerate() {
            let at = (slot * 2).min(values.len());
            values.insert(at, bad);
        }
    }

    let mut file = NamedTempFile::new()?;
    serde_json::to_writer_pretty(&mut file, &Value::Array(values))?;
    file.flush()?;
    Ok(file)
}
