//! Record types and registry data loading for the Lifeline donor matching
//! engine.
//!
//! This crate owns the wire-format record types (blood groups, organs,
//! GeoJSON locations, blood banks, hospitals, donors), the tolerant JSON
//! collection loader, an embedded Mumbai-region sample dataset, and the
//! fixture generators used by tests across the workspace.
//!
//! ```rust
//! use lifeline_registry::RegistryData;
//!
//! let registry = RegistryData::embedded();
//! assert!(!registry.blood_banks().is_empty());
//! ```

pub mod embedded;
pub mod loader;
pub mod records;
pub mod test_data;

mod error {
    use std::path::PathBuf;

    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum RegistryError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),
        #[error("expected a JSON array of records in {}", .0.display())]
        NotAnArray(PathBuf),
    }

    pub type Result<T> = std::result::Result<T, RegistryError>;
}

pub use error::{RegistryError, Result};
// Re-export main types
pub use loader::{RegistryData, load_records};
pub use records::{
    BloodBankRecord, BloodGroup, DonorRecord, GeoJsonPoint, HospitalRecord, Locatable, Organ,
    UnknownLabel,
};
pub use test_data::{TestDataConfig, create_donor_file, create_registry_files};
