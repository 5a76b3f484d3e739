//! The donor store seam.
//!
//! Donors live in a persistent, geo-capable store managed outside this
//! crate; the search engine only needs the two queries captured by
//! [`DonorStore`]. The bundled [`InMemoryDonorStore`] serves tests,
//! examples, and small file-backed deployments, and is the reference for
//! the query semantics any backing implementation must honor.

use std::path::Path;

pub use error::{Result, StoreError};
use tracing::debug;

use crate::{geo::QueryPoint, search::SearchFilter};
use lifeline_registry::{DonorRecord, load_records};

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum StoreError {
        #[error("donor store unavailable: {0}")]
        Unavailable(String),
        #[error(transparent)]
        Other(#[from] anyhow::Error),
    }
    pub type Result<T> = std::result::Result<T, StoreError>;
}

/// A queryable collection of registered donors.
///
/// Implementations must be fail-closed: a failing query returns an error
/// and never a partial result set.
pub trait DonorStore: Send + Sync + std::fmt::Debug {
    /// Donors within `radius_meters` of `origin`, nearest first, matching
    /// the filter when one is given.
    ///
    /// Filter semantics: a blood filter is an exact match on the donor's
    /// blood group; an organ filter is membership in the donor's pledge
    /// list. Donors without a well-formed location never appear.
    fn near(
        &self,
        origin: &QueryPoint,
        radius_meters: f64,
        filter: Option<&SearchFilter>,
    ) -> Result<Vec<DonorRecord>>;

    /// Donors registered under an exact area label, matching the filter
    /// when one is given. Order is unspecified.
    fn find_in_area(&self, area: &str, filter: Option<&SearchFilter>) -> Result<Vec<DonorRecord>>;
}

/// Donor store backed by an owned in-memory collection.
///
/// Queries are linear scans; collections at this engine's scale are small
/// enough that an index would not pay for itself.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDonorStore {
    donors: Vec<DonorRecord>,
}

impl InMemoryDonorStore {
    /// Build a store from in-memory records.
    #[must_use]
    pub fn from_records(donors: Vec<DonorRecord>) -> Self {
        Self { donors }
    }

    /// Load a store from a donor registry file (same tolerant format as
    /// the organization registries).
    pub fn load(path: impl AsRef<Path>) -> lifeline_registry::Result<Self> {
        Ok(Self {
            donors: load_records(path)?,
        })
    }

    /// The donor collection compiled into the registry crate.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            donors: lifeline_registry::embedded::donors().to_vec(),
        }
    }

    /// Number of donors held by the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.donors.len()
    }

    /// Whether the store holds no donors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }
}

impl DonorStore for InMemoryDonorStore {
    fn near(
        &self,
        origin: &QueryPoint,
        radius_meters: f64,
        filter: Option<&SearchFilter>,
    ) -> Result<Vec<DonorRecord>> {
        let mut matches: Vec<(f64, &DonorRecord)> = self
            .donors
            .iter()
            .filter(|donor| filter.is_none_or(|f| f.matches_donor(donor)))
            .filter_map(|donor| {
                let (lng, lat) = donor.location_coords.position()?;
                let distance = origin.distance_to(lng, lat);
                (distance <= radius_meters).then_some((distance, donor))
            })
            .collect();

        matches.sort_by(|a, b| a.0.total_cmp(&b.0));

        debug!(
            matched = matches.len(),
            radius_meters, "In-memory donor proximity query"
        );

        Ok(matches.into_iter().map(|(_, donor)| donor.clone()).collect())
    }

    fn find_in_area(&self, area: &str, filter: Option<&SearchFilter>) -> Result<Vec<DonorRecord>> {
        Ok(self
            .donors
            .iter()
            .filter(|donor| donor.location == area)
            .filter(|donor| filter.is_none_or(|f| f.matches_donor(donor)))
            .cloned()
            .collect())
    }
}
