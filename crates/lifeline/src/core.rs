//! The main proximity searcher.
//!
//! [`ProximitySearcher`] ties the donor store and the organization
//! registries together and exposes the combined search operations. It is
//! cheap to clone (the store is shared) and safe to use from concurrent
//! request handlers: every search is read-only.
//!
//! # Quick Start
//!
//! ```rust
//! use lifeline::{BloodGroup, ProximitySearcher, QueryPoint, SearchFilter};
//!
//! let searcher = ProximitySearcher::new_embedded();
//!
//! let origin = QueryPoint::new(19.0760, 72.8777)?;
//! let filter = SearchFilter::BloodType(BloodGroup::OPositive);
//! let results = searcher.search(&origin, &filter)?;
//!
//! for candidate in &results {
//!     println!("{} ({:.1} km away)", candidate.name(), candidate.distance() / 1000.0);
//! }
//! # Ok::<(), lifeline::LifelineError>(())
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, info, instrument};

use lifeline_registry::{DonorRecord, RegistryData};

use crate::{
    config::SearchConfig,
    error::{LifelineError, Result},
    geo::QueryPoint,
    search::{Candidate, SearchError, SearchFilter, combined_search_inner},
    store::{DonorStore, InMemoryDonorStore},
};

pub type SearchResults = Vec<Candidate>;

/// The combined donor/organization proximity searcher.
///
/// Construct one at process start — directly, via
/// [`ProximitySearcher::new_embedded`], or through
/// [`ProximitySearcherBuilder`] — and share it across requests.
#[derive(Debug, Clone)]
pub struct ProximitySearcher {
    store: Arc<dyn DonorStore>,
    registry: RegistryData,
}

impl ProximitySearcher {
    /// Create a searcher from a donor store and loaded registries.
    #[instrument(name = "Initialize ProximitySearcher", level = "info", skip_all)]
    pub fn new(store: Arc<dyn DonorStore>, registry: RegistryData) -> Self {
        info!(
            blood_banks = registry.blood_banks().len(),
            hospitals = registry.hospitals().len(),
            "ProximitySearcher ready"
        );
        Self { store, registry }
    }

    /// Create a searcher over the embedded sample dataset.
    ///
    /// Nothing is read from disk, so this cannot fail; it is the fastest
    /// way to get a working searcher for examples and tests.
    ///
    /// ```rust
    /// use lifeline::ProximitySearcher;
    ///
    /// let searcher = ProximitySearcher::new_embedded();
    /// assert!(searcher.info().blood_banks > 0);
    /// ```
    #[must_use]
    pub fn new_embedded() -> Self {
        Self::new(
            Arc::new(InMemoryDonorStore::embedded()),
            RegistryData::embedded(),
        )
    }

    /// Search around a point with the default configuration (50 km bound).
    ///
    /// ```rust
    /// use lifeline::{Organ, ProximitySearcher, QueryPoint, SearchFilter};
    ///
    /// let searcher = ProximitySearcher::new_embedded();
    /// let origin = QueryPoint::new(19.0760, 72.8777)?;
    /// let results = searcher.search(&origin, &SearchFilter::Organ(Organ::Kidney))?;
    /// # Ok::<(), lifeline::LifelineError>(())
    /// ```
    pub fn search(&self, origin: &QueryPoint, filter: &SearchFilter) -> Result<SearchResults> {
        self.search_with_config(origin, filter, &SearchConfig::default())
    }

    /// Search around a point with a custom configuration.
    ///
    /// ```rust
    /// use lifeline::{
    ///     BloodGroup, ProximitySearcher, QueryPoint, SearchConfigBuilder, SearchFilter,
    /// };
    ///
    /// let searcher = ProximitySearcher::new_embedded();
    /// let origin = QueryPoint::new(19.0760, 72.8777)?;
    /// let config = SearchConfigBuilder::wide().build();
    /// let results = searcher.search_with_config(
    ///     &origin,
    ///     &SearchFilter::BloodType(BloodGroup::ONegative),
    ///     &config,
    /// )?;
    /// # Ok::<(), lifeline::LifelineError>(())
    /// ```
    #[instrument(name = "Proximity Search", level = "info", skip(self))]
    pub fn search_with_config(
        &self,
        origin: &QueryPoint,
        filter: &SearchFilter,
        config: &SearchConfig,
    ) -> Result<SearchResults> {
        combined_search_inner(
            self.store.as_ref(),
            &self.registry,
            origin,
            Some(filter),
            config,
        )
        .map_err(From::from)
    }

    /// The wire-shaped search operation: raw query parameters in, ranked
    /// candidates out.
    ///
    /// All four parameters are required; missing ones fail with an
    /// invalid-query error before any I/O. A well-formed filter kind whose
    /// value is outside the known labels returns an empty list, since no
    /// candidate can match it.
    ///
    /// ```rust
    /// use lifeline::ProximitySearcher;
    ///
    /// let searcher = ProximitySearcher::new_embedded();
    /// let results =
    ///     searcher.search_query(Some("19.076"), Some("72.8777"), Some("blood"), Some("O+"))?;
    /// assert!(!results.is_empty());
    /// # Ok::<(), lifeline::LifelineError>(())
    /// ```
    #[instrument(name = "Proximity Search Query", level = "info", skip(self))]
    pub fn search_query(
        &self,
        lat: Option<&str>,
        lng: Option<&str>,
        kind: Option<&str>,
        value: Option<&str>,
    ) -> Result<SearchResults> {
        let (Some(lat), Some(lng), Some(kind), Some(value)) = (lat, lng, kind, value) else {
            return Err(
                SearchError::InvalidQuery("coordinates and filter required".to_owned()).into(),
            );
        };

        let origin = QueryPoint::parse(lat, lng)?;
        let Some(filter) = SearchFilter::parse(kind, value)? else {
            debug!(kind, value, "Filter value outside known labels; no matches possible");
            return Ok(Vec::new());
        };

        self.search(&origin, &filter)
    }

    /// Donors registered under an exact area label (no distance involved).
    pub fn directory_search(
        &self,
        area: &str,
        filter: Option<&SearchFilter>,
    ) -> Result<Vec<DonorRecord>> {
        self.store.find_in_area(area, filter).map_err(From::from)
    }

    /// Get information about the searcher's data sources.
    #[must_use]
    pub fn info(&self) -> SearcherInfo {
        SearcherInfo {
            blood_banks: self.registry.blood_banks().len(),
            hospitals: self.registry.hospitals().len(),
        }
    }

    /// Access the loaded registries for advanced operations.
    #[must_use]
    pub fn registry(&self) -> &RegistryData {
        &self.registry
    }
}

impl From<(Arc<dyn DonorStore>, RegistryData)> for ProximitySearcher {
    fn from((store, registry): (Arc<dyn DonorStore>, RegistryData)) -> Self {
        Self::new(store, registry)
    }
}

/// Information about a [`ProximitySearcher`]'s data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearcherInfo {
    pub blood_banks: usize,
    pub hospitals: usize,
}

impl SearcherInfo {
    /// Get a human-readable summary of the searcher.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "ProximitySearcher over {} blood banks and {} hospitals",
            self.blood_banks, self.hospitals
        )
    }
}

/// Builder for creating a [`ProximitySearcher`] with custom data sources.
///
/// ```rust
/// use lifeline::ProximitySearcherBuilder;
///
/// let searcher = ProximitySearcherBuilder::new().build()?;
/// # Ok::<(), lifeline::LifelineError>(())
/// ```
#[derive(Debug, Default)]
pub struct ProximitySearcherBuilder {
    store: Option<Arc<dyn DonorStore>>,
    registry: Option<RegistryData>,
    registry_paths: Option<(PathBuf, PathBuf)>,
}

impl ProximitySearcherBuilder {
    /// Create a new builder. With no further configuration, `build` falls
    /// back to the embedded dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific donor store.
    #[must_use]
    pub fn donor_store(mut self, store: impl DonorStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Use already-loaded registries.
    #[must_use]
    pub fn registry(mut self, registry: RegistryData) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Load registries from files at build time.
    ///
    /// A source that fails to load is logged and degraded to an empty
    /// collection; later searches see no candidates from it rather than
    /// per-request errors.
    #[must_use]
    pub fn registry_paths(
        mut self,
        blood_bank_path: impl AsRef<Path>,
        hospital_path: impl AsRef<Path>,
    ) -> Self {
        self.registry_paths = Some((
            blood_bank_path.as_ref().to_path_buf(),
            hospital_path.as_ref().to_path_buf(),
        ));
        self
    }

    /// Build the `ProximitySearcher`.
    pub fn build(self) -> Result<ProximitySearcher> {
        if self.registry.is_some() && self.registry_paths.is_some() {
            return Err(LifelineError::ConfigError(
                "registry and registry_paths are mutually exclusive".to_owned(),
            ));
        }

        let registry = if let Some(registry) = self.registry {
            registry
        } else if let Some((banks, hospitals)) = self.registry_paths {
            RegistryData::load_or_empty(banks, hospitals)
        } else {
            RegistryData::embedded()
        };

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryDonorStore::embedded()));

        Ok(ProximitySearcher::new(store, registry))
    }
}

#[cfg(test)]
mod tests {
    use lifeline_registry::BloodGroup;

    use super::*;

    #[test]
    fn builder_defaults_to_embedded_data() {
        let searcher = ProximitySearcherBuilder::new().build().unwrap();
        let info = searcher.info();
        assert!(info.blood_banks > 0);
        assert!(info.hospitals > 0);
        assert!(info.summary().contains("blood banks"));
    }

    #[test]
    fn builder_rejects_conflicting_registry_sources() {
        let result = ProximitySearcherBuilder::new()
            .registry(RegistryData::embedded())
            .registry_paths("/a.json", "/b.json")
            .build();
        assert!(matches!(result, Err(LifelineError::ConfigError(_))));
    }

    #[test]
    fn builder_degrades_missing_registry_files_to_empty() {
        let searcher = ProximitySearcherBuilder::new()
            .donor_store(InMemoryDonorStore::default())
            .registry_paths("/missing/banks.json", "/missing/hospitals.json")
            .build()
            .unwrap();

        let info = searcher.info();
        assert_eq!(info.blood_banks, 0);
        assert_eq!(info.hospitals, 0);

        // Searches against empty sources succeed with an empty result.
        let origin = QueryPoint::new(19.076, 72.8777).unwrap();
        let filter = SearchFilter::BloodType(BloodGroup::OPositive);
        assert!(searcher.search(&origin, &filter).unwrap().is_empty());
    }

    #[test]
    fn search_query_requires_all_parameters() {
        let searcher = ProximitySearcher::new_embedded();

        let missing = searcher.search_query(Some("19.076"), None, Some("blood"), Some("O+"));
        let err = missing.unwrap_err();
        assert!(err.is_invalid_query());
        assert!(err.to_string().contains("coordinates and filter required"));
    }

    #[test]
    fn search_query_parses_coordinates_and_filter() {
        let searcher = ProximitySearcher::new_embedded();

        let results = searcher
            .search_query(Some("19.076"), Some("72.8777"), Some("blood"), Some("O+"))
            .unwrap();
        assert!(!results.is_empty());

        let bad_lat = searcher.search_query(Some("north"), Some("72.8"), Some("blood"), Some("O+"));
        assert!(bad_lat.unwrap_err().is_invalid_query());

        let bad_kind =
            searcher.search_query(Some("19.076"), Some("72.8777"), Some("tissue"), Some("O+"));
        assert!(bad_kind.unwrap_err().is_invalid_query());
    }
}
