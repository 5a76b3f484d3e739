//! Fan-out over the three candidate sources and final ranking.
//!
//! The loaders are independent and read-only, so they run in parallel
//! with no coordination beyond the join itself. Failure policy: the donor
//! store fails the whole search (fail-closed); the organization
//! registries cannot fail here — a source that failed to load at startup
//! is already an empty collection.

use tracing::{debug, instrument};

use lifeline_registry::RegistryData;

use super::{
    Candidate, Result, SearchFilter, blood_bank_search_inner, donor_search_inner,
    hospital_search_inner, merge_and_rank,
};
use crate::{config::SearchConfig, geo::QueryPoint, store::DonorStore};

#[instrument(name = "Combined Search", level = "debug", skip(store, registry))]
pub(crate) fn combined_search_inner(
    store: &dyn DonorStore,
    registry: &RegistryData,
    origin: &QueryPoint,
    filter: Option<&SearchFilter>,
    config: &SearchConfig,
) -> Result<Vec<Candidate>> {
    let radius_meters = config.radius_meters;

    let (donors, (blood_banks, hospitals)) = rayon::join(
        || donor_search_inner(store, origin, radius_meters, filter),
        || {
            rayon::join(
                || blood_bank_search_inner(origin, radius_meters, filter, registry.blood_banks()),
                || hospital_search_inner(origin, radius_meters, filter, registry.hospitals()),
            )
        },
    );
    let donors = donors?;

    debug!(
        blood_banks = blood_banks.len(),
        hospitals = hospitals.len(),
        donors = donors.len(),
        "Merging candidate sets"
    );

    Ok(merge_and_rank(blood_banks, hospitals, donors))
}
