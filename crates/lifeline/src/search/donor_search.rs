use tracing::{debug, instrument};

use super::{Candidate, Result, SearchFilter};
use crate::{geo::QueryPoint, store::DonorStore};

/// Query the donor store and annotate each hit with its distance from the
/// query point.
///
/// The store already enforces the radius bound and the filter; this stage
/// recomputes distance from the stored coordinates so every candidate
/// category carries the same haversine figure. A store failure propagates
/// as-is: the search as a whole fails rather than returning a result list
/// that is silently missing its donor block.
#[instrument(name = "Donor Search", level = "debug", skip(store))]
pub(crate) fn donor_search_inner(
    store: &dyn DonorStore,
    origin: &QueryPoint,
    radius_meters: f64,
    filter: Option<&SearchFilter>,
) -> Result<Vec<Candidate>> {
    let records = store.near(origin, radius_meters, filter)?;

    let candidates: Vec<Candidate> = records
        .into_iter()
        .filter_map(|record| {
            let (lng, lat) = record.location_coords.position()?;
            Some(Candidate::Donor {
                distance: origin.distance_to(lng, lat),
                record,
            })
        })
        .collect();

    debug!(candidates = candidates.len(), "Donor search complete");
    Ok(candidates)
}
