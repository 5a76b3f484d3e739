//! Combined proximity search: candidate loading, filtering, and ranking.
//!
//! One search fans out over three independent candidate sources — the
//! donor store and the two organization registries — then merges the
//! results into a single ranked list: blood banks first, hospitals next,
//! individual donors last, nearest first within each block.

pub use error::SearchError;
mod candidate;
mod donor_search;
mod filter;
mod org_search;
mod ranking;
mod search_orchestration;

pub use candidate::Candidate;
pub(crate) use donor_search::donor_search_inner;
use error::Result;
pub use filter::SearchFilter;
pub(crate) use org_search::{blood_bank_search_inner, hospital_search_inner};
pub(crate) use ranking::merge_and_rank;
pub(crate) use search_orchestration::combined_search_inner;

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SearchError {
        #[error("invalid query: {0}")]
        InvalidQuery(String),
        #[error("donor store error: {0}")]
        Store(#[from] crate::store::StoreError),
        #[error(transparent)]
        Other(#[from] anyhow::Error),
    }
    pub type Result<T> = std::result::Result<T, SearchError>;
}
