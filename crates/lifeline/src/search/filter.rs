use std::fmt;

use lifeline_registry::{BloodGroup, DonorRecord, Organ};

use super::SearchError;

/// What a search is looking for: a blood type or an organ.
///
/// The variant decides which inventory a candidate is checked against, so
/// "organ availability at a blood bank" — which keeps no organ inventory —
/// is not a case anyone has to branch on at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFilter {
    BloodType(BloodGroup),
    Organ(Organ),
}

impl SearchFilter {
    /// Parse the wire form: a filter kind (`"blood"` or `"organ"`) and a
    /// label value.
    ///
    /// An unknown kind is a caller error. A known kind with a label
    /// outside the closed enums (blood `"Z+"`) is *not* an error: it
    /// returns `Ok(None)`, and the caller resolves that to an empty
    /// result, since no candidate can ever match such a label.
    pub fn parse(kind: &str, value: &str) -> Result<Option<Self>, SearchError> {
        match kind {
            "blood" => Ok(value.parse().ok().map(Self::BloodType)),
            "organ" => Ok(value.parse().ok().map(Self::Organ)),
            other => Err(SearchError::InvalidQuery(format!(
                "unknown filter type {other:?} (expected \"blood\" or \"organ\")"
            ))),
        }
    }

    /// Whether a donor satisfies this filter: exact blood-group match, or
    /// membership in the donor's organ pledges.
    #[must_use]
    pub fn matches_donor(&self, donor: &DonorRecord) -> bool {
        match *self {
            Self::BloodType(group) => donor.blood_group == group,
            Self::Organ(organ) => donor.donates_organ(organ),
        }
    }

    /// The label this filter is searching for.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match *self {
            Self::BloodType(group) => group.as_str(),
            Self::Organ(organ) => organ.as_str(),
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BloodType(group) => write!(f, "blood={group}"),
            Self::Organ(organ) => write!(f, "organ={organ}"),
        }
    }
}
