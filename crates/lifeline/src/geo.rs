//! Great-circle distance on a spherical Earth.
//!
//! Distances are computed with the haversine formula against a sphere of
//! radius [`EARTH_RADIUS_METERS`]. The formula is kept in this exact form
//! so results stay numerically compatible with the registry tooling that
//! produced the stored datasets.

use crate::search::SearchError;

/// Mean Earth radius in meters used for all distance computation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two `(lat, lon)` pairs given in
/// degrees.
///
/// Inputs must be finite and inside geographic range; callers filter
/// malformed coordinates out before ever reaching this function. Identical
/// points yield exactly `0.0`.
#[must_use]
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// The caller-supplied center of one proximity search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPoint {
    pub lat: f64,
    pub lng: f64,
}

impl QueryPoint {
    /// Build a query point, rejecting non-finite or out-of-range
    /// coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self, SearchError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(SearchError::InvalidQuery(format!(
                "latitude out of range: {lat}"
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(SearchError::InvalidQuery(format!(
                "longitude out of range: {lng}"
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Parse the wire form: two numeric strings, latitude then longitude.
    pub fn parse(lat: &str, lng: &str) -> Result<Self, SearchError> {
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| SearchError::InvalidQuery(format!("latitude is not a number: {lat:?}")))?;
        let lng: f64 = lng.trim().parse().map_err(|_| {
            SearchError::InvalidQuery(format!("longitude is not a number: {lng:?}"))
        })?;
        Self::new(lat, lng)
    }

    /// Distance in meters from this point to a `(longitude, latitude)`
    /// position, the order registry records store coordinates in.
    #[must_use]
    pub fn distance_to(&self, lng: f64, lat: f64) -> f64 {
        haversine_meters(self.lat, self.lng, lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUMBAI: (f64, f64) = (19.0760, 72.8777);
    const PUNE: (f64, f64) = (18.5204, 73.8567);
    const DELHI: (f64, f64) = (28.6139, 77.2090);

    #[test]
    fn identical_points_are_exactly_zero() {
        assert_eq!(haversine_meters(MUMBAI.0, MUMBAI.1, MUMBAI.0, MUMBAI.1), 0.0);
        assert_eq!(haversine_meters(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [(MUMBAI, PUNE), (MUMBAI, DELHI), (PUNE, DELHI)];
        for (a, b) in pairs {
            let forward = haversine_meters(a.0, a.1, b.0, b.1);
            let backward = haversine_meters(b.0, b.1, a.0, a.1);
            assert!((forward - backward).abs() < 1e-9);
        }
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let distance = haversine_meters(0.0, 0.0, 0.0, 1.0);
        assert!(
            (distance - 111_195.0).abs() < 50.0,
            "expected ~111195 m, got {distance}"
        );
    }

    #[test]
    fn antipodal_points_are_half_the_circumference() {
        let distance = haversine_meters(0.0, 0.0, 0.0, 180.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_METERS;
        assert!((distance - half_circumference).abs() < 1.0);
    }

    #[test]
    fn triangle_inequality_holds_within_tolerance() {
        let direct = haversine_meters(MUMBAI.0, MUMBAI.1, DELHI.0, DELHI.1);
        let via_pune = haversine_meters(MUMBAI.0, MUMBAI.1, PUNE.0, PUNE.1)
            + haversine_meters(PUNE.0, PUNE.1, DELHI.0, DELHI.1);
        // Spherical model: allow a sliver of numeric slack.
        assert!(direct <= via_pune + 1.0);
    }

    #[test]
    fn query_point_rejects_out_of_range_coordinates() {
        assert!(QueryPoint::new(91.0, 0.0).is_err());
        assert!(QueryPoint::new(0.0, -181.0).is_err());
        assert!(QueryPoint::new(f64::NAN, 0.0).is_err());
        assert!(QueryPoint::new(19.0760, 72.8777).is_ok());
    }

    #[test]
    fn query_point_parses_numeric_strings() {
        let point = QueryPoint::parse("19.076", "72.8777").unwrap();
        assert_eq!(point.lat, 19.076);
        assert_eq!(point.lng, 72.8777);

        assert!(QueryPoint::parse("", "72.8").is_err());
        assert!(QueryPoint::parse("north", "72.8").is_err());
    }

    #[test]
    fn distance_to_takes_lng_lat_order() {
        let origin = QueryPoint::new(MUMBAI.0, MUMBAI.1).unwrap();
        // Same point expressed as a registry (lng, lat) position.
        assert_eq!(origin.distance_to(MUMBAI.1, MUMBAI.0), 0.0);
    }
}
