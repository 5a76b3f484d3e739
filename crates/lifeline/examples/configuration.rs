//! Search configuration
//!
//! This example demonstrates how the radius bound shapes a search:
//! - The default 50 km bound for everyday "near me" searches
//! - The 250 km wide bound for rare blood groups and organ matching
//! - Custom radii through the builder

use lifeline::{
    BloodGroup, ProximitySearcher, QueryPoint, SearchConfigBuilder, SearchFilter,
    DEFAULT_SEARCH_RADIUS_METERS, WIDE_SEARCH_RADIUS_METERS,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let searcher = ProximitySearcher::new_embedded();
    let origin = QueryPoint::new(19.0760, 72.8777)?;
    let filter = SearchFilter::BloodType(BloodGroup::ONegative);

    // Default configuration: 50 km
    let nearby = SearchConfigBuilder::nearby().build();
    assert_eq!(nearby.radius_meters, DEFAULT_SEARCH_RADIUS_METERS);
    let results = searcher.search_with_config(&origin, &filter, &nearby)?;
    println!("O- within 50 km: {} candidates", results.len());

    // Wide configuration: 250 km, for when the nearby sweep comes up dry
    let wide = SearchConfigBuilder::wide().build();
    assert_eq!(wide.radius_meters, WIDE_SEARCH_RADIUS_METERS);
    let results = searcher.search_with_config(&origin, &filter, &wide)?;
    println!("O- within 250 km: {} candidates", results.len());

    // Custom radius in kilometers; the builder rejects nonsense values
    let custom = SearchConfigBuilder::new().radius_km(10.0)?.build();
    let results = searcher.search_with_config(&origin, &filter, &custom)?;
    println!("O- within 10 km: {} candidates", results.len());

    assert!(SearchConfigBuilder::new().radius_meters(-1.0).is_err());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = lifeline::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_configuration_example() {
        setup_test_env();
        assert!(
            main().is_ok(),
            "Configuration example should run successfully"
        );
    }
}
