//! Custom data sources
//!
//! This example demonstrates wiring the searcher to your own data instead
//! of the embedded sample set:
//! - Building a registry from in-memory records
//! - Supplying a custom donor store
//! - Loading registries from files with the fail-open policy

use std::sync::Arc;

use lifeline::{
    BloodBankRecord, BloodGroup, DonorRecord, GeoJsonPoint, InMemoryDonorStore, Organ,
    ProximitySearcher, ProximitySearcherBuilder, QueryPoint, RegistryData, SearchFilter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A registry built from in-memory records, as a test fixture would be
    let registry = RegistryData::from_records(
        vec![BloodBankRecord {
            name: "Example Blood Bank".to_owned(),
            address: Some("1 Example Road".to_owned()),
            phone: None,
            location_coords: GeoJsonPoint::new(72.8777, 19.0760),
            blood_inventory: [(BloodGroup::BPositive, 7)].into_iter().collect(),
        }],
        vec![],
    );

    let store = InMemoryDonorStore::from_records(vec![DonorRecord {
        name: "Example Donor".to_owned(),
        email: "donor@example.com".to_owned(),
        phone: "+91-90000-00001".to_owned(),
        location: "Fort".to_owned(),
        blood_group: BloodGroup::BPositive,
        organs: vec![Organ::Eyes],
        location_coords: GeoJsonPoint::new(72.88, 19.08),
        registered_at: None,
    }]);

    let searcher = ProximitySearcher::new(Arc::new(store), registry);

    let origin = QueryPoint::new(19.0760, 72.8777)?;
    let results = searcher.search(&origin, &SearchFilter::BloodType(BloodGroup::BPositive))?;
    for candidate in &results {
        println!("{} - {:.2} km", candidate.name(), candidate.distance() / 1000.0);
    }

    // File-backed registries degrade to empty when a source is missing,
    // so a bad deployment still serves (organization-free) searches
    let searcher = ProximitySearcherBuilder::new()
        .donor_store(InMemoryDonorStore::embedded())
        .registry_paths("data/bloodbanks.json", "data/hospitals.json")
        .build()?;
    println!("{}", searcher.info().summary());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = lifeline::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_custom_registry_example() {
        setup_test_env();
        assert!(
            main().is_ok(),
            "Custom registry example should run successfully"
        );
    }
}
