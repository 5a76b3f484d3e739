//! Basic proximity search functionality
//!
//! This example demonstrates the fundamental search operations:
//! - Creating a searcher instance using embedded data
//! - Searching for blood and organ candidates around a point
//! - Working with ranked results

use lifeline::{BloodGroup, Organ, ProximitySearcher, QueryPoint, SearchFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create searcher instance using embedded data (no external files needed)
    let searcher = ProximitySearcher::new_embedded();

    // Search for O+ blood around central Mumbai
    let origin = QueryPoint::new(19.0760, 72.8777)?;

    println!("Searching for O+ blood near ({}, {}):", origin.lat, origin.lng);
    let results = searcher.search(&origin, &SearchFilter::BloodType(BloodGroup::OPositive))?;
    print_candidates(&results, 5);

    // Organ searches never return blood banks; only hospitals and donors
    // can stock or pledge organs
    println!("\nSearching for kidney donors and hospitals:");
    let results = searcher.search(&origin, &SearchFilter::Organ(Organ::Kidney))?;
    print_candidates(&results, 5);

    // The wire-shaped entry point accepts raw query parameters
    println!("\nWire-shaped query (blood, AB+):");
    let results =
        searcher.search_query(Some("19.076"), Some("72.8777"), Some("blood"), Some("AB+"))?;
    print_candidates(&results, 5);

    Ok(())
}

fn print_candidates(results: &[lifeline::Candidate], limit: usize) {
    for (i, candidate) in results.iter().take(limit).enumerate() {
        let kind = if candidate.is_blood_bank() {
            "Blood bank"
        } else if candidate.is_hospital() {
            "Hospital"
        } else {
            "Donor"
        };

        println!(
            "  {}. {} ({}) - {:.1} km",
            i + 1,
            candidate.name(),
            kind,
            candidate.distance() / 1000.0
        );
    }

    if results.is_empty() {
        println!("  (no candidates in range)");
    } else if results.len() > limit {
        println!("  ... and {} more candidates", results.len() - limit);
    }
}
