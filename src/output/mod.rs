//! Output module for ranking, report rendering, and persistence
//!
//! The report is a flat text file: one listing per line, fields
//! `price_per_sqft,rent,space,link`, sorted ascending by price per square
//! foot. No header row, no trailing metadata.

use crate::crawler::{CrawlResult, Listing, RunStatus};
use crate::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Renders the ranked report for a set of listings
///
/// The sort is stable: listings with equal price per square foot keep their
/// arrival order.
pub fn render_report(listings: &[Listing]) -> String {
    let mut ranked: Vec<&Listing> = listings.iter().collect();
    ranked.sort_by(|a, b| a.price_per_sqft.total_cmp(&b.price_per_sqft));

    ranked
        .iter()
        .map(|listing| format_line(listing))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats one listing as a report line
fn format_line(listing: &Listing) -> String {
    format!(
        "{:.2},{:.2},{},{}",
        listing.price_per_sqft, listing.rent, listing.space, listing.link
    )
}

/// Writes the ranked report to the given path
///
/// # Arguments
///
/// * `listings` - The listings to rank and render
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(ScoutError)` - Failed to create or write the file
pub fn write_report(listings: &[Listing], path: &Path) -> Result<()> {
    let report = render_report(listings);

    let mut file = File::create(path)?;
    file.write_all(report.as_bytes())?;

    Ok(())
}

/// Prints a human-readable summary of a finished run
pub fn print_summary(result: &CrawlResult) {
    println!("==============================");
    println!("Pages completed: {}", result.pages_completed);
    println!("Pages failed:    {}", result.pages_failed);
    println!("Listings found:  {}", result.listings.len());
    if result.status == RunStatus::TimedOut {
        println!("(run truncated by the crawl deadline)");
    }
    println!("==============================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn listing(rent: f64, space: u32, link: &str) -> Listing {
        Listing::new(rent, space, link.to_string()).unwrap()
    }

    #[test]
    fn test_report_is_sorted_ascending_by_price_per_sqft() {
        let listings = vec![
            listing(3000.0, 1000, "/a"),
            listing(1000.0, 1000, "/b"),
            listing(2000.0, 1000, "/c"),
        ];

        let report = render_report(&listings);

        assert_eq!(
            report,
            "1.00,1000.00,1000,/b\n2.00,2000.00,1000,/c\n3.00,3000.00,1000,/a"
        );
    }

    #[test]
    fn test_adjacent_lines_are_non_decreasing() {
        let listings = vec![
            listing(2500.0, 1000, "/a"),
            listing(900.0, 450, "/b"),
            listing(1800.0, 600, "/c"),
            listing(1200.0, 800, "/d"),
        ];

        let report = render_report(&listings);
        let keys: Vec<f64> = report
            .lines()
            .map(|line| line.split(',').next().unwrap().parse().unwrap())
            .collect();

        for pair in keys.windows(2) {
            assert!(pair[0] <= pair[1], "report not sorted: {:?}", keys);
        }
    }

    #[test]
    fn test_ties_keep_arrival_order() {
        let listings = vec![
            listing(2500.0, 1000, "/first"),
            listing(5000.0, 2000, "/second"),
            listing(1250.0, 500, "/third"),
        ];

        let report = render_report(&listings);

        assert_eq!(
            report,
            "2.50,2500.00,1000,/first\n2.50,5000.00,2000,/second\n2.50,1250.00,500,/third"
        );
    }

    #[test]
    fn test_line_format() {
        let report = render_report(&[listing(2500.0, 1000, "/listing/1")]);
        assert_eq!(report, "2.50,2500.00,1000,/listing/1");
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render_report(&[]), "");
    }

    #[test]
    fn test_write_report_persists_bytes() {
        let listings = vec![listing(2500.0, 1000, "/listing/1")];

        let file = NamedTempFile::new().unwrap();
        write_report(&listings, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "2.50,2500.00,1000,/listing/1");
    }
}
