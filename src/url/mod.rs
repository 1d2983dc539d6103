//! URL handling module for Office-Scout
//!
//! Builds the deterministic, capped sequence of search-result page URLs for a
//! crawl run. Page construction is a pure function of the configuration and
//! the page index: no side effects, no network access, fully replayable.

use crate::{Config, ConfigError, Result};
use url::Url;

/// Builds the URL for a single result page
///
/// The `s` query parameter carries the result offset, `index * page_size`.
/// Offsets are dense and zero-based, so index 0 addresses the first result
/// page. Identical inputs always produce byte-identical URLs.
pub fn page_url(base: &Url, min_rent: u32, min_space: u32, page_size: u32, index: u32) -> Url {
    let mut url = base.clone();

    url.query_pairs_mut()
        .append_pair("s", &(index * page_size).to_string())
        .append_pair("min_price", &min_rent.to_string())
        .append_pair("minSqft", &min_space.to_string());

    url
}

/// Materializes the page sequence for a crawl run
///
/// The sequence is finite by construction: indices `0..max_pages`. The cap
/// gives the coordinator a well-defined "ran to completion" state distinct
/// from "timed out".
pub fn page_urls(config: &Config) -> Result<Vec<Url>> {
    let base = Url::parse(&config.search.base_url).map_err(|e| {
        ConfigError::InvalidUrl(format!(
            "Invalid base-url '{}': {}",
            config.search.base_url, e
        ))
    })?;

    Ok((0..config.crawler.max_pages)
        .map(|index| {
            page_url(
                &base,
                config.search.min_rent,
                config.search.min_space,
                config.crawler.page_size,
                index,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/search/off?availabilityMode=0").unwrap()
    }

    fn test_config() -> Config {
        let mut config = Config::default();
        config.search.base_url = "https://example.com/search/off?availabilityMode=0".to_string();
        config.search.min_rent = 1000;
        config.search.min_space = 500;
        config.crawler.page_size = 100;
        config.crawler.max_pages = 5;
        config
    }

    #[test]
    fn test_page_url_is_deterministic() {
        let first = page_url(&base(), 1000, 500, 100, 7);
        let second = page_url(&base(), 1000, 500, 100, 7);

        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_page_url_encodes_offset_and_criteria() {
        let url = page_url(&base(), 1000, 500, 100, 3);

        assert_eq!(
            url.as_str(),
            "https://example.com/search/off?availabilityMode=0&s=300&min_price=1000&minSqft=500"
        );
    }

    #[test]
    fn test_first_page_has_zero_offset() {
        let url = page_url(&base(), 1000, 500, 100, 0);

        assert!(url.query().unwrap().contains("s=0"));
    }

    #[test]
    fn test_offsets_are_dense_and_increasing() {
        let urls = page_urls(&test_config()).unwrap();

        for (index, url) in urls.iter().enumerate() {
            let expected = format!("s={}", index * 100);
            assert!(
                url.query().unwrap().contains(&expected),
                "page {} missing offset {}",
                index,
                expected
            );
        }
    }

    #[test]
    fn test_sequence_is_capped_at_max_pages() {
        let urls = page_urls(&test_config()).unwrap();
        assert_eq!(urls.len(), 5);
    }

    #[test]
    fn test_sequence_is_replayable() {
        let config = test_config();

        let first = page_urls(&config).unwrap();
        let second = page_urls(&config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unparseable_base_url_is_a_config_error() {
        let mut config = test_config();
        config.search.base_url = "not a url".to_string();

        assert!(page_urls(&config).is_err());
    }
}
