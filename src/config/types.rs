use serde::Deserialize;

/// Default search endpoint: Manhattan office/commercial listings
pub const DEFAULT_SEARCH_URL: &str = "https://newyork.craigslist.org/search/mnh/off?availabilityMode=0&nh=120&nh=121&nh=122&nh=123&nh=124&nh=125&nh=126&nh=127&nh=128&nh=129&nh=130&nh=131&nh=132&nh=133&nh=134&nh=135&nh=136&nh=137&nh=160";

/// Main configuration structure for Office-Scout
///
/// Every field has a built-in default, so a run needs no config file at all;
/// a TOML file and CLI flags only override the pieces they name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub crawler: CrawlerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Search criteria and endpoint configuration
///
/// Immutable for the lifetime of a crawl run.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Base search URL that page offsets and filter parameters are appended to
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Exclude office space below this monthly rent
    #[serde(rename = "min-rent", default = "default_min_rent")]
    pub min_rent: u32,

    /// Exclude office space below this square footage
    #[serde(rename = "min-space", default = "default_min_space")]
    pub min_space: u32,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of listings per result page (the offset multiplier)
    #[serde(rename = "page-size", default = "default_page_size")]
    pub page_size: u32,

    /// Upper bound on result pages visited in one run
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,

    /// Maximum number of page fetches in flight at once
    #[serde(rename = "max-concurrent-fetches", default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// Wall-clock budget for the whole crawl, in milliseconds
    #[serde(rename = "timeout-ms", default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path the ranked report is written to
    #[serde(rename = "report-path", default = "default_report_path")]
    pub report_path: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            min_rent: default_min_rent(),
            min_space: default_min_space(),
        }
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_pages: default_max_pages(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: default_report_path(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_min_rent() -> u32 {
    1000
}

fn default_min_space() -> u32 {
    500
}

fn default_page_size() -> u32 {
    100
}

fn default_max_pages() -> u32 {
    100
}

fn default_max_concurrent_fetches() -> usize {
    4
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_report_path() -> String {
    "output.txt".to_string()
}
