//! Configuration module for Office-Scout
//!
//! Every setting has a built-in default; an optional TOML file and CLI flags
//! override the pieces they name.
//!
//! # Example
//!
//! ```no_run
//! use office_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("office-scout.toml")).unwrap();
//! println!("Crawler will visit up to {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SearchConfig, DEFAULT_SEARCH_URL};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::validate;
