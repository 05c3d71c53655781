//! Scrapes a fixed list of pages from the college website into text, HTML
//! and JSON files for the personalised prospectus.

pub mod config;
pub mod error;
pub mod fetchers;
pub mod filter;
pub mod images;
pub mod output;
pub mod parsers;
pub mod results;
pub mod scrape;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScrapeConfig;
pub use error::{FetchError, ScrapeError};
pub use fetchers::{Fetcher, HttpFetcher};
pub use results::PageResult;
pub use scrape::{ScrapeReport, Scraper};
