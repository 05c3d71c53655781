use std::path::PathBuf;
use std::time::Duration;

/// Origin every page path is resolved against
pub const BASE_URL: &str = "https://www.cheltladiescollege.org";

/// Default root directory for everything the scraper writes
pub const DEFAULT_OUTPUT_DIR: &str = "scraped-content";

/// Browser-like user agent sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

pub const ACCEPT_LANGUAGE: &str = "en-GB,en;q=0.5";

/// Per-request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Pause after every page fetch, successful or not
pub const PAGE_DELAY_MS: u64 = 1000;

/// Pause after every image download attempt
pub const IMAGE_DELAY_MS: u64 = 500;

/// Maximum number of discovered images that are downloaded
pub const MAX_IMAGES: usize = 50;

/// Pages scraped on every run, in order
pub const PAGE_PATHS: &[&str] = &[
    "/",
    "/welcome/principal",
    "/welcome/why-clc",
    "/welcome/purpose",
    "/welcome/our-history",
    "/welcome/strategy",
    "/welcome/future",
    "/welcome/leadership-at-college",
    "/apply/joining",
    "/apply/visits",
    "/apply/day",
    "/apply/uk-boarders",
    "/apply/international-boarders",
    "/apply/fees",
    "/apply/bursaries",
    "/apply/scholarships",
    "/learn/our-curriculum",
    "/learn/exam-results",
    "/learn/lower-college",
    "/learn/upper-college",
    "/learn/sixth-form-college",
    "/learn/sixthformcentre",
    "/learn/beyond-clc",
    "/learn/departments",
    "/learn/scholars",
    "/learn/the-school-week",
    "/learn/facilities-digital",
    "/learn/library",
    "/experience/clubs-and-societies",
    "/experience/the-arts",
    "/experience/sport-outdoor",
    "/experience/volunteering-fundraising",
    "/experience/weekends",
    "/life/pastoral-care",
    "/life/boarding",
    "/life/day-girls",
    "/life/medical-health",
    "/life/chaplaincy-and-worship",
    "/life/wellbeing-programme",
    "/life/nutrition",
    "/life/our-town",
    "/life/clc-voices",
    "/news/current-news",
    "/news/blogs",
    "/information/contact-us",
    "/information/visiting",
    "/information/term-dates",
    "/information/inspection",
];

/// Path whose embedded styles are scanned for brand colours
pub const COLOUR_SOURCE_PATH: &str = "/";

/// Settings for a single scrape run
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Origin the page paths are joined onto
    pub base_url: String,

    /// Root of the output tree
    pub output_dir: PathBuf,

    /// Relative page paths to fetch
    pub paths: Vec<String>,

    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,

    /// Timeout applied to each request
    pub request_timeout: Duration,

    /// Politeness delay between page fetches
    pub page_delay: Duration,

    /// Politeness delay between image downloads
    pub image_delay: Duration,

    /// Cap on the number of images downloaded
    pub max_images: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            paths: PAGE_PATHS.iter().map(|p| p.to_string()).collect(),
            user_agent: USER_AGENT.to_string(),
            accept: ACCEPT.to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            page_delay: Duration::from_millis(PAGE_DELAY_MS),
            image_delay: Duration::from_millis(IMAGE_DELAY_MS),
            max_images: MAX_IMAGES,
        }
    }
}

impl ScrapeConfig {
    /// Create the default configuration writing under `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}
