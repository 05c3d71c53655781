use regex::Regex;
use std::sync::LazyLock;

/// Class attribute of elements that may hold the main page content
pub static CONTENT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)content|main").expect("content class pattern is valid"));

/// Class attribute of quote-like containers
pub static QUOTE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)quote|testimonial").expect("quote class pattern is valid")
});

/// Configuration for filtering image sources
#[derive(Debug, Clone)]
pub struct ImageFilterConfig {
    /// Regex patterns for sources to drop
    pub exclude_patterns: Vec<String>,
}

impl Default for ImageFilterConfig {
    fn default() -> Self {
        Self {
            // Icons and logos are decorative, not prospectus material
            exclude_patterns: vec![r"(?i)icon".to_string(), r"(?i)logo".to_string()],
        }
    }
}

/// Decides which image sources are kept by the content extractor
#[derive(Debug)]
pub struct ImageFilter {
    exclude_regexes: Vec<Regex>,
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new(ImageFilterConfig::default()).expect("Default regex patterns should be valid")
    }
}

impl ImageFilter {
    /// Create a new image filter from configuration
    pub fn new(config: ImageFilterConfig) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self { exclude_regexes })
    }

    /// Whether an image with this raw source attribute should be kept
    pub fn should_keep(&self, src: &str) -> bool {
        !self.exclude_regexes.iter().any(|regex| regex.is_match(src))
    }
}
