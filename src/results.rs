use serde::{Deserialize, Serialize};

/// Everything extracted from one successfully fetched page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// Relative path the page was requested with
    pub url: String,

    /// Absolute URL the path resolved to
    pub full_url: String,

    /// Title of the page (empty when the document has none)
    pub title: String,

    /// h1-h3 headings in document order
    pub headings: Vec<Heading>,

    /// Text of the main-content element, one text run per line
    pub text: String,

    /// Non-decorative images in document order
    pub images: Vec<ImageRef>,

    /// Quotes and testimonials
    pub quotes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Map an element name to a heading level
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
}

/// An image reference found on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Absolute source URL
    pub src: String,

    /// Alt text, empty when missing
    pub alt: String,

    /// CSS class names
    #[serde(rename = "class")]
    pub classes: Vec<String>,
}
