use crate::error::{Result, ScrapeError};
use crate::results::PageResult;
use crate::utils::slug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const PAGES_DIR: &str = "pages";
pub const CONTENT_DIR: &str = "content";
pub const IMAGES_DIR: &str = "images";

pub const ALL_CONTENT_FILE: &str = "all_content.json";
pub const IMAGE_LIST_FILE: &str = "image_list.json";
pub const BRAND_COLOURS_FILE: &str = "brand_colours.json";

/// The output tree of a scrape run
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Create the root directory and its `pages/`, `content/` and `images/`
    /// subdirectories
    pub fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let out = Self { root: root.into() };
        for dir in [
            out.root.clone(),
            out.pages_dir(),
            out.content_dir(),
            out.images_dir(),
        ] {
            fs::create_dir_all(&dir).map_err(|e| ScrapeError::io(&dir, e))?;
        }
        Ok(out)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_DIR)
    }

    pub fn content_dir(&self) -> PathBuf {
        self.root.join(CONTENT_DIR)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    /// Write the raw markup to `pages/<slug>.html`
    pub fn write_page_html(&self, path: &str, html: &str) -> Result<PathBuf> {
        let file = self.pages_dir().join(format!("{}.html", slug(path)));
        write(&file, html)?;
        Ok(file)
    }

    /// Write the plain-text rendition to `content/<slug>.txt`
    pub fn write_page_text(&self, page: &PageResult) -> Result<PathBuf> {
        let file = self.content_dir().join(format!("{}.txt", slug(&page.url)));
        write(&file, &render_text(page))?;
        Ok(file)
    }

    /// Pretty-print `value` as JSON to `name` under the root
    pub fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<PathBuf> {
        let file = self.root.join(name);
        let json = serde_json::to_string_pretty(value)?;
        write(&file, &json)?;
        Ok(file)
    }
}

/// Header block with URL and title, a separator line, then the body text
pub fn render_text(page: &PageResult) -> String {
    format!(
        "URL: {}\nTitle: {}\n{}\n\n{}",
        page.full_url,
        page.title,
        "=".repeat(50),
        page.text
    )
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ScrapeError::io(path, e))
}
