use regex::Regex;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Distinct hex colour literals, kept sorted so output is reproducible
pub type ColorSet = BTreeSet<String>;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("hex colour pattern is valid"));

static STYLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("style").expect("static selector is valid"));

/// Collects every `#rrggbb` literal found in the page's `<style>` blocks
///
/// Matches are not checked for being used as colours; a hex-looking string
/// in a CSS comment is reported like any other.
pub fn extract_colors(html: &str) -> ColorSet {
    let doc = Html::parse_document(html);

    let mut colors = ColorSet::new();
    for style in doc.select(&STYLE) {
        let css = style.text().collect::<String>();
        colors.extend(HEX_COLOR.find_iter(&css).map(|m| m.as_str().to_string()));
    }

    ::log::debug!("Found {} distinct colours in embedded styles", colors.len());
    colors
}
