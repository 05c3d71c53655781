use crate::filter::{CONTENT_CLASS, ImageFilter, QUOTE_CLASS};
use crate::parsers::text;
use crate::results::{Heading, HeadingLevel, ImageRef, PageResult};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static CHROME: LazyLock<Selector> =
    LazyLock::new(|| selector("script, style, nav, footer, noscript"));
static MAIN: LazyLock<Selector> = LazyLock::new(|| selector("main"));
static ARTICLE: LazyLock<Selector> = LazyLock::new(|| selector("article"));
static BODY: LazyLock<Selector> = LazyLock::new(|| selector("body"));
static HEADINGS: LazyLock<Selector> = LazyLock::new(|| selector("h1, h2, h3"));
static IMAGES: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static QUOTES: LazyLock<Selector> = LazyLock::new(|| selector("blockquote, q"));
static CLASSED: LazyLock<Selector> = LazyLock::new(|| selector("[class]"));

/// Attributes holding an image source, plain first, then lazy-load fallbacks
const IMAGE_SOURCE_ATTRS: [&str; 3] = ["src", "data-src", "data-lazy-src"];

/// One rule in the main-content search
#[derive(Clone, Copy)]
enum ContentCandidate {
    /// First element matching the selector
    Tag(&'static LazyLock<Selector>),
    /// First element whose class attribute mentions content or main
    ContentClass,
}

/// Main-content rules, highest priority first. The first rule with a match wins.
static MAIN_CONTENT_PRIORITY: [ContentCandidate; 4] = [
    ContentCandidate::Tag(&MAIN),
    ContentCandidate::Tag(&ARTICLE),
    ContentCandidate::ContentClass,
    ContentCandidate::Tag(&BODY),
];

impl ContentCandidate {
    fn find<'a>(&self, root: ElementRef<'a>) -> Option<ElementRef<'a>> {
        match self {
            ContentCandidate::Tag(selector) => root.select(*selector).next(),
            ContentCandidate::ContentClass => root
                .select(&CLASSED)
                .find(|e| class_matches(e, &CONTENT_CLASS)),
        }
    }
}

fn class_matches(element: &ElementRef<'_>, pattern: &regex::Regex) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|class| pattern.is_match(class))
}

/// Extracts a [`PageResult`] from raw page markup
///
/// Parsing is best effort: malformed markup never fails, missing elements
/// just leave their fields empty.
#[derive(Debug)]
pub struct ContentExtractor {
    base_url: Url,
    image_filter: ImageFilter,
}

impl ContentExtractor {
    /// Create an extractor resolving image sources against `base_url`
    pub fn new(base_url: Url) -> Self {
        Self::with_filter(base_url, ImageFilter::default())
    }

    pub fn with_filter(base_url: Url, image_filter: ImageFilter) -> Self {
        Self {
            base_url,
            image_filter,
        }
    }

    /// Extract everything from the page fetched for `path` at `page_url`
    pub fn extract(&self, html: &str, path: &str, page_url: &Url) -> PageResult {
        let mut doc = Html::parse_document(html);

        let title = doc
            .select(&TITLE)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        strip_chrome(&mut doc);

        // Detached chrome stays in the node arena, so everything below walks
        // down from the root element instead of using `Html::select`
        let root = doc.root_element();

        let text = select_main_content(root)
            .map(|main| text::join_lines(main.text()))
            .unwrap_or_default();

        let headings = extract_headings(root);
        let images = self.extract_images(root);
        let quotes = extract_quotes(root);

        ::log::debug!(
            "Extracted {}: {} headings, {} images, {} quotes",
            path,
            headings.len(),
            images.len(),
            quotes.len()
        );

        PageResult {
            url: path.to_string(),
            full_url: page_url.to_string(),
            title,
            headings,
            text,
            images,
            quotes,
        }
    }

    fn extract_images(&self, root: ElementRef<'_>) -> Vec<ImageRef> {
        let mut images = Vec::new();

        for img in root.select(&IMAGES) {
            let element = img.value();
            let Some(src) = IMAGE_SOURCE_ATTRS
                .iter()
                .filter_map(|attr| element.attr(attr))
                .find(|src| !src.is_empty())
            else {
                continue;
            };

            if !self.image_filter.should_keep(src) {
                ::log::trace!("Skipping decorative image {}", src);
                continue;
            }

            let resolved = match self.base_url.join(src) {
                Ok(url) => url,
                Err(e) => {
                    ::log::debug!("Skipping image with unresolvable source {}: {}", src, e);
                    continue;
                }
            };

            images.push(ImageRef {
                src: resolved.to_string(),
                alt: element.attr("alt").unwrap_or_default().to_string(),
                classes: element.classes().map(str::to_string).collect(),
            });
        }

        images
    }
}

/// Detach scripts, styles and navigation chrome so they never reach the text
fn strip_chrome(doc: &mut Html) {
    let ids = doc.select(&CHROME).map(|e| e.id()).collect::<Vec<_>>();
    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn select_main_content(root: ElementRef<'_>) -> Option<ElementRef<'_>> {
    MAIN_CONTENT_PRIORITY
        .iter()
        .find_map(|candidate| candidate.find(root))
}

fn extract_headings(root: ElementRef<'_>) -> Vec<Heading> {
    root.select(&HEADINGS)
        .filter_map(|h| {
            HeadingLevel::from_tag(h.value().name()).map(|level| Heading {
                level,
                text: text::join_inline(h.text()),
            })
        })
        .collect()
}

/// Quote elements first, then quote/testimonial-classed containers
fn extract_quotes(root: ElementRef<'_>) -> Vec<String> {
    let quoted = root.select(&QUOTES).map(|q| text::join_inline(q.text()));
    let classed = root
        .select(&CLASSED)
        .filter(|e| class_matches(e, &QUOTE_CLASS))
        .map(|e| text::join_inline(e.text()));

    quoted.chain(classed).collect()
}
