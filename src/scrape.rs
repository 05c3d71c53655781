use crate::config::{COLOUR_SOURCE_PATH, ScrapeConfig};
use crate::error::Result;
use crate::fetchers::Fetcher;
use crate::images::download_image;
use crate::output::{ALL_CONTENT_FILE, BRAND_COLOURS_FILE, IMAGE_LIST_FILE, OutputDir};
use crate::parsers::{ColorSet, ContentExtractor, extract_colors};
use crate::results::PageResult;
use std::collections::HashSet;
use url::Url;

/// Everything accumulated over one run
#[derive(Debug, Default)]
pub struct Discovered {
    /// Successfully scraped pages, in path order
    pub pages: Vec<PageResult>,

    /// Unique image URLs in the order they were first seen
    pub images: Vec<String>,
    seen_images: HashSet<String>,

    /// Brand colours from the homepage styles
    pub colors: ColorSet,

    /// Paths whose fetch failed
    pub failed_paths: Vec<String>,
}

impl Discovered {
    /// Record a page and its images, ignoring image URLs already seen
    pub fn add_page(&mut self, page: PageResult) {
        for image in &page.images {
            if self.seen_images.insert(image.src.clone()) {
                self.images.push(image.src.clone());
            }
        }
        self.pages.push(page);
    }
}

/// Outcome of a completed run
#[derive(Debug)]
pub struct ScrapeReport {
    pub pages: Vec<PageResult>,
    pub images: Vec<String>,
    pub colors: ColorSet,
    pub failed_paths: Vec<String>,
    /// Image downloads started, at most the configured cap
    pub images_attempted: usize,
    pub images_downloaded: usize,
}

/// Runs the fetch, extract, save loop over the configured paths
pub struct Scraper<F> {
    fetcher: F,
    config: ScrapeConfig,
    base_url: Url,
    extractor: ContentExtractor,
}

impl<F: Fetcher> Scraper<F> {
    pub fn new(fetcher: F, config: ScrapeConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let extractor = ContentExtractor::new(base_url.clone());

        Ok(Self {
            fetcher,
            config,
            base_url,
            extractor,
        })
    }

    /// Scrape every page, write the summaries and download the capped image set
    ///
    /// Network failures only skip the page or image concerned; errors writing
    /// the output tree abort the run.
    pub async fn run(&self) -> Result<ScrapeReport> {
        let out = OutputDir::create(&self.config.output_dir)?;
        println!("Created directories in {}", out.root().display());

        let discovered = self.scrape_pages(&out).await?;
        self.write_summaries(&out, &discovered)?;

        println!("{}", "-".repeat(50));
        println!("\nContent scraped: {} pages", discovered.pages.len());
        println!("Images found: {}", discovered.images.len());
        println!("Brand colours found: {}", discovered.colors.len());

        let (attempted, downloaded) = self.download_images(&out, &discovered.images).await;

        println!("{}", "-".repeat(50));
        println!("\nScraping complete!");
        println!("Content saved to: {}/", out.root().display());
        println!("  - {} (structured data)", ALL_CONTENT_FILE);
        println!("  - content/*.txt (text extracts)");
        println!("  - pages/*.html (raw HTML)");
        println!("  - images/ ({} images)", downloaded);

        Ok(ScrapeReport {
            pages: discovered.pages,
            images: discovered.images,
            colors: discovered.colors,
            failed_paths: discovered.failed_paths,
            images_attempted: attempted,
            images_downloaded: downloaded,
        })
    }

    async fn scrape_pages(&self, out: &OutputDir) -> Result<Discovered> {
        let mut discovered = Discovered::default();
        let total = self.config.paths.len();

        println!("\nScraping {} pages from {}...", total, self.config.base_url);
        println!("{}", "-".repeat(50));

        for (i, path) in self.config.paths.iter().enumerate() {
            println!("[{}/{}] Scraping: {}", i + 1, total, path);
            self.scrape_page(out, path, &mut discovered).await?;
            tokio::time::sleep(self.config.page_delay).await;
        }

        ::log::info!(
            "Scraped {} of {} pages, {} failed",
            discovered.pages.len(),
            total,
            discovered.failed_paths.len()
        );
        Ok(discovered)
    }

    async fn scrape_page(
        &self,
        out: &OutputDir,
        path: &str,
        discovered: &mut Discovered,
    ) -> Result<()> {
        let page_url = match self.base_url.join(path) {
            Ok(url) => url,
            Err(e) => {
                println!("Error scraping {}: {}", path, e);
                discovered.failed_paths.push(path.to_string());
                return Ok(());
            }
        };

        let html = match self.fetcher.fetch_text(&page_url).await {
            Ok(html) => html,
            Err(e) => {
                println!("Error scraping {}: {}", page_url, e);
                discovered.failed_paths.push(path.to_string());
                return Ok(());
            }
        };

        let page = self.extractor.extract(&html, path, &page_url);

        if path == COLOUR_SOURCE_PATH {
            discovered.colors.extend(extract_colors(&html));
        }

        out.write_page_text(&page)?;
        out.write_page_html(path, &html)?;
        discovered.add_page(page);
        Ok(())
    }

    fn write_summaries(&self, out: &OutputDir, discovered: &Discovered) -> Result<()> {
        out.write_json(ALL_CONTENT_FILE, &discovered.pages)?;
        out.write_json(IMAGE_LIST_FILE, &discovered.images)?;
        out.write_json(BRAND_COLOURS_FILE, &discovered.colors)?;
        Ok(())
    }

    /// Returns the number of downloads attempted and the number that succeeded
    async fn download_images(&self, out: &OutputDir, images: &[String]) -> (usize, usize) {
        let max = self.config.max_images;
        println!("\nDownloading images (max {})...", max);

        let dir = out.images_dir();
        let mut attempted = 0;
        let mut downloaded = 0;
        for url in images.iter().take(max) {
            attempted += 1;
            match download_image(&self.fetcher, url, &dir).await {
                Ok(filename) => {
                    downloaded += 1;
                    println!("  Downloaded: {}", filename);
                }
                Err(e) => println!("Error downloading {}: {}", url, e),
            }
            tokio::time::sleep(self.config.image_delay).await;
        }

        ::log::info!("Downloaded {} of {} images", downloaded, attempted);
        (attempted, downloaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::output::{IMAGES_DIR, PAGES_DIR};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::Path;
    use std::time::Duration;

    const BASE: &str = "https://www.example.org";

    /// Serves canned responses and records every URL requested
    #[derive(Default)]
    struct StubFetcher {
        pages: HashMap<String, String>,
        images: HashMap<String, Vec<u8>>,
        requests: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn page(mut self, path: &str, html: &str) -> Self {
            self.pages.insert(format!("{}{}", BASE, path), html.to_string());
            self
        }

        fn image(mut self, url: &str) -> Self {
            self.images.insert(url.to_string(), vec![0xFF, 0xD8, 0xFF]);
            self
        }

        fn requested(&self, prefix: &str) -> Vec<String> {
            self.requests
                .borrow()
                .iter()
                .filter(|u| u.starts_with(prefix))
                .cloned()
                .collect()
        }

        fn missing(url: &Url) -> FetchError {
            FetchError::Status {
                url: url.to_string(),
                status: 504,
            }
        }
    }

    impl Fetcher for StubFetcher {
        async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.pages.get(url.as_str()).cloned().ok_or_else(|| Self::missing(url))
        }

        async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.images.get(url.as_str()).cloned().ok_or_else(|| Self::missing(url))
        }
    }

    fn config(dir: &Path, paths: &[&str]) -> ScrapeConfig {
        ScrapeConfig {
            base_url: BASE.to_string(),
            output_dir: dir.to_path_buf(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
            page_delay: Duration::ZERO,
            image_delay: Duration::ZERO,
            ..ScrapeConfig::default()
        }
    }

    fn read_pages(dir: &Path) -> Vec<PageResult> {
        let raw = std::fs::read_to_string(dir.join(ALL_CONTENT_FILE)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_failed_page_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::default()
            .page("/", "<html><title>Home</title><body><main><p>Hi</p></main></body></html>")
            .page(
                "/apply/fees",
                "<html><title>Fees</title><body><main><h2>Fees</h2></main></body></html>",
            );
        let paths = ["/", "/welcome/principal", "/apply/fees"];
        let scraper = Scraper::new(fetcher, config(tmp.path(), &paths)).unwrap();

        let report = scraper.run().await.unwrap();

        // One attempt per path, in order, the failure included
        assert_eq!(
            scraper.fetcher.requested(BASE),
            vec![
                format!("{}/", BASE),
                format!("{}/welcome/principal", BASE),
                format!("{}/apply/fees", BASE),
            ]
        );
        assert_eq!(report.failed_paths, vec!["/welcome/principal"]);

        let pages = read_pages(tmp.path());
        let urls = pages.iter().map(|p| p.url.as_str()).collect::<Vec<_>>();
        assert_eq!(urls, vec!["/", "/apply/fees"]);
        assert_eq!(pages[0].title, "Home");
        assert_eq!(pages[0].text, "Hi");
        assert_eq!(pages[1].title, "Fees");
        assert_eq!(pages[1].full_url, "https://www.example.org/apply/fees");
        assert_eq!(pages, report.pages);

        assert!(tmp.path().join(PAGES_DIR).join("home.html").is_file());
        assert!(tmp.path().join("content").join("apply_fees.txt").is_file());
        assert!(!tmp.path().join("content").join("welcome_principal.txt").exists());
    }

    #[tokio::test]
    async fn test_image_cap() {
        let tmp = tempfile::tempdir().unwrap();
        let mut html = String::from("<html><body><main>");
        let mut fetcher = StubFetcher::default();
        for i in 0..75 {
            html.push_str(&format!("<img src=\"/media/photo-{}.jpg\">", i));
            fetcher = fetcher.image(&format!("{}/media/photo-{}.jpg", BASE, i));
        }
        html.push_str("</main></body></html>");
        let fetcher = fetcher.page("/", &html);

        let scraper = Scraper::new(fetcher, config(tmp.path(), &["/"])).unwrap();
        let report = scraper.run().await.unwrap();

        assert_eq!(report.images.len(), 75);
        assert_eq!(report.images_attempted, 50);
        assert_eq!(report.images_downloaded, 50);
        assert_eq!(scraper.fetcher.requested(&format!("{}/media/", BASE)).len(), 50);

        let saved = std::fs::read_dir(tmp.path().join(IMAGES_DIR)).unwrap().count();
        assert_eq!(saved, 50);
    }

    #[tokio::test]
    async fn test_images_deduplicated_across_pages() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::default()
            .page(
                "/",
                r#"<body><img src="/a.jpg"><img src="/b.jpg"><img src="/a.jpg"></body>"#,
            )
            .page(
                "/life/boarding",
                r#"<body><img src="/b.jpg"><img src="https://www.example.org/c.jpg"></body>"#,
            )
            .image("https://www.example.org/a.jpg")
            .image("https://www.example.org/c.jpg");

        let scraper = Scraper::new(fetcher, config(tmp.path(), &["/", "/life/boarding"])).unwrap();
        let report = scraper.run().await.unwrap();

        assert_eq!(
            report.images,
            vec![
                "https://www.example.org/a.jpg",
                "https://www.example.org/b.jpg",
                "https://www.example.org/c.jpg",
            ]
        );
        // Per-page lists keep their duplicates
        assert_eq!(report.pages[0].images.len(), 3);

        // b.jpg is not served, so only two downloads succeed
        assert_eq!(report.images_attempted, 3);
        assert_eq!(report.images_downloaded, 2);

        let raw = std::fs::read_to_string(tmp.path().join(IMAGE_LIST_FILE)).unwrap();
        let listed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(listed, report.images);
    }

    #[tokio::test]
    async fn test_colours_from_homepage_only() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::default()
            .page(
                "/",
                "<html><head><style>a{color:#002F5F}b{color:#C8102E}a{color:#002F5F}</style></head></html>",
            )
            .page(
                "/learn/library",
                "<html><head><style>a{color:#123456}</style></head></html>",
            );

        let scraper =
            Scraper::new(fetcher, config(tmp.path(), &["/learn/library", "/"])).unwrap();
        let report = scraper.run().await.unwrap();

        let raw = std::fs::read_to_string(tmp.path().join(BRAND_COLOURS_FILE)).unwrap();
        let colors: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(colors, vec!["#002F5F", "#C8102E"]);
        assert_eq!(report.colors.len(), 2);
    }

    #[tokio::test]
    async fn test_all_pages_failing_still_writes_summaries() {
        let tmp = tempfile::tempdir().unwrap();
        let scraper =
            Scraper::new(StubFetcher::default(), config(tmp.path(), &["/", "/news/blogs"]))
                .unwrap();
        let report = scraper.run().await.unwrap();

        assert!(report.pages.is_empty());
        assert_eq!(report.failed_paths.len(), 2);
        assert_eq!(report.images_attempted, 0);
        assert!(read_pages(tmp.path()).is_empty());
        assert!(tmp.path().join(IMAGE_LIST_FILE).is_file());
        assert!(tmp.path().join(BRAND_COLOURS_FILE).is_file());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delays_follow_every_request() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::default()
            .page("/", r#"<body><img src="/a.jpg"><img src="/b.jpg"></body>"#)
            .page("/learn/library", "<body><p>Books</p></body>")
            .image("https://www.example.org/a.jpg");
        let config = ScrapeConfig {
            page_delay: Duration::from_secs(1),
            image_delay: Duration::from_millis(500),
            ..config(tmp.path(), &["/", "/news/blogs", "/learn/library"])
        };

        let scraper = Scraper::new(fetcher, config).unwrap();
        let start = tokio::time::Instant::now();
        let report = scraper.run().await.unwrap();
        let elapsed = start.elapsed();

        // Three page delays (one after the failed fetch) and two image
        // delays (one after the failed download)
        assert_eq!(report.failed_paths, vec!["/news/blogs"]);
        assert_eq!(report.images_attempted, 2);
        assert_eq!(report.images_downloaded, 1);
        assert!(elapsed >= Duration::from_secs(4), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(4100), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_applies_when_every_fetch_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ScrapeConfig {
            page_delay: Duration::from_secs(1),
            ..config(tmp.path(), &["/", "/news/blogs"])
        };

        let scraper = Scraper::new(StubFetcher::default(), config).unwrap();
        let start = tokio::time::Instant::now();
        scraper.run().await.unwrap();
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_secs(2), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(2100), "elapsed {:?}", elapsed);
    }

    #[test]
    fn test_invalid_base_url() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config(tmp.path(), &["/"]);
        config.base_url = "not a url".to_string();
        assert!(Scraper::new(StubFetcher::default(), config).is_err());
    }
}
