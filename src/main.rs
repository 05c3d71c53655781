use clap::Parser;
use prospectus_scrape::{HttpFetcher, ScrapeConfig, ScrapeError, ScrapeReport, Scraper};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let _args = Args::parse();
    let config = ScrapeConfig::default();

    ::log::info!(
        "Starting scrape of {} pages from {}",
        config.paths.len(),
        config.base_url
    );

    let start_time = std::time::Instant::now();
    match run(config).await {
        Ok(report) => {
            ::log::info!(
                "Scrape complete - {} pages, {} images downloaded in {:.2} seconds",
                report.pages.len(),
                report.images_downloaded,
                start_time.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ScrapeConfig) -> Result<ScrapeReport, ScrapeError> {
    let fetcher = HttpFetcher::new(&config)?;
    let scraper = Scraper::new(fetcher, config)?;
    scraper.run().await
}
