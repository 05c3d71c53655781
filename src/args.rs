use clap::Parser;

/// Every tunable is a compile-time constant, so only `--help` and
/// `--version` are accepted
#[derive(Parser, Debug)]
#[command(name = "prospectus-scrape")]
#[command(about = "Scrapes the college website into files for the prospectus")]
#[command(version)]
pub struct Args {}
