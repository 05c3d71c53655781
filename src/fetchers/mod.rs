pub mod http;

use crate::error::FetchError;
use url::Url;

pub use self::http::HttpFetcher;

/// Issues GET requests for absolute URLs
///
/// Every call is a single attempt: there are no retries, and a failure is
/// reported to the caller, which logs it and moves on.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetch a page body as text
    async fn fetch_text(&self, url: &Url) -> Result<String, FetchError>;

    /// Fetch a raw resource, such as an image
    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}
