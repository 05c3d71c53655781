use crate::error::{Result, ScrapeError};
use crate::fetchers::Fetcher;
use crate::utils::sanitize_filename;
use std::path::Path;
use url::Url;

/// Download one image into `dir`, returning the filename it was saved under
pub async fn download_image<F: Fetcher>(fetcher: &F, url: &str, dir: &Path) -> Result<String> {
    let parsed = Url::parse(url)?;
    let bytes = fetcher.fetch_bytes(&parsed).await?;

    let filename = image_filename(&parsed);
    let path = dir.join(&filename);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| ScrapeError::io(&path, e))?;

    ::log::debug!("Saved {} bytes from {} to {}", bytes.len(), url, path.display());
    Ok(filename)
}

/// Derive a filesystem-safe filename for an image URL
///
/// The last path segment is used when it has an extension; otherwise a name
/// is synthesised from a digest of the URL.
pub fn image_filename(url: &Url) -> String {
    let basename = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();

    let name = if basename.contains('.') {
        basename.to_string()
    } else {
        fallback_filename(url.as_str())
    };

    sanitize_filename(&name)
}

/// `image_<n><ext>`, with `n` a stable four-digit digest of the URL
fn fallback_filename(url: &str) -> String {
    let digest = blake3::hash(url.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    let n = u64::from_le_bytes(prefix) % 10_000;

    format!("image_{}{}", n, guess_extension(url))
}

fn guess_extension(url: &str) -> &'static str {
    let lower = url.to_lowercase();
    if lower.contains("png") {
        ".png"
    } else if lower.contains("webp") {
        ".webp"
    } else {
        ".jpg"
    }
}
