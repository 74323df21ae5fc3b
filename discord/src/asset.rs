use std::path::Path;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use isahc::{
    config::{Configurable, RedirectPolicy},
    http::StatusCode,
    AsyncReadResponseExt,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not read asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not download asset: {0}")]
    Http(#[from] isahc::Error),

    #[error("invalid asset url: {0}")]
    Url(#[from] isahc::http::Error),

    #[error("asset download returned {0}")]
    Status(StatusCode),
}

const INLINE_PREFIX: &str = "data:";

/// Whether `reference` already is an inline `data:` URI.
pub fn is_inline(reference: &str) -> bool {
    reference.starts_with(INLINE_PREFIX)
}

pub fn encode(mime: &str, data: &[u8]) -> String {
    format!("{}{};base64,{}", INLINE_PREFIX, mime, STANDARD.encode(data))
}

fn mime_from_extension(reference: &str) -> &'static str {
    // strip query strings from urls before looking at the extension
    let path = reference.split(['?', '#']).next().unwrap_or(reference);
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Turns a url or a local path into an inline-encoded asset.
#[async_trait]
pub trait AssetResolver: Sync {
    async fn resolve(&self, reference: &str) -> Result<String, AssetError>;

    /// Resolves `reference` unless it is already inline.
    async fn inline(&self, reference: String) -> Result<String, AssetError> {
        if is_inline(&reference) {
            Ok(reference)
        } else {
            self.resolve(&reference).await
        }
    }
}

/// Downloads `http(s)` references and reads everything else from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchAssets;

impl FetchAssets {
    async fn download(&self, url: &str) -> Result<String, AssetError> {
        let request = isahc::Request::get(url)
            .redirect_policy(RedirectPolicy::Limit(10))
            .body(())?;
        let mut response = isahc::send_async(request).await?;
        if !response.status().is_success() {
            return Err(AssetError::Status(response.status()));
        }

        let mime = response
            .headers()
            .get("Content-Type")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or(value).trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| mime_from_extension(url).to_owned());

        let data = response.bytes().await?;
        Ok(encode(&mime, &data))
    }

    async fn read(&self, path: &str) -> Result<String, AssetError> {
        let data = tokio::fs::read(path).await?;
        Ok(encode(mime_from_extension(path), &data))
    }
}

#[async_trait]
impl AssetResolver for FetchAssets {
    async fn resolve(&self, reference: &str) -> Result<String, AssetError> {
        debug!(reference, "resolving asset");
        if reference.starts_with("http://") || reference.starts_with("https://") {
            self.download(reference).await
        } else {
            self.read(reference).await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::testing::{response, Server};

    #[test]
    fn detects_inline_assets() {
        assert!(is_inline("data:image/png;base64,AAAA"));
        assert!(!is_inline("https://cdn.discordapp.com/icons/1/a.png"));
        assert!(!is_inline("./icon.png"));
    }

    #[test]
    fn guesses_mime_types() {
        assert_eq!(mime_from_extension("icon.PNG"), "image/png");
        assert_eq!(mime_from_extension("photo.jpeg"), "image/jpeg");
        assert_eq!(
            mime_from_extension("https://example.com/a.gif?size=64"),
            "image/gif"
        );
        assert_eq!(mime_from_extension("no_extension"), "image/png");
    }

    #[test]
    fn encodes_data_uri() {
        assert_eq!(encode("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[tokio::test]
    async fn reads_local_files() {
        let mut file = tempfile::Builder::new().suffix(".webp").tempfile().unwrap();
        file.write_all(b"hi").unwrap();

        let path = file.path().to_str().unwrap().to_owned();
        let resolved = FetchAssets.resolve(&path).await.unwrap();
        assert_eq!(resolved, "data:image/webp;base64,aGk=");
    }

    #[tokio::test]
    async fn missing_files_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = FetchAssets
            .resolve(path.to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AssetError::Io(_)));
    }

    #[tokio::test]
    async fn inline_assets_are_not_resolved() {
        let inline = "data:image/png;base64,aGk=".to_owned();
        assert_eq!(FetchAssets.inline(inline.clone()).await.unwrap(), inline);
    }

    #[tokio::test]
    async fn downloads_follow_redirects() {
        let server = Server::start(vec![
            response("302 Found", &[("Location", "/icon.png")], ""),
            response("200 OK", &[("Content-Type", "image/png")], "hi"),
        ])
        .await;

        let resolved = FetchAssets.resolve(&server.url("/old.png")).await.unwrap();
        assert_eq!(resolved, "data:image/png;base64,aGk=");

        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].starts_with("get /old.png "));
        assert!(requests[1].starts_with("get /icon.png "));
    }

    #[tokio::test]
    async fn failed_downloads_report_the_status() {
        let server = Server::start(vec![response("404 Not Found", &[], "")]).await;

        let err = FetchAssets
            .resolve(&server.url("/missing.gif"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssetError::Status(StatusCode::NOT_FOUND)));
    }
}
