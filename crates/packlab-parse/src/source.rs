//! Resolution of pack JSON from its supported sources.
//!
//! The engine itself imposes no timeout or retry policy on the asynchronous
//! sources; callers own cancellation by racing these futures against their
//! own deadlines.

use std::path::{Path, PathBuf};

use packlab_core::Pack;
use tokio::fs;

use crate::errors::{ParseError, Result};
use crate::parse::parse_pack_text;

/// Where raw pack JSON comes from.
#[derive(Debug, Clone)]
pub enum PackSource {
    /// Inline JSON text.
    Text(String),
    /// Path to a local JSON file.
    File(PathBuf),
    /// HTTP(S) URL serving JSON text.
    Url(String),
}

impl PackSource {
    /// Build a source from a string kind tag, as supplied by external
    /// callers exchanging `{kind, content}` pairs.
    pub fn from_kind(kind: &str, content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        match kind {
            "text" => Ok(PackSource::Text(content)),
            "file" => Ok(PackSource::File(PathBuf::from(content))),
            "url" => Ok(PackSource::Url(content)),
            other => Err(ParseError::UnsupportedSource(other.to_string())),
        }
    }
}

/// Resolve a source to raw text and run the validation pipeline on it.
pub async fn parse_from_source(source: &PackSource) -> Result<Pack> {
    let text = read_source(source).await?;
    parse_pack_text(&text)
}

/// Resolve a source to its raw text without validating it.
pub async fn read_source(source: &PackSource) -> Result<String> {
    match source {
        PackSource::Text(text) => Ok(text.clone()),
        PackSource::File(path) => Ok(fs::read_to_string(path).await?),
        PackSource::Url(url) => fetch_text(url).await,
    }
}

/// Parse a pack from a local JSON file.
pub async fn parse_pack_file(path: impl AsRef<Path>) -> Result<Pack> {
    parse_from_source(&PackSource::File(path.as_ref().to_path_buf())).await
}

/// Parse a pack fetched from a URL.
pub async fn parse_pack_url(url: &str) -> Result<Pack> {
    parse_from_source(&PackSource::Url(url.to_string())).await
}

async fn fetch_text(url: &str) -> Result<String> {
    tracing::debug!(url, "fetching pack JSON");
    let response = reqwest::get(url)
        .await
        .map_err(|err| ParseError::Network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ParseError::Http {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        });
    }

    response
        .text()
        .await
        .map_err(|err| ParseError::Network(err.to_string()))
}
