//! Static asset sources for the web UI
//!
//! The UI bundle (`index.html`, `favicon.ico` and everything under
//! `static/`) is embedded into the binary at build time. An on-disk
//! directory with the same layout can be served instead, which is useful
//! while working on the frontend.

use async_trait::async_trait;
use include_dir::{Dir, include_dir};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// UI bundle embedded at build time
static UI_BUNDLE: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/ui/dist");

/// Bundle entry served for `/`
pub const INDEX_FILE: &str = "index.html";

/// Bundle entry served for `/favicon.ico`
pub const FAVICON_FILE: &str = "favicon.ico";

/// Error type for asset lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Invalid asset path: {0}")]
    InvalidPath(String),

    #[error("Failed to read asset {0}: {1}")]
    ReadError(String, String),
}

/// A resolved asset ready to be written to a response
#[derive(Debug, Clone)]
pub struct Asset {
    /// Path relative to the bundle root
    pub path: String,
    /// MIME type inferred from the file extension
    pub content_type: &'static str,
    pub body: Cow<'static, [u8]>,
}

/// Read-only mapping from bundle-relative path to file contents
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Load the asset at `path`, relative to the bundle root
    async fn load(&self, path: &str) -> Result<Asset, AssetError>;

    /// Short description for startup logging
    fn describe(&self) -> String;
}

/// Assets compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AssetSource for EmbeddedAssets {
    async fn load(&self, path: &str) -> Result<Asset, AssetError> {
        let path = normalize_asset_path(path)?;
        let file = UI_BUNDLE
            .get_file(&path)
            .ok_or_else(|| AssetError::NotFound(path.clone()))?;

        Ok(Asset {
            content_type: content_type_for(&path),
            body: Cow::Borrowed(file.contents()),
            path,
        })
    }

    fn describe(&self) -> String {
        "embedded UI bundle".to_string()
    }
}

/// Assets read from a directory at request time
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetSource for DirectoryAssets {
    async fn load(&self, path: &str) -> Result<Asset, AssetError> {
        let path = normalize_asset_path(path)?;
        let full_path = self.root.join(&path);

        match tokio::fs::metadata(&full_path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(AssetError::NotFound(path)),
        }

        let bytes = tokio::fs::read(&full_path)
            .await
            .map_err(|e| AssetError::ReadError(path.clone(), e.to_string()))?;

        debug!(path = %path, bytes = bytes.len(), "Read asset from disk");

        Ok(Asset {
            content_type: content_type_for(&path),
            body: Cow::Owned(bytes),
            path,
        })
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// Turn a request path into a bundle-relative path.
///
/// Leading slashes and empty segments are dropped. Parent or current
/// directory segments, backslashes and drive prefixes are rejected so a
/// path can never escape the bundle root.
pub fn normalize_asset_path(path: &str) -> Result<String, AssetError> {
    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" => continue,
            "." | ".." => return Err(AssetError::InvalidPath(path.to_string())),
            s if s.contains('\\') || s.contains(':') => {
                return Err(AssetError::InvalidPath(path.to_string()));
            }
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        return Err(AssetError::InvalidPath(path.to_string()));
    }

    Ok(segments.join("/"))
}

/// MIME type for a bundle path, by extension
pub fn content_type_for(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") | Some("map") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
