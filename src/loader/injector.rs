use anyhow::{Context, Result, bail};
use regex::Regex;
use std::future::Future;

use super::registry::{HandleRegistry, LibraryHandle};
use crate::models::LibrarySettings;

/// Fetches a charting-backend asset and publishes its handle.
///
/// Implementations must register a [`LibraryHandle`] in the shared registry
/// on success; the loader verifies its presence and treats a transport-level
/// success without a registered handle as a failure.
pub trait ResourceInjector: Send + Sync {
    fn inject(&self, source: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Default injector: local paths via the filesystem, http(s) URLs via HTTP.
///
/// The library version is sniffed from the fetched source (minified bundles
/// carry a `version: "x.y.z"` literal), falling back to the configured
/// version string when no match is found.
pub struct AssetInjector {
    registry: HandleRegistry,
    library: LibrarySettings,

    /// Matches `version: "7.9.0"` and `version = "7.9.0"` style literals
    version_pattern: Regex,
}

impl AssetInjector {
    pub fn new(registry: HandleRegistry, library: LibrarySettings) -> Self {
        Self {
            registry,
            library,
            version_pattern: Regex::new(r#"version\s*[:=]\s*"([0-9][0-9A-Za-z.\-]*)""#)
                .expect("Invalid version regex"),
        }
    }

    fn sniff_version(&self, body: &str) -> Option<String> {
        self.version_pattern
            .captures(body)
            .map(|captures| captures[1].to_string())
    }
}

impl ResourceInjector for AssetInjector {
    async fn inject(&self, source: &str) -> Result<()> {
        let body = if source.starts_with("http://") || source.starts_with("https://") {
            reqwest::get(source)
                .await
                .with_context(|| format!("Failed to fetch asset from {}", source))?
                .error_for_status()
                .with_context(|| format!("Asset request rejected: {}", source))?
                .text()
                .await
                .with_context(|| format!("Failed to read asset body from {}", source))?
        } else {
            tokio::fs::read_to_string(source)
                .await
                .with_context(|| format!("Failed to read asset file: {}", source))?
        };

        if body.trim().is_empty() {
            bail!("Fetched asset is empty: {}", source);
        }

        let version = self
            .sniff_version(&body)
            .unwrap_or_else(|| self.library.version.clone());

        let handle = LibraryHandle {
            id: self.library.id.clone(),
            version,
            source_len: body.len(),
        };

        tracing::debug!(
            "Installed {} {} ({} bytes) from {}",
            handle.id,
            handle.version,
            handle.source_len,
            source
        );

        self.registry.register(handle);
        Ok(())
    }
}
