use serde::Deserialize;
use std::collections::HashSet;

use nodeswitch_backend::{BackendError, CatalogEntry, InstallStatus, UNKNOWN_NPM};

use crate::version::normalize_version;

pub const CATALOG_URL: &str = "https://nodejs.org/dist/index.json";

/// One record of the nodejs.org dist index. Only `version` and `npm`
/// feed the reconciler; the rest is kept for completeness of the wire
/// format.
#[derive(Debug, Clone, Deserialize)]
pub struct DistRelease {
    pub version: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub lts: Lts,
    #[serde(default)]
    pub npm: Option<String>,
}

/// The dist index encodes `lts` as either `false` or a codename string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Lts {
    Codename(String),
    Released(bool),
}

impl Default for Lts {
    fn default() -> Self {
        Lts::Released(false)
    }
}

pub async fn fetch_catalog(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<DistRelease>, BackendError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| BackendError::NetworkError(format!("Failed to fetch version catalog: {}", e)))?;

    if !response.status().is_success() {
        return Err(BackendError::NetworkError(format!(
            "Version catalog returned HTTP {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| BackendError::NetworkError(format!("Failed to parse version catalog: {}", e)))
}

/// Annotates catalog records with local installation status, input
/// order preserved. Catalog versions carry a `v` prefix; they are
/// normalized before the membership test so both sources agree.
pub fn annotate_catalog(
    releases: &[DistRelease],
    installed: &HashSet<String>,
) -> Vec<CatalogEntry> {
    releases
        .iter()
        .map(|release| {
            let version = normalize_version(&release.version);
            let status = if installed.contains(&version) {
                InstallStatus::Installed
            } else {
                InstallStatus::NotInstalled
            };
            CatalogEntry {
                version,
                status,
                npm_version: release
                    .npm
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_NPM.to_string()),
            }
        })
        .collect()
}
