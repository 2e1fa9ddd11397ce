use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::BackendError;
use crate::types::{CatalogEntry, VersionRecord};

#[derive(Debug, Clone)]
pub struct BackendInfo {
    pub name: &'static str,
    pub path: PathBuf,
    pub version: Option<String>,
    pub in_path: bool,
}

/// The boundary the presentation layer talks to. Every operation is
/// plain request/response; listing queries re-read the external tool
/// each time and never cache across calls.
#[async_trait]
pub trait VersionManager: Send + Sync {
    fn name(&self) -> &'static str;

    fn backend_info(&self) -> &BackendInfo;

    async fn list_installed(&self) -> Result<Vec<VersionRecord>, BackendError>;

    async fn list_available(&self) -> Result<Vec<CatalogEntry>, BackendError>;

    async fn install(&self, version: &str) -> Result<(), BackendError>;

    async fn uninstall(&self, version: &str) -> Result<(), BackendError>;

    async fn use_version(&self, version: &str) -> Result<(), BackendError>;
}
