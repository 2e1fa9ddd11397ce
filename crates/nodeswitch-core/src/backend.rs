use async_trait::async_trait;

use nodeswitch_backend::{BackendError, BackendInfo, CatalogEntry, VersionManager, VersionRecord};

use crate::catalog::CATALOG_URL;
use crate::client::NvmClient;
use crate::source::{resolve_available, AvailableSource, CatalogSource, NvmListSource};
use crate::version::{installed_set, parse_installed, sort_entries};

#[derive(Clone)]
pub struct NvmBackend {
    info: BackendInfo,
    client: NvmClient,
    http: reqwest::Client,
    catalog_url: String,
}

impl NvmBackend {
    pub fn new(client: NvmClient, info: BackendInfo) -> Self {
        Self {
            info,
            client,
            http: reqwest::Client::new(),
            catalog_url: CATALOG_URL.to_string(),
        }
    }

    pub fn with_catalog_url(mut self, url: String) -> Self {
        self.catalog_url = url;
        self
    }

    pub fn client(&self) -> &NvmClient {
        &self.client
    }
}

#[async_trait]
impl VersionManager for NvmBackend {
    fn name(&self) -> &'static str {
        "nvm"
    }

    fn backend_info(&self) -> &BackendInfo {
        &self.info
    }

    async fn list_installed(&self) -> Result<Vec<VersionRecord>, BackendError> {
        let output = self.client.run(&["ls"]).await?;
        Ok(parse_installed(&output))
    }

    /// One reconciliation pass: snapshot the installed set, take the
    /// first source that answers (catalog, then the local tool), then
    /// order newest-first.
    async fn list_available(&self) -> Result<Vec<CatalogEntry>, BackendError> {
        let records = self.list_installed().await?;
        let installed = installed_set(&records);

        let sources: Vec<Box<dyn AvailableSource>> = vec![
            Box::new(CatalogSource::new(
                self.http.clone(),
                self.catalog_url.clone(),
            )),
            Box::new(NvmListSource::new(self.client.clone())),
        ];

        let mut entries = resolve_available(&sources, &installed).await?;
        sort_entries(&mut entries);
        Ok(entries)
    }

    async fn install(&self, version: &str) -> Result<(), BackendError> {
        self.client.run(&["install", version]).await?;
        Ok(())
    }

    async fn uninstall(&self, version: &str) -> Result<(), BackendError> {
        self.client.run(&["uninstall", version]).await?;
        Ok(())
    }

    async fn use_version(&self, version: &str) -> Result<(), BackendError> {
        self.client.run(&["use", version]).await?;
        Ok(())
    }
}
