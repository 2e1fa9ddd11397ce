use async_trait::async_trait;
use std::collections::HashSet;

use nodeswitch_backend::{BackendError, CatalogEntry};

use crate::catalog::{annotate_catalog, fetch_catalog};
use crate::client::NvmClient;
use crate::version::parse_available_text;

/// One provider of the "all known versions" listing. Providers are
/// tried in order; the first success wins.
#[async_trait]
pub trait AvailableSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, installed: &HashSet<String>)
        -> Result<Vec<CatalogEntry>, BackendError>;
}

/// Remote nodejs.org dist index.
pub struct CatalogSource {
    client: reqwest::Client,
    url: String,
}

impl CatalogSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl AvailableSource for CatalogSource {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn fetch(
        &self,
        installed: &HashSet<String>,
    ) -> Result<Vec<CatalogEntry>, BackendError> {
        let releases = fetch_catalog(&self.client, &self.url).await?;
        Ok(annotate_catalog(&releases, installed))
    }
}

/// Local `nvm ls available` listing, used when the catalog is
/// unreachable.
pub struct NvmListSource {
    client: NvmClient,
}

impl NvmListSource {
    pub fn new(client: NvmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AvailableSource for NvmListSource {
    fn name(&self) -> &'static str {
        "nvm ls available"
    }

    async fn fetch(
        &self,
        installed: &HashSet<String>,
    ) -> Result<Vec<CatalogEntry>, BackendError> {
        let output = self.client.run(&["ls", "available"]).await?;
        Ok(parse_available_text(&output, installed))
    }
}

/// Tries each source in order against one immutable installed-set
/// snapshot. A source failure is logged and the next source is tried;
/// only when every source fails does the last error propagate.
pub async fn resolve_available(
    sources: &[Box<dyn AvailableSource>],
    installed: &HashSet<String>,
) -> Result<Vec<CatalogEntry>, BackendError> {
    let mut last_err = None;

    for source in sources {
        match source.fetch(installed).await {
            Ok(entries) => {
                log::debug!("{} source returned {} entries", source.name(), entries.len());
                return Ok(entries);
            }
            Err(e) => {
                log::warn!("{} source failed: {}", source.name(), e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or(BackendError::NotFound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeswitch_backend::{InstallStatus, UNKNOWN_NPM};

    struct FailingSource;

    #[async_trait]
    impl AvailableSource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn fetch(
            &self,
            _installed: &HashSet<String>,
        ) -> Result<Vec<CatalogEntry>, BackendError> {
            Err(BackendError::NetworkError("connection refused".to_string()))
        }
    }

    struct FixedSource(Vec<&'static str>);

    #[async_trait]
    impl AvailableSource for FixedSource {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch(
            &self,
            installed: &HashSet<String>,
        ) -> Result<Vec<CatalogEntry>, BackendError> {
            Ok(self
                .0
                .iter()
                .map(|v| CatalogEntry {
                    version: v.to_string(),
                    status: if installed.contains(*v) {
                        InstallStatus::Installed
                    } else {
                        InstallStatus::NotInstalled
                    },
                    npm_version: UNKNOWN_NPM.to_string(),
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let sources: Vec<Box<dyn AvailableSource>> = vec![
            Box::new(FixedSource(vec!["20.11.0"])),
            Box::new(FixedSource(vec!["18.16.0"])),
        ];
        let entries = resolve_available(&sources, &HashSet::new()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].version, "20.11.0");
    }

    #[tokio::test]
    async fn test_falls_back_past_failure() {
        let sources: Vec<Box<dyn AvailableSource>> = vec![
            Box::new(FailingSource),
            Box::new(FixedSource(vec!["18.16.0", "16.20.0"])),
        ];
        let installed: HashSet<String> = ["16.20.0".to_string()].into_iter().collect();

        let entries = resolve_available(&sources, &installed).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].status, InstallStatus::Installed);
    }

    #[tokio::test]
    async fn test_all_sources_failing_propagates_error() {
        let sources: Vec<Box<dyn AvailableSource>> =
            vec![Box::new(FailingSource), Box::new(FailingSource)];
        let err = resolve_available(&sources, &HashSet::new())
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::NetworkError(_)));
    }
}
