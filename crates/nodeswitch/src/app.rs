use nodeswitch_core::{
    sort_records, BackendError, CatalogEntry, VersionManager, VersionRecord,
};

use crate::state::AppState;

/// The facade the presentation layer calls. Every operation is
/// request/response; listing queries re-query the external tool each
/// time. Logging happens here, around the reconciler, never inside it.
pub struct App {
    backend: Box<dyn VersionManager>,
    state: AppState,
}

impl App {
    pub fn new(backend: Box<dyn VersionManager>) -> Self {
        Self {
            backend,
            state: AppState::new(),
        }
    }

    fn begin_action(&self) {
        if !self.state.healthy() {
            log::warn!("Resuming after {:?} idle", self.state.idle_for());
        }
        self.state.touch();
    }

    pub async fn install(&self, version: &str) -> String {
        self.begin_action();
        log::info!("Attempting to install Node.js version: {}", version);

        match self.backend.install(version).await {
            Ok(()) => {
                let msg = format!("Successfully installed Node.js {}", version);
                log::info!("{}", msg);
                msg
            }
            Err(e) => {
                let msg = format!("Error installing Node.js {}: {}", version, e);
                log::error!("{}", msg);
                msg
            }
        }
    }

    pub async fn uninstall(&self, version: &str) -> String {
        self.begin_action();
        log::info!("Attempting to uninstall Node.js version: {}", version);

        match self.backend.uninstall(version).await {
            Ok(()) => {
                let msg = format!("Successfully uninstalled Node.js {}", version);
                log::info!("{}", msg);
                msg
            }
            Err(e) => {
                let msg = format!("Error uninstalling Node.js {}: {}", version, e);
                log::error!("{}", msg);
                msg
            }
        }
    }

    pub async fn switch_to(&self, version: &str) -> String {
        self.begin_action();
        log::info!("Attempting to switch to Node.js version: {}", version);

        match self.backend.use_version(version).await {
            Ok(()) => {
                let msg = format!("Successfully switched to Node.js {}", version);
                log::info!("{}", msg);
                msg
            }
            Err(e) => {
                let msg = format!("Error switching to Node.js {}: {}", version, e);
                log::error!("{}", msg);
                msg
            }
        }
    }

    /// Installed versions, newest first.
    pub async fn installed(&self) -> Result<Vec<VersionRecord>, BackendError> {
        self.begin_action();
        log::info!("Fetching installed Node.js versions");

        let mut records = self.backend.list_installed().await.inspect_err(|e| {
            log::error!("Error fetching installed versions: {}", e);
        })?;
        sort_records(&mut records);

        log::info!("Found {} installed versions", records.len());
        Ok(records)
    }

    /// The full reconciled listing, newest first. Catalog unreachable
    /// is handled below this call by falling back to the local tool.
    pub async fn available(&self) -> Result<Vec<CatalogEntry>, BackendError> {
        self.begin_action();
        log::info!("Fetching available Node.js versions");

        let entries = self.backend.list_available().await.inspect_err(|e| {
            log::error!("Error fetching available versions: {}", e);
        })?;

        log::info!("Found {} available versions", entries.len());
        Ok(entries)
    }
}
