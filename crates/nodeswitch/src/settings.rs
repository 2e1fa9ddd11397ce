use serde::Deserialize;
use std::path::PathBuf;

use nodeswitch_platform::AppPaths;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub debug_logging: bool,

    /// Explicit nvm directory; skips detection when set.
    #[serde(default)]
    pub nvm_dir: Option<PathBuf>,

    /// Override for the remote version catalog, e.g. a mirror.
    #[serde(default)]
    pub catalog_url: Option<String>,
}

impl AppSettings {
    pub fn load() -> Self {
        let paths = AppPaths::new();
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            match std::fs::read_to_string(&settings_path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }
}
