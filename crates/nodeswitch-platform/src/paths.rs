use std::path::PathBuf;

pub struct AppPaths {
    pub config_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            let home = dirs::home_dir().expect("No home directory");
            Self {
                config_dir: home.join("Library/Application Support/nodeswitch"),
                cache_dir: home.join("Library/Caches/nodeswitch"),
                data_dir: home.join("Library/Application Support/nodeswitch"),
            }
        }

        #[cfg(target_os = "windows")]
        {
            Self {
                config_dir: dirs::config_dir()
                    .expect("No config directory")
                    .join("nodeswitch"),
                cache_dir: dirs::cache_dir()
                    .expect("No cache directory")
                    .join("nodeswitch"),
                data_dir: dirs::data_dir()
                    .expect("No data directory")
                    .join("nodeswitch"),
            }
        }

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            Self {
                config_dir: dirs::config_dir()
                    .expect("No config directory")
                    .join("nodeswitch"),
                cache_dir: dirs::cache_dir()
                    .expect("No cache directory")
                    .join("nodeswitch"),
                data_dir: dirs::data_dir()
                    .expect("No data directory")
                    .join("nodeswitch"),
            }
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("nodeswitch.log")
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.cache_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
