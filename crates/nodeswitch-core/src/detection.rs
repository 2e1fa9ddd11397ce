use std::path::PathBuf;

use nodeswitch_backend::BackendInfo;

use crate::client::NvmClient;

#[derive(Debug, Clone, PartialEq)]
pub enum NvmVariant {
    Unix,
    Windows,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct NvmDetection {
    pub found: bool,
    pub nvm_dir: Option<PathBuf>,
    pub nvm_exe: Option<PathBuf>,
    pub version: Option<String>,
    pub in_path: bool,
    pub variant: NvmVariant,
}

impl NvmDetection {
    pub fn client(&self) -> Option<NvmClient> {
        match self.variant {
            NvmVariant::Unix => self.nvm_dir.clone().map(NvmClient::unix),
            NvmVariant::Windows => self.nvm_exe.clone().map(NvmClient::windows),
            NvmVariant::NotFound => None,
        }
    }

    pub fn backend_info(&self) -> Option<BackendInfo> {
        let path = match self.variant {
            NvmVariant::Unix => self.nvm_dir.clone()?,
            NvmVariant::Windows => self.nvm_exe.clone()?,
            NvmVariant::NotFound => return None,
        };
        Some(BackendInfo {
            name: "nvm",
            path,
            version: self.version.clone(),
            in_path: self.in_path,
        })
    }
}

pub async fn detect_nvm() -> NvmDetection {
    if let Some(detection) = detect_unix_nvm().await {
        return detection;
    }

    if let Some(detection) = detect_windows_nvm().await {
        return detection;
    }

    NvmDetection {
        found: false,
        nvm_dir: None,
        nvm_exe: None,
        version: None,
        in_path: false,
        variant: NvmVariant::NotFound,
    }
}

/// Probes an explicitly configured nvm directory instead of searching.
pub async fn detect_nvm_at(nvm_dir: PathBuf) -> Option<NvmDetection> {
    if !nvm_dir.join("nvm.sh").exists() {
        return None;
    }

    let client = NvmClient::unix(nvm_dir.clone());
    let version = client.version().await.ok();

    Some(NvmDetection {
        found: true,
        nvm_dir: Some(nvm_dir),
        nvm_exe: None,
        version,
        in_path: false,
        variant: NvmVariant::Unix,
    })
}

async fn detect_unix_nvm() -> Option<NvmDetection> {
    let nvm_dir = find_unix_nvm_dir()?;

    let client = NvmClient::unix(nvm_dir.clone());
    let version = client.version().await.ok();

    Some(NvmDetection {
        found: true,
        nvm_dir: Some(nvm_dir),
        nvm_exe: None,
        version,
        in_path: false,
        variant: NvmVariant::Unix,
    })
}

fn find_unix_nvm_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("NVM_DIR") {
        let path = PathBuf::from(&dir);
        if path.join("nvm.sh").exists() {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let default = home.join(".nvm");
        if default.join("nvm.sh").exists() {
            return Some(default);
        }
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("nvm");
        if path.join("nvm.sh").exists() {
            return Some(path);
        }
    }

    None
}

async fn detect_windows_nvm() -> Option<NvmDetection> {
    if let Ok(path) = which::which("nvm") {
        let client = NvmClient::windows(path.clone());
        let version = client.version().await.ok();
        return Some(NvmDetection {
            found: true,
            nvm_dir: None,
            nvm_exe: Some(path),
            version,
            in_path: true,
            variant: NvmVariant::Windows,
        });
    }

    for path in get_windows_nvm_paths() {
        if path.exists() {
            let client = NvmClient::windows(path.clone());
            let version = client.version().await.ok();
            return Some(NvmDetection {
                found: true,
                nvm_dir: None,
                nvm_exe: Some(path),
                version,
                in_path: false,
                variant: NvmVariant::Windows,
            });
        }
    }

    None
}

fn get_windows_nvm_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(home) = std::env::var("NVM_HOME") {
        paths.push(PathBuf::from(&home).join("nvm.exe"));
    }

    if let Ok(appdata) = std::env::var("APPDATA") {
        paths.push(PathBuf::from(&appdata).join("nvm").join("nvm.exe"));
    }

    if let Ok(pf) = std::env::var("ProgramFiles") {
        paths.push(PathBuf::from(&pf).join("nvm").join("nvm.exe"));
    }

    paths
}
