mod backend;
mod catalog;
mod client;
mod detection;
mod source;
mod version;

pub use backend::NvmBackend;
pub use catalog::{annotate_catalog, fetch_catalog, DistRelease, Lts, CATALOG_URL};
pub use client::{NvmClient, NvmEnvironment};
pub use detection::{detect_nvm, detect_nvm_at, NvmDetection, NvmVariant};
pub use source::{resolve_available, AvailableSource, CatalogSource, NvmListSource};
pub use version::{
    classify_line, installed_set, normalize_version, parse_available_text, parse_installed,
    sort_entries, sort_records, LineClass,
};

pub use nodeswitch_backend::{
    BackendError, BackendInfo, CatalogEntry, InstallStatus, NodeVersion, VersionManager,
    VersionParseError, VersionRecord, UNKNOWN_NPM,
};
