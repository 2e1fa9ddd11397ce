mod error;
mod traits;
mod types;

pub use error::BackendError;
pub use traits::{BackendInfo, VersionManager};
pub use types::{
    CatalogEntry, InstallStatus, NodeVersion, VersionParseError, VersionRecord, UNKNOWN_NPM,
};
