use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sentinel npm version for catalog entries built from plain-text tool
/// output, which carries no npm information.
pub const UNKNOWN_NPM: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl NodeVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Ord for NodeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }
}

impl PartialOrd for NodeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone)]
pub struct VersionParseError(pub String);

impl fmt::Display for VersionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse version: {}", self.0)
    }
}

impl std::error::Error for VersionParseError {}

impl FromStr for NodeVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('v').unwrap_or(s);
        let parts: Vec<&str> = s.split('.').collect();

        // Exactly three components; "18.16" and "18.16.0.1" are both
        // rejected rather than silently truncated.
        if parts.len() != 3 {
            return Err(VersionParseError(format!(
                "Expected X.Y.Z format, got: {}",
                s
            )));
        }

        let major = parts[0]
            .parse()
            .map_err(|_| VersionParseError(format!("Invalid major version: {}", parts[0])))?;
        let minor = parts[1]
            .parse()
            .map_err(|_| VersionParseError(format!("Invalid minor version: {}", parts[1])))?;
        let patch = parts[2]
            .parse()
            .map_err(|_| VersionParseError(format!("Invalid patch version: {}", parts[2])))?;

        Ok(NodeVersion::new(major, minor, patch))
    }
}

/// One locally installed runtime, as reported by the external tool.
/// Rebuilt on every listing query; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallStatus {
    Installed,
    NotInstalled,
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallStatus::Installed => write!(f, "Installed"),
            InstallStatus::NotInstalled => write!(f, "Not Installed"),
        }
    }
}

/// One entry in the merged "all known versions" listing, annotated with
/// local installation status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub version: String,
    pub status: InstallStatus,
    pub npm_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        let v: NodeVersion = "v20.11.0".parse().unwrap();
        assert_eq!(v.major, 20);
        assert_eq!(v.minor, 11);
        assert_eq!(v.patch, 0);
    }

    #[test]
    fn test_parse_version_without_prefix() {
        let v: NodeVersion = "18.16.0".parse().unwrap();
        assert_eq!(v, NodeVersion::new(18, 16, 0));
    }

    #[test]
    fn test_parse_rejects_short_and_long_forms() {
        assert!("18.16".parse::<NodeVersion>().is_err());
        assert!("18.16.0.1".parse::<NodeVersion>().is_err());
        assert!("latest".parse::<NodeVersion>().is_err());
        assert!("".parse::<NodeVersion>().is_err());
    }

    #[test]
    fn test_version_ordering() {
        let v1: NodeVersion = "v18.0.0".parse().unwrap();
        let v2: NodeVersion = "v20.0.0".parse().unwrap();
        assert!(v2 > v1);

        let a: NodeVersion = "14.2.1".parse().unwrap();
        let b: NodeVersion = "14.17.0".parse().unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_display_has_no_prefix() {
        let v = NodeVersion::new(20, 11, 0);
        assert_eq!(v.to_string(), "20.11.0");
    }
}
