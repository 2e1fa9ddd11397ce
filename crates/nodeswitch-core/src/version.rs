use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use nodeswitch_backend::{CatalogEntry, InstallStatus, NodeVersion, VersionRecord, UNKNOWN_NPM};

/// Classification of one line of `nvm ls` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Noise,
    CurrentMarker(&'a str),
    Plain(&'a str),
}

/// Classifies a single listing line. Alias arrows and the
/// default/system pseudo-entries are noise, as is any line whose first
/// token does not validate as an X.Y.Z version.
pub fn classify_line(line: &str) -> LineClass<'_> {
    let line = line.trim();

    if line.is_empty() {
        return LineClass::Blank;
    }

    if line.contains("->") || line.contains("default") || line.contains("system") {
        return LineClass::Noise;
    }

    let (is_current, rest) = match line.strip_prefix('*') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, line),
    };

    let Some(token) = rest.split_whitespace().next() else {
        // A bare marker with nothing after it.
        return LineClass::Noise;
    };

    if token.parse::<NodeVersion>().is_err() {
        return LineClass::Noise;
    }

    if is_current {
        LineClass::CurrentMarker(token)
    } else {
        LineClass::Plain(token)
    }
}

/// Strips the optional `v` prefix so versions from both `nvm` variants
/// and the remote catalog compare equal.
pub fn normalize_version(token: &str) -> String {
    let token = token.trim();
    token.strip_prefix('v').unwrap_or(token).to_string()
}

/// Parses `nvm ls` output into installed-version records, in the order
/// the tool printed them. Malformed lines are dropped, never an error.
pub fn parse_installed(output: &str) -> Vec<VersionRecord> {
    output
        .lines()
        .filter_map(|line| match classify_line(line) {
            LineClass::Blank | LineClass::Noise => None,
            LineClass::CurrentMarker(token) => Some(VersionRecord {
                version: normalize_version(token),
                is_current: true,
            }),
            LineClass::Plain(token) => Some(VersionRecord {
                version: normalize_version(token),
                is_current: false,
            }),
        })
        .collect()
}

/// Snapshot of installed version strings, taken once per
/// reconciliation pass.
pub fn installed_set(records: &[VersionRecord]) -> HashSet<String> {
    records.iter().map(|r| r.version.clone()).collect()
}

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

fn version_re() -> &'static Regex {
    VERSION_RE.get_or_init(|| Regex::new(r"\b\d+\.\d+\.\d+\b").expect("valid regex"))
}

/// Parses `nvm ls available` output into status-annotated entries. The
/// tool prints a table grouped by major release, so one line can carry
/// several versions; entries come out in line-then-match order.
pub fn parse_available_text(output: &str, installed: &HashSet<String>) -> Vec<CatalogEntry> {
    let re = version_re();
    let mut entries = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() || line.contains("CURRENT") || line.contains('-') {
            continue;
        }

        for m in re.find_iter(line) {
            let version = m.as_str().to_string();
            let status = if installed.contains(&version) {
                InstallStatus::Installed
            } else {
                InstallStatus::NotInstalled
            };
            entries.push(CatalogEntry {
                version,
                status,
                npm_version: UNKNOWN_NPM.to_string(),
            });
        }
    }

    entries
}

/// Orders entries newest-first: descending (major, minor, patch).
/// Strings that do not parse as X.Y.Z sort after all parseable ones,
/// in descending lexical order; the comparator is total.
pub fn sort_entries(entries: &mut [CatalogEntry]) {
    sort_by_version(entries, |e| &e.version);
}

/// Same ordering for installed-version records.
pub fn sort_records(records: &mut [VersionRecord]) {
    sort_by_version(records, |r| &r.version);
}

fn sort_by_version<T, F>(items: &mut [T], version_of: F)
where
    F: Fn(&T) -> &str,
{
    use std::cmp::Ordering;

    items.sort_by(|a, b| {
        let va = version_of(a).parse::<NodeVersion>();
        let vb = version_of(b).parse::<NodeVersion>();
        match (va, vb) {
            (Ok(va), Ok(vb)) => vb.cmp(&va),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => version_of(b).cmp(version_of(a)),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(versions: &[&str]) -> HashSet<String> {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_classify_blank_and_noise() {
        assert_eq!(classify_line("   "), LineClass::Blank);
        assert_eq!(classify_line("default -> 16.20.0 (-> v16.20.0)"), LineClass::Noise);
        assert_eq!(classify_line("system"), LineClass::Noise);
        assert_eq!(classify_line("*"), LineClass::Noise);
        assert_eq!(classify_line("node -> stable"), LineClass::Noise);
    }

    #[test]
    fn test_classify_versions() {
        assert_eq!(classify_line("  18.16.0"), LineClass::Plain("18.16.0"));
        assert_eq!(classify_line("* 18.16.0"), LineClass::CurrentMarker("18.16.0"));
        assert_eq!(classify_line("  v20.11.0"), LineClass::Plain("v20.11.0"));
    }

    #[test]
    fn test_classify_rejects_non_version_tokens() {
        assert_eq!(classify_line("iojs-v3.3.1"), LineClass::Noise);
        assert_eq!(classify_line("Available versions:"), LineClass::Noise);
    }

    #[test]
    fn test_parse_installed() {
        let output = " * 18.16.0\n  16.20.0\n default -> 16.20.0 (-> v16.20.0)\n";
        let records = parse_installed(output);
        assert_eq!(
            records,
            vec![
                VersionRecord {
                    version: "18.16.0".to_string(),
                    is_current: true,
                },
                VersionRecord {
                    version: "16.20.0".to_string(),
                    is_current: false,
                },
            ]
        );
    }

    #[test]
    fn test_parse_installed_strips_v_prefix() {
        let records = parse_installed("* v20.11.0\nv18.19.1\n");
        assert_eq!(records[0].version, "20.11.0");
        assert!(records[0].is_current);
        assert_eq!(records[1].version, "18.19.1");
        assert!(!records[1].is_current);
    }

    #[test]
    fn test_parse_installed_at_most_one_current() {
        let records = parse_installed("* 18.16.0\n16.20.0\n14.21.3\n");
        let current: Vec<_> = records.iter().filter(|r| r.is_current).collect();
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn test_parse_installed_empty_input() {
        assert!(parse_installed("").is_empty());
        assert!(parse_installed("\n\n   \n").is_empty());
    }

    #[test]
    fn test_parse_installed_no_marker_residue() {
        let records = parse_installed("  * 18.16.0 (Currently using 64-bit executable)\n");
        assert_eq!(records.len(), 1);
        assert!(!records[0].version.starts_with('*'));
        assert!(!records[0].version.is_empty());
    }

    #[test]
    fn test_parse_available_text() {
        let output = "   14.17.0   LTS\n   16.0.0\n";
        let entries = parse_available_text(output, &set(&["16.0.0"]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].version, "14.17.0");
        assert_eq!(entries[0].status, InstallStatus::NotInstalled);
        assert_eq!(entries[0].npm_version, "unknown");
        assert_eq!(entries[1].version, "16.0.0");
        assert_eq!(entries[1].status, InstallStatus::Installed);
    }

    #[test]
    fn test_parse_available_text_table() {
        // nvm-windows prints a table: header, separator, then several
        // versions per row grouped by release line.
        let output = "\
|   CURRENT    |     LTS      |  OLD STABLE  | OLD UNSTABLE |
|--------------|--------------|--------------|--------------|
|    21.6.1    |   20.11.0    |   0.12.18    |   0.11.16    |
|    21.6.0    |   20.10.0    |   0.12.17    |   0.11.15    |
";
        let entries = parse_available_text(output, &set(&["20.11.0"]));
        let versions: Vec<_> = entries.iter().map(|e| e.version.as_str()).collect();
        assert_eq!(
            versions,
            vec![
                "21.6.1", "20.11.0", "0.12.18", "0.11.16", "21.6.0", "20.10.0", "0.12.17",
                "0.11.15",
            ]
        );
        assert_eq!(entries[1].status, InstallStatus::Installed);
        assert_eq!(entries[0].status, InstallStatus::NotInstalled);
    }

    #[test]
    fn test_parse_available_text_idempotent() {
        let output = "|    21.6.1    |   20.11.0    |\n";
        let installed = set(&["21.6.1"]);
        let first = parse_available_text(output, &installed);
        let second = parse_available_text(output, &installed);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_entries() {
        let mut entries: Vec<CatalogEntry> = ["14.17.0", "16.0.0", "14.2.1"]
            .iter()
            .map(|v| CatalogEntry {
                version: v.to_string(),
                status: InstallStatus::NotInstalled,
                npm_version: UNKNOWN_NPM.to_string(),
            })
            .collect();
        sort_entries(&mut entries);
        let versions: Vec<_> = entries.iter().map(|e| e.version.as_str()).collect();
        assert_eq!(versions, vec!["16.0.0", "14.17.0", "14.2.1"]);
    }

    #[test]
    fn test_sort_entries_unparseable_sort_last() {
        let mut entries: Vec<CatalogEntry> = ["garbage", "16.0.0", "other", "18.2.0"]
            .iter()
            .map(|v| CatalogEntry {
                version: v.to_string(),
                status: InstallStatus::NotInstalled,
                npm_version: UNKNOWN_NPM.to_string(),
            })
            .collect();
        sort_entries(&mut entries);
        let versions: Vec<_> = entries.iter().map(|e| e.version.as_str()).collect();
        assert_eq!(versions, vec!["18.2.0", "16.0.0", "other", "garbage"]);
    }

    #[test]
    fn test_sort_records() {
        let mut records = parse_installed("14.21.3\n* 18.16.0\n16.20.0\n");
        sort_records(&mut records);
        let versions: Vec<_> = records.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["18.16.0", "16.20.0", "14.21.3"]);
    }

    #[test]
    fn test_installed_set() {
        let records = parse_installed("* 18.16.0\n16.20.0\n");
        let installed = installed_set(&records);
        assert!(installed.contains("18.16.0"));
        assert!(installed.contains("16.20.0"));
        assert_eq!(installed.len(), 2);
    }
}
