//! Run configuration for a scan.

use std::path::PathBuf;

/// File names skipped by default: sidecars written by file managers.
pub const DEFAULT_IGNORES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Everything one `fix` run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory scanned recursively.
    pub root: PathBuf,
    /// File name suffixes that are never processed.
    pub ignore: Vec<String>,
    /// Report corrections without writing them.
    pub dry_run: bool,
}

impl ScanConfig {
    /// Creates a config for `root` with the default ignore list.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore: DEFAULT_IGNORES.iter().map(ToString::to_string).collect(),
            dry_run: false,
        }
    }

    /// Replaces the ignore list.
    #[must_use]
    pub fn with_ignores(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    /// Adds patterns to the ignore list.
    #[must_use]
    pub fn ignoring(mut self, extra: impl IntoIterator<Item = String>) -> Self {
        self.ignore.extend(extra);
        self
    }

    /// Sets dry-run mode.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_ignore_sidecar_files() {
        let config = ScanConfig::new("/photos");
        assert_eq!(config.root, PathBuf::from("/photos"));
        assert!(config.ignore.iter().any(|name| name == ".DS_Store"));
        assert!(!config.dry_run);
    }

    #[test]
    fn builders_compose() {
        let config = ScanConfig::new("/photos")
            .with_ignores(Vec::new())
            .ignoring(vec![".xmp".to_string()])
            .dry_run(true);
        assert_eq!(config.ignore, vec![".xmp".to_string()]);
        assert!(config.dry_run);
    }
}
