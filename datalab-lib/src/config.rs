use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::format::{Item, StrftimeItems};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Result, campaign::DEFAULT_DATE_FORMAT, fs::config_dir};

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "datalab.toml";

/// Handle to the core configuration, shared between the session and the front ends.
pub type Cfg = Arc<RwLock<CoreConfig>>;

/// Core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub version: u16,
    /// Display name recorded as the last editor of campaigns created in this session
    pub modified_by: String,
    /// `chrono` format string used when rendering modification dates
    pub date_format: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            modified_by: "Current User".into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
        }
    }
}

impl CoreConfig {
    /// Load the configuration from the default location, writing defaults if it is missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load the configuration from `path`. A missing file is created with defaults, an
    /// unreadable one falls back to defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let mut cfg: Self = toml::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring malformed {}: {e}", path.display());
                Self::default()
            });

            if !is_valid_date_format(&cfg.date_format) {
                warn!(
                    "Ignoring invalid date_format '{}' in {}",
                    cfg.date_format,
                    path.display()
                );
                cfg.date_format = DEFAULT_DATE_FORMAT.into();
            }

            Ok(cfg)
        } else {
            let cfg = Self::default();
            cfg.save_to(path)?;
            Ok(cfg)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        debug!("Wrote configuration to {}", path.display());

        Ok(())
    }

    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(FILE_NAME))
    }

    pub fn shared(self) -> Cfg {
        Arc::new(RwLock::new(self))
    }
}

fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_creates_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg, CoreConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let cfg = CoreConfig {
            modified_by: "Nick".into(),
            ..Default::default()
        };
        cfg.save_to(&path).unwrap();

        assert_eq!(CoreConfig::load_from(&path).unwrap().modified_by, "Nick");
    }

    #[test]
    fn test_malformed_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "modified_by = [").unwrap();

        assert_eq!(CoreConfig::load_from(&path).unwrap(), CoreConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "modified_by = \"Skip\"\n").unwrap();

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg.modified_by, "Skip");
        assert_eq!(cfg.date_format, "%m/%d/%Y");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "modified_by = \"Skip\"\ndate_format = \"%Q\"\n").unwrap();

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg.modified_by, "Skip");
        assert_eq!(cfg.date_format, "%m/%d/%Y");
    }

    #[test]
    fn test_date_format_validation() {
        assert!(is_valid_date_format("%m/%d/%Y"));
        assert!(is_valid_date_format("%d %B %Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%Y-%"));
    }
}
