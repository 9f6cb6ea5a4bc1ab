use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use datalab_lib::fs::config_dir;
use iced::Task;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use tracing::{debug, warn};

use crate::components::campaign_list::state::SortState;

pub use theme::Theme;

mod theme;

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "gui.toml";

/// Handle to the GUI's configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// The GUI's configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub version: u16,
    pub theme: Theme,
    pub campaign_list: CampaignList,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignList {
    /// `None` keeps campaigns in insertion order
    pub sort_state: Option<SortState>,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            theme: Theme::default(),
            campaign_list: CampaignList::default(),
        }
    }
}

impl GuiConfig {
    /// Load from the default location. Any failure is logged and the defaults are used.
    pub fn load() -> Self {
        match Self::path().and_then(|path| Self::load_from(&path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Using default GUI configuration: {e}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> datalab_lib::Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring malformed {}: {e}", path.display());
                Self::default()
            }))
        } else {
            let cfg = Self::default();
            cfg.save_to(path)?;
            Ok(cfg)
        }
    }

    pub fn save(&self) -> datalab_lib::Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> datalab_lib::Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        debug!("Wrote GUI configuration to {}", path.display());

        Ok(())
    }

    pub fn path() -> datalab_lib::Result<PathBuf> {
        Ok(config_dir()?.join(FILE_NAME))
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

/// Write the current configuration to disk off the UI thread.
pub fn persist(cfg: &Cfg) -> Task<Result<(), String>> {
    let snapshot = cfg.read().clone();

    Task::perform(
        async move {
            spawn_blocking(move || snapshot.save().map_err(|e| e.to_string()))
                .await
                .map_err(|e| e.to_string())?
        },
        |result| result,
    )
}
