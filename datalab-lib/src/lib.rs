//! Core state and domain types for the DataLab print campaign dashboard.
//!
//! Nothing in here knows about a UI toolkit. The GUI and CLI front ends both
//! drive a [`Session`], which owns the campaign list, the new campaign
//! workflow, routing and the active detail form.

use thiserror::Error;

pub mod campaign;
pub mod clock;
pub mod config;
pub mod detail;
pub mod fs;
pub mod prefix;
pub mod route;
pub mod scroll;
pub mod session;
pub mod workflow;

pub use campaign::{Campaign, CampaignList, Stage};
pub use config::{Cfg, CoreConfig};
pub use prefix::Prefix;
pub use route::{Route, Router};
pub use session::Session;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown plan name prefix '{0}'")]
    UnknownPrefix(String),
    #[error("Unknown detail tab '{0}'")]
    UnknownTab(String),
    #[error("Unknown detail field '{0}'")]
    UnknownField(String),
    #[error("No configuration directory could be determined ($HOME must exist)")]
    NoConfigHome,
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode configuration: {0}")]
    Decode(#[from] toml::de::Error),
    #[error("Failed to encode configuration: {0}")]
    Encode(#[from] toml::ser::Error),
}
