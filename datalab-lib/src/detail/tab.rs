use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::Error;

/// Tabs of the campaign detail screen. Any tab can be selected from any other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DetailTab {
    #[default]
    Metadata,
    Lolupd1p,
    FirstPass,
    Lolupd2p,
    SecondPass,
    Reports,
}

/// What a tab renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabPanel {
    Metadata,
    Placeholder(String),
}

impl DetailTab {
    /// Stable identifier, e.g. `lolupd1p`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Metadata => "Metadata",
            DetailTab::Lolupd1p => "LOLUPD (1P)",
            DetailTab::FirstPass => "First-Pass",
            DetailTab::Lolupd2p => "LOLUPD (2P)",
            DetailTab::SecondPass => "Second-Pass",
            DetailTab::Reports => "Reports",
        }
    }

    pub fn panel(self) -> TabPanel {
        match self {
            DetailTab::Metadata => TabPanel::Metadata,
            DetailTab::Lolupd1p
            | DetailTab::FirstPass
            | DetailTab::Lolupd2p
            | DetailTab::SecondPass
            | DetailTab::Reports => {
                TabPanel::Placeholder(format!("Content for {} tab coming soon...", self.key()))
            }
        }
    }
}

impl Display for DetailTab {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DetailTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DetailTab::iter()
            .find(|t| t.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownTab(s.into()))
    }
}
