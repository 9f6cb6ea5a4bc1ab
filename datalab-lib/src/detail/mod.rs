//! State behind the campaign detail screen.

use getset::{CopyGetters, Getters};
use tracing::{debug, info};

mod field;
mod tab;

pub use field::{CampaignDetailForm, DetailField, FieldKind};
pub use tab::{DetailTab, TabPanel};

/// The identifier shown when the detail route carries no campaign name.
pub const FALLBACK_CAMPAIGN_ID: &str = "BOG5101";

/// One campaign's detail view: the selected tab and the metadata form.
///
/// Nothing here is persisted. Save and Submit only log the form.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct CampaignDetail {
    #[getset(get = "pub")]
    id: String,
    #[getset(get_copy = "pub")]
    active_tab: DetailTab,
    #[getset(get = "pub")]
    form: CampaignDetailForm,
}

impl CampaignDetail {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            active_tab: DetailTab::default(),
            form: CampaignDetailForm::default(),
        }
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        debug!("Selected tab {} on {}", tab.key(), self.id);
        self.active_tab = tab;
    }

    pub fn set_field(&mut self, field: DetailField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn save(&self) {
        info!(campaign = %self.id, form = ?self.form, "Save campaign");
    }

    pub fn submit(&self) {
        info!(campaign = %self.id, form = ?self.form, "Submit campaign");
    }
}
