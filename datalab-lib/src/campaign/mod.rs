//! Campaign records and the ordered list the dashboard displays.

use std::fmt::Write;

use chrono::NaiveDate;
use derive_more::Deref;
use getset::{CopyGetters, Getters};
use tracing::{debug, info, warn};

mod stage;

pub use stage::{KNOWN_STAGES, Stage, StageCount, Summary, Tone};

/// Month/day/year, used when no valid format is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// A single row in the print campaign table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Campaign {
    /// Display identifier, also the key of the campaign's detail route
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    stage: Stage,
    #[getset(get_copy = "pub")]
    last_modified: NaiveDate,
    #[getset(get = "pub")]
    modified_by: String,
}

impl Campaign {
    pub fn new(
        name: impl Into<String>,
        stage: impl Into<Stage>,
        last_modified: NaiveDate,
        modified_by: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            stage: stage.into(),
            last_modified,
            modified_by: modified_by.into(),
        }
    }

    /// Render the modification date with a `chrono` format string. An invalid format falls
    /// back to [`DEFAULT_DATE_FORMAT`].
    pub fn last_modified_display(&self, format: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.last_modified.format(format)).is_ok() {
            return out;
        }

        warn!("Invalid date format '{format}', using {DEFAULT_DATE_FORMAT}");
        self.last_modified.format(DEFAULT_DATE_FORMAT).to_string()
    }
}

/// The ordered campaigns held by a session.
///
/// New campaigns are appended, the list itself is never re-ordered. Names are expected to be
/// unique but this isn't enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct CampaignList {
    #[deref]
    campaigns: Vec<Campaign>,
}

impl CampaignList {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self { campaigns }
    }

    /// The sample campaigns the dashboard starts with.
    pub fn seeded() -> Self {
        let date = NaiveDate::from_ymd_opt(2025, 8, 8).unwrap_or_default();

        Self::new(vec![
            Campaign::new("LTE3901", stage::METADATA, date, "Skip"),
            Campaign::new("MT3876", stage::LOLUPD_2P, date, "Skip"),
            Campaign::new("M3991", stage::FIRST_PASS_EXECUTED, date, "Skip"),
            Campaign::new("BOG4006", stage::SECOND_PASS_EXECUTED, date, "Nick"),
            Campaign::new("LTH4007", stage::OUTPUT_SENT, date, "Nick"),
        ])
    }

    /// Append a campaign to the end of the list.
    pub fn push(&mut self, campaign: Campaign) {
        debug!("Added campaign: {}", campaign.name());
        self.campaigns.push(campaign);
    }

    /// Remove the first campaign called `name`. Does nothing if there is no such campaign.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Campaign> {
        info!("Delete requested for campaign: {name}");

        let index = self.campaigns.iter().position(|c| c.name == name)?;
        let removed = self.campaigns.remove(index);

        debug!("Removed campaign: {name}");

        Some(removed)
    }

    pub fn get(&self, name: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.name == name)
    }

    /// Campaigns whose name contains `query`, ignoring case. An empty query matches everything.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Campaign> + use<'a> {
        let query = query.trim().to_lowercase();
        self.campaigns
            .iter()
            .filter(move |c| c.name.to_lowercase().contains(&query))
    }

    pub fn summary(&self) -> Summary {
        let stages = KNOWN_STAGES
            .iter()
            .map(|&(label, tone)| StageCount {
                stage: label,
                count: self
                    .campaigns
                    .iter()
                    .filter(|c| c.stage.as_str() == label)
                    .count(),
                tone,
            })
            .collect();

        Summary {
            total: self.campaigns.len(),
            stages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
    }

    #[test]
    fn test_seeded() {
        let list = CampaignList::seeded();

        assert_eq!(list.len(), 5);
        assert_eq!(list.first().unwrap().name(), "LTE3901");
        assert_eq!(list.last().unwrap().stage().as_str(), "Output Sent");
    }

    #[test]
    fn test_push_appends() {
        let mut list = CampaignList::seeded();

        list.push(Campaign::new("AAA0001", Stage::initial(), date(), "Me"));

        assert_eq!(list.len(), 6);
        assert_eq!(list.last().unwrap().name(), "AAA0001");
    }

    #[test]
    fn test_remove_by_name() {
        let mut list = CampaignList::seeded();

        let removed = list.remove_by_name("M3991").unwrap();

        assert_eq!(removed.name(), "M3991");
        assert_eq!(list.len(), 4);
        assert!(list.get("M3991").is_none());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list = CampaignList::seeded();

        assert!(list.remove_by_name("NOPE0000").is_none());
        assert_eq!(list, CampaignList::seeded());
    }

    #[test]
    fn test_remove_first_duplicate_only() {
        let mut list = CampaignList::default();
        list.push(Campaign::new("BOG1111", "Metadata", date(), "A"));
        list.push(Campaign::new("BOG1111", "Output Sent", date(), "B"));

        list.remove_by_name("BOG1111");

        assert_eq!(list.len(), 1);
        assert_eq!(list.first().unwrap().modified_by(), "B");
    }

    #[test]
    fn test_search() {
        let list = CampaignList::seeded();

        let names: Vec<&str> = list.search("m").map(|c| c.name().as_str()).collect();
        assert_eq!(names, ["MT3876", "M3991"]);

        assert_eq!(list.search("").count(), 5);
        assert_eq!(list.search("  lte ").count(), 1);
    }

    #[test]
    fn test_summary() {
        let summary = CampaignList::seeded().summary();

        assert_eq!(summary.total, 5);

        let counts: Vec<(&str, usize)> =
            summary.stages.iter().map(|s| (s.stage, s.count)).collect();
        assert_eq!(
            counts,
            [
                ("Metadata", 1),
                ("LOLUPD(1P)", 0),
                ("1P Executed", 1),
                ("LOLUPD(2P)", 1),
                ("2P Executed", 1),
                ("Output Sent", 1),
            ]
        );
    }

    #[test]
    fn test_summary_ignores_unknown_stages() {
        let mut list = CampaignList::default();
        list.push(Campaign::new("X1000", "Archived", date(), "A"));

        let summary = list.summary();

        assert_eq!(summary.total, 1);
        assert!(summary.stages.iter().all(|s| s.count == 0));
    }

    #[test]
    fn test_last_modified_display() {
        let campaign = CampaignList::seeded().first().cloned().unwrap();

        assert_eq!(campaign.last_modified_display("%m/%d/%Y"), "08/08/2025");
        assert_eq!(campaign.last_modified_display("%Y-%m-%d"), "2025-08-08");
    }

    #[test]
    fn test_last_modified_display_invalid_format() {
        let campaign = CampaignList::seeded().first().cloned().unwrap();

        assert_eq!(campaign.last_modified_display("%Q"), "08/08/2025");
        assert_eq!(campaign.last_modified_display("%Y-%"), "08/08/2025");
    }
}
