use tracing::{debug, info};

use crate::{
    Campaign, CampaignList, Cfg, Prefix, Route, Router, Stage,
    clock::{Clock, LocalClock},
    detail::{CampaignDetail, DetailField, DetailTab},
    scroll::ScrollLock,
    workflow::{DraftCampaign, NewCampaignWorkflow, Outcome, SuffixSource, ThreadRngSuffix},
};

/// All state of a running dashboard, owned by the top-level screen.
///
/// The campaign list, the new campaign workflow, navigation and the detail form are only
/// changed through the methods here. That keeps the side effects (scroll locking, appending
/// submitted campaigns, routing to the new campaign) in one place.
#[derive(Debug)]
pub struct Session {
    cfg: Cfg,
    campaigns: CampaignList,
    drafts: Vec<DraftCampaign>,
    workflow: NewCampaignWorkflow,
    scroll: ScrollLock,
    router: Router,
    detail: Option<CampaignDetail>,
    clock: Box<dyn Clock>,
}

impl Session {
    /// A session over the sample campaigns, with random plan names and the local clock.
    pub fn new(cfg: Cfg) -> Self {
        Self::with_sources(
            cfg,
            CampaignList::seeded(),
            Box::new(ThreadRngSuffix),
            Box::new(LocalClock),
        )
    }

    pub fn with_sources(
        cfg: Cfg,
        campaigns: CampaignList,
        suffixes: Box<dyn SuffixSource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            cfg,
            campaigns,
            drafts: Vec::new(),
            workflow: NewCampaignWorkflow::new(suffixes),
            scroll: ScrollLock::default(),
            router: Router::default(),
            detail: None,
            clock,
        }
    }

    pub fn cfg(&self) -> &Cfg {
        &self.cfg
    }

    pub fn campaigns(&self) -> &CampaignList {
        &self.campaigns
    }

    /// Drafts saved from the new campaign modal, oldest first.
    pub fn drafts(&self) -> &[DraftCampaign] {
        &self.drafts
    }

    pub fn workflow(&self) -> &NewCampaignWorkflow {
        &self.workflow
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The detail form for the current route, if it is a campaign detail route.
    pub fn detail(&self) -> Option<&CampaignDetail> {
        self.detail.as_ref()
    }

    /// First year offered by the issue year select on the detail form.
    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    /// Render a campaign's modification date with the configured format.
    pub fn format_date(&self, campaign: &Campaign) -> String {
        campaign.last_modified_display(&self.cfg.read().date_format)
    }

    // New campaign workflow

    pub fn open_new_campaign(&mut self) -> Outcome {
        let outcome = self.workflow.open();
        self.apply(outcome)
    }

    pub fn select_prefix(&mut self, prefix: Option<Prefix>) -> Outcome {
        let outcome = self.workflow.select_prefix(prefix);
        self.apply(outcome)
    }

    pub fn edit_plan_name(&mut self, plan_name: impl Into<String>) -> Outcome {
        let outcome = self.workflow.edit_plan_name(plan_name);
        self.apply(outcome)
    }

    /// Validate and submit the draft. On success the campaign is appended to the list and the
    /// session routes to its detail page.
    pub fn submit_new_campaign(&mut self) -> Outcome {
        let outcome = self.workflow.submit();
        self.apply(outcome)
    }

    pub fn save_draft(&mut self) -> Outcome {
        let outcome = self.workflow.save_draft();
        self.apply(outcome)
    }

    /// Close the modal without saving. Cancel, escape and clicking outside all end up here.
    pub fn close_new_campaign(&mut self) -> Outcome {
        let outcome = self.workflow.close();
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Outcome) -> Outcome {
        match &outcome {
            Outcome::Opened => self.scroll.acquire(),
            Outcome::Submitted(new) => {
                let campaign = Campaign::new(
                    new.plan_name.clone(),
                    Stage::initial(),
                    self.clock.today(),
                    self.cfg.read().modified_by.clone(),
                );
                info!("Created campaign {}", campaign.name());
                self.campaigns.push(campaign);
            }
            Outcome::Drafted(draft) => {
                info!(prefix = ?draft.prefix, plan_name = %draft.plan_name, "Saved campaign draft");
                self.drafts.push(draft.clone());
            }
            Outcome::Ignored | Outcome::Updated | Outcome::Rejected(_) | Outcome::Closed => {}
        }

        if outcome.is_exit() {
            self.scroll.release();
        }

        if let Outcome::Submitted(new) = &outcome {
            self.navigate(Route::detail(new.plan_name.clone()));
        }

        outcome
    }

    // Campaign list

    /// Remove the first campaign called `name`. Unknown names are ignored.
    pub fn remove_campaign(&mut self, name: &str) -> Option<Campaign> {
        self.campaigns.remove_by_name(name)
    }

    // Navigation

    /// Switch pages. Any open modal is closed first and the detail form is rebuilt for the new
    /// route, discarding unsaved edits.
    pub fn navigate(&mut self, route: Route) {
        if self.workflow.is_open() {
            self.close_new_campaign();
        }

        self.router.navigate(route);
        self.sync_detail();
    }

    pub fn open_campaign(&mut self, name: &str) {
        self.navigate(Route::detail(name));
    }

    pub fn back(&mut self) -> bool {
        if self.workflow.is_open() {
            self.close_new_campaign();
        }

        let moved = self.router.back();
        self.sync_detail();
        moved
    }

    fn sync_detail(&mut self) {
        self.detail = match self.router.current() {
            Route::CampaignDetail(id) => Some(CampaignDetail::new(id.clone())),
            Route::Campaigns | Route::NotFound(_) => None,
        };
    }

    // Campaign detail

    pub fn select_tab(&mut self, tab: DetailTab) {
        if let Some(detail) = self.detail.as_mut() {
            detail.select_tab(tab);
        }
    }

    pub fn set_detail_field(&mut self, field: DetailField, value: impl Into<String>) {
        if let Some(detail) = self.detail.as_mut() {
            detail.set_field(field, value);
        }
    }

    pub fn save_detail(&self) {
        match &self.detail {
            Some(detail) => detail.save(),
            None => debug!("Save requested outside of a campaign detail page"),
        }
    }

    pub fn submit_detail(&self) {
        match &self.detail {
            Some(detail) => detail.submit(),
            None => debug!("Submit requested outside of a campaign detail page"),
        }
    }

    /// Leave the detail page without saving.
    pub fn cancel_detail(&mut self) -> bool {
        self.back()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        CoreConfig,
        clock::FixedClock,
        workflow::{FormField, SequenceSuffix},
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn session(suffix: u16) -> Session {
        Session::with_sources(
            CoreConfig::default().shared(),
            CampaignList::seeded(),
            Box::new(SequenceSuffix::fixed(suffix)),
            Box::new(FixedClock(today())),
        )
    }

    #[test]
    fn test_submit_appends_and_routes() {
        let mut session = session(4242);
        assert_eq!(session.campaigns().len(), 5);

        session.open_new_campaign();
        session.select_prefix(Some(Prefix::Lte));
        assert_eq!(session.workflow().plan_name(), "LTE4242");

        let outcome = session.submit_new_campaign();
        assert!(matches!(outcome, Outcome::Submitted(_)));

        assert_eq!(session.campaigns().len(), 6);
        let added = session.campaigns().last().unwrap();
        assert_eq!(added.name(), "LTE4242");
        assert_eq!(added.stage(), &Stage::initial());
        assert_eq!(added.last_modified(), today());
        assert_eq!(added.modified_by(), "Current User");

        assert!(!session.workflow().is_open());
        assert_eq!(session.route(), &Route::detail("LTE4242"));
        assert_eq!(session.detail().unwrap().id(), "LTE4242");
    }

    #[test]
    fn test_submit_with_random_suffix() {
        let mut session = Session::new(CoreConfig::default().shared());

        session.open_new_campaign();
        session.select_prefix(Some(Prefix::Lte));
        let generated = session.workflow().plan_name().to_string();
        session.submit_new_campaign();

        let added = session.campaigns().last().unwrap();
        assert_eq!(session.campaigns().len(), 6);
        assert_eq!(added.name(), &generated);
        assert_eq!(added.stage().as_str(), "Metadata");
        assert!(generated.starts_with("LTE"));
        assert_eq!(generated.len(), 7);
    }

    #[test]
    fn test_submit_without_prefix() {
        let mut session = session(1000);
        session.open_new_campaign();

        let Outcome::Rejected(errors) = session.submit_new_campaign() else {
            panic!("expected rejection");
        };

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(FormField::Prefix).as_deref(),
            Some("Please select a prefix")
        );
        assert_eq!(session.campaigns().len(), 5);
        assert!(session.workflow().is_open());
        assert!(session.is_scroll_locked());
        assert_eq!(session.route(), &Route::Campaigns);
    }

    #[test]
    fn test_cancel_resets() {
        let mut session = session(1000);
        session.open_new_campaign();
        session.select_prefix(Some(Prefix::Mt));

        assert_eq!(session.close_new_campaign(), Outcome::Closed);
        assert_eq!(session.campaigns().len(), 5);

        session.open_new_campaign();
        assert_eq!(session.workflow().prefix(), None);
        assert_eq!(session.workflow().plan_name(), "");
    }

    #[test]
    fn test_save_draft_records_and_closes() {
        let mut session = session(1000);

        session.open_new_campaign();
        assert!(matches!(session.save_draft(), Outcome::Drafted(_)));

        session.open_new_campaign();
        session.select_prefix(Some(Prefix::Bog));
        session.save_draft();

        assert_eq!(session.drafts().len(), 2);
        assert_eq!(session.drafts().first().unwrap().prefix, None);
        assert_eq!(session.drafts().last().unwrap().plan_name, "BOG1000");
        assert_eq!(session.campaigns().len(), 5);
        assert_eq!(session.route(), &Route::Campaigns);
        assert!(!session.workflow().is_open());
    }

    #[test]
    fn test_scroll_lock_released_on_every_exit() {
        let exits: [fn(&mut Session) -> Outcome; 3] = [
            |s| {
                s.select_prefix(Some(Prefix::M));
                s.submit_new_campaign()
            },
            Session::save_draft,
            Session::close_new_campaign,
        ];

        for exit in exits {
            let mut session = session(1000);

            session.open_new_campaign();
            assert!(session.is_scroll_locked());

            assert!(exit(&mut session).is_exit());
            assert!(!session.is_scroll_locked());
        }
    }

    #[test]
    fn test_rejected_submit_keeps_lock() {
        let mut session = session(1000);
        session.open_new_campaign();
        session.submit_new_campaign();

        assert!(session.is_scroll_locked());

        session.close_new_campaign();
        assert!(!session.is_scroll_locked());
    }

    #[test]
    fn test_open_twice_single_lock() {
        let mut session = session(1000);

        assert_eq!(session.open_new_campaign(), Outcome::Opened);
        assert_eq!(session.open_new_campaign(), Outcome::Ignored);

        session.close_new_campaign();
        assert!(!session.is_scroll_locked());
    }

    #[test]
    fn test_navigating_closes_modal() {
        let mut session = session(1000);
        session.open_new_campaign();

        session.open_campaign("BOG4006");

        assert!(!session.workflow().is_open());
        assert!(!session.is_scroll_locked());
        assert_eq!(session.detail().unwrap().id(), "BOG4006");
    }

    #[test]
    fn test_remove_campaign() {
        let mut session = session(1000);

        assert!(session.remove_campaign("BOG4006").is_some());
        assert!(session.remove_campaign("BOG4006").is_none());
        assert_eq!(session.campaigns().len(), 4);
    }

    #[test]
    fn test_detail_edits_discarded_on_navigation() {
        let mut session = session(1000);
        session.open_campaign("MT3876");
        session.select_tab(DetailTab::Reports);
        session.set_detail_field(DetailField::Entity, "UK");

        assert_eq!(
            session.detail().unwrap().form().get(DetailField::Entity),
            "UK"
        );

        assert!(session.cancel_detail());
        assert!(session.detail().is_none());
        assert_eq!(session.route(), &Route::Campaigns);

        session.open_campaign("MT3876");
        let detail = session.detail().unwrap();
        assert_eq!(detail.form().get(DetailField::Entity), "US");
        assert_eq!(detail.active_tab(), DetailTab::Metadata);
    }

    #[test]
    fn test_fallback_detail_route() {
        let mut session = session(1000);

        session.navigate(Route::parse("/campaign"));

        assert_eq!(session.detail().unwrap().id(), "BOG5101");
    }

    #[test]
    fn test_format_date_uses_config() {
        let cfg = CoreConfig {
            date_format: "%Y-%m-%d".into(),
            ..Default::default()
        };
        let session = Session::with_sources(
            cfg.shared(),
            CampaignList::seeded(),
            Box::new(SequenceSuffix::fixed(1000)),
            Box::new(FixedClock(today())),
        );

        let first = session.campaigns().first().unwrap();
        assert_eq!(session.format_date(first), "2025-08-08");
        assert_eq!(session.current_year(), 2026);
    }

    #[test]
    fn test_format_date_with_invalid_format() {
        let cfg = CoreConfig {
            date_format: "%Q".into(),
            ..Default::default()
        };
        let session = Session::new(cfg.shared());

        let first = session.campaigns().first().unwrap();
        assert_eq!(session.format_date(first), "08/08/2025");
    }
}
