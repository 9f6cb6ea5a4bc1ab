use std::fmt::{self, Display, Formatter};

use tracing::debug;

use crate::detail::FALLBACK_CAMPAIGN_ID;

const DETAIL_PREFIX: &str = "/campaign";

/// A page of the dashboard, addressable by path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`, the print campaign list
    #[default]
    Campaigns,
    /// `/campaign/{id}`
    CampaignDetail(String),
    NotFound(String),
}

impl Route {
    /// Map a path onto a page. `/campaign` without an identifier shows the fallback campaign.
    /// One trailing slash is ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            return Route::Campaigns;
        }

        match path.strip_prefix(DETAIL_PREFIX) {
            Some("") => Route::CampaignDetail(FALLBACK_CAMPAIGN_ID.into()),
            Some(rest) => match rest.strip_prefix('/') {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::CampaignDetail(id.into())
                }
                _ => Route::NotFound(path.into()),
            },
            None => Route::NotFound(path.into()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Campaigns => "/".into(),
            Route::CampaignDetail(id) => format!("{DETAIL_PREFIX}/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn detail(id: impl Into<String>) -> Self {
        Route::CampaignDetail(id.into())
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Navigation history. The root page can never be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    root: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Campaigns)
    }
}

impl Router {
    pub fn new(root: Route) -> Self {
        Self {
            root,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        self.history.last().unwrap_or(&self.root)
    }

    pub fn navigate(&mut self, route: Route) {
        debug!("Navigating to {route}");
        self.history.push(route);
    }

    /// Go back one page. Returns `false` if already at the root.
    pub fn back(&mut self) -> bool {
        let popped = self.history.pop().is_some();
        debug!("Navigated back to {}", self.current());
        popped
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
