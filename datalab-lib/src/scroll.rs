use tracing::{trace, warn};

/// Tracks whether the page behind a modal may scroll.
///
/// Every [`acquire`](ScrollLock::acquire) must be paired with a
/// [`release`](ScrollLock::release). The page stays locked while any holder remains.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrollLock {
    holders: u32,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.holders = self.holders.saturating_add(1);
        trace!(holders = self.holders, "Page scroll locked");
    }

    pub fn release(&mut self) {
        if self.holders == 0 {
            warn!("Released a scroll lock that was never acquired");
            return;
        }

        self.holders = self.holders.saturating_sub(1);
        trace!(holders = self.holders, "Page scroll released");
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }
}
