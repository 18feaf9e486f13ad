//! Subscription screen state: billing toggle and the upgrade dialog.

use storyboard::catalog::BillingCycle;
use storyboard::plan::PlanTier;

#[derive(Clone, Debug, Default)]
pub struct SubscriptionState {
    pub cycle: BillingCycle,
    /// Tier awaiting confirmation in the upgrade dialog.
    pub pending: Option<PlanTier>,
    pub processing: bool,
}

impl SubscriptionState {
    /// Open the upgrade dialog. Choosing the current tier does nothing.
    pub fn choose(&mut self, current: PlanTier, target: PlanTier) -> bool {
        if current == target {
            return false;
        }
        self.pending = Some(target);
        true
    }

    pub fn close(&mut self) {
        self.pending = None;
        self.processing = false;
    }
}
