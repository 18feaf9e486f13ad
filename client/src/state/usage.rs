//! Usage tracker state for the current plan.

use storyboard::plan::PlanTier;
use storyboard::usage::UsageLimits;

#[derive(Clone, Debug, Default)]
pub struct UsageState {
    pub plan: PlanTier,
    pub limits: UsageLimits,
}

impl UsageState {
    #[must_use]
    pub fn for_plan(plan: PlanTier) -> Self {
        Self { plan, limits: UsageLimits::for_plan(plan) }
    }

    /// Reseed when the plan changes; a no-op for the same plan.
    pub fn sync_plan(&mut self, plan: PlanTier) {
        if plan != self.plan {
            *self = Self::for_plan(plan);
        }
    }

    pub fn tick(&mut self, roll: f64) -> bool {
        self.limits.simulate_activity(roll)
    }
}
