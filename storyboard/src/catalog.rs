//! Subscription plan catalog shown on the upgrade screen.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::plan::PlanTier;

/// Billing period selected by the monthly/yearly toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "/month",
            Self::Yearly => "/year",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanOffer {
    pub tier: PlanTier,
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_usd: u32,
    pub yearly_usd: u32,
    pub popular: bool,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
}

impl PlanOffer {
    #[must_use]
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_usd,
            BillingCycle::Yearly => self.yearly_usd,
        }
    }

    #[must_use]
    pub fn yearly_discount(&self) -> u32 {
        yearly_discount_percent(self.monthly_usd, self.yearly_usd)
    }
}

const OFFERS: [PlanOffer; 3] = [
    PlanOffer {
        tier: PlanTier::Free,
        name: "Free",
        description: "Perfect for getting started",
        monthly_usd: 0,
        yearly_usd: 0,
        popular: false,
        features: &[
            "5 storyboards per month",
            "Basic AI generation",
            "Standard templates",
            "Export to PDF",
            "Community support",
        ],
        limitations: &[
            "Limited to 5 frames per storyboard",
            "Basic export options only",
            "No team collaboration",
            "No priority support",
        ],
    },
    PlanOffer {
        tier: PlanTier::Pro,
        name: "Pro",
        description: "For creative professionals",
        monthly_usd: 19,
        yearly_usd: 190,
        popular: true,
        features: &[
            "Unlimited storyboards",
            "Advanced AI generation",
            "Premium templates",
            "All export formats",
            "Team collaboration (up to 5 members)",
            "Priority support",
            "Custom branding",
            "Analytics dashboard",
        ],
        limitations: &[],
    },
    PlanOffer {
        tier: PlanTier::Enterprise,
        name: "Enterprise",
        description: "For large teams and organizations",
        monthly_usd: 49,
        yearly_usd: 490,
        popular: false,
        features: &[
            "Everything in Pro",
            "Unlimited team members",
            "Advanced integrations",
            "Custom AI training",
            "White-label solution",
            "Dedicated account manager",
            "SLA guarantee",
            "Advanced security",
            "API access",
        ],
        limitations: &[],
    },
];

/// All offers, cheapest first.
#[must_use]
pub fn catalog() -> &'static [PlanOffer] {
    &OFFERS
}

#[must_use]
pub fn offer(tier: PlanTier) -> &'static PlanOffer {
    match tier {
        PlanTier::Free => &OFFERS[0],
        PlanTier::Pro => &OFFERS[1],
        PlanTier::Enterprise => &OFFERS[2],
    }
}

/// Percentage saved by paying yearly, rounded half up. Zero for free plans.
#[must_use]
pub fn yearly_discount_percent(monthly: u32, yearly: u32) -> u32 {
    let annualized = u64::from(monthly) * 12;
    if annualized == 0 {
        return 0;
    }
    let saved = annualized.saturating_sub(u64::from(yearly));
    let percent = (saved * 200 + annualized) / (annualized * 2);
    u32::try_from(percent).unwrap_or(100)
}
