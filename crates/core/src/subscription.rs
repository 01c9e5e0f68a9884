//! Subscription plan catalog and plan resolution.
//!
//! A user's plan is derived from the Stripe billing fields stored on their
//! account. Resolution is a pure function of that billing state, the plan
//! catalog, and the current time so it can be tested without a database.

use chrono::Duration;
use serde::Serialize;

use crate::types::Timestamp;

/// Grace period past `stripe_current_period_end` during which a lapsed
/// subscription still counts as paid.
pub const BILLING_GRACE_PERIOD_HOURS: i64 = 24;

pub const PLAN_FREE: &str = "free";
pub const PLAN_BASIC: &str = "basic";
pub const PLAN_PRO: &str = "pro";

/// A purchasable (or default) subscription plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub name: String,
    pub description: String,
    /// Stripe price id; `None` for the free plan.
    pub stripe_price_id: Option<String>,
    /// Whether the plan lets owners hide the branding footer.
    pub disable_branding: bool,
}

/// Billing fields recorded on a user account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingState {
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub stripe_price_id: Option<String>,
    pub stripe_current_period_end: Option<Timestamp>,
}

/// A user's effective plan plus the billing details it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscriptionPlan {
    #[serde(flatten)]
    pub plan: SubscriptionPlan,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub stripe_current_period_end: Option<Timestamp>,
    pub is_paid: bool,
}

impl UserSubscriptionPlan {
    pub fn disable_branding(&self) -> bool {
        self.plan.disable_branding
    }
}

/// The set of plans offered by the deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    pub free: SubscriptionPlan,
    pub paid: Vec<SubscriptionPlan>,
}

impl PlanCatalog {
    /// Build the standard free/basic/pro catalog from configured Stripe
    /// price ids. A paid plan without a price id can never be matched.
    pub fn new(basic_price_id: Option<String>, pro_price_id: Option<String>) -> Self {
        Self {
            free: SubscriptionPlan {
                name: PLAN_FREE.to_string(),
                description: "Free plan with branded chat window.".to_string(),
                stripe_price_id: None,
                disable_branding: false,
            },
            paid: vec![
                SubscriptionPlan {
                    name: PLAN_BASIC.to_string(),
                    description: "Basic plan with custom branding.".to_string(),
                    stripe_price_id: basic_price_id,
                    disable_branding: true,
                },
                SubscriptionPlan {
                    name: PLAN_PRO.to_string(),
                    description: "Pro plan with custom branding.".to_string(),
                    stripe_price_id: pro_price_id,
                    disable_branding: true,
                },
            ],
        }
    }

    /// Resolve the effective plan for a user's billing state at `now`.
    ///
    /// Paid means a price id is set and the current period (plus the grace
    /// period) has not ended. Unknown price ids fall back to the free plan.
    pub fn resolve(&self, billing: &BillingState, now: Timestamp) -> UserSubscriptionPlan {
        let is_paid = match (&billing.stripe_price_id, billing.stripe_current_period_end) {
            (Some(_), Some(period_end)) => {
                period_end + Duration::hours(BILLING_GRACE_PERIOD_HOURS) > now
            }
            _ => false,
        };

        let plan = if is_paid {
            self.find_by_price_id(billing.stripe_price_id.as_deref())
                .unwrap_or(&self.free)
        } else {
            &self.free
        };

        UserSubscriptionPlan {
            plan: plan.clone(),
            stripe_customer_id: billing.stripe_customer_id.clone(),
            stripe_subscription_id: billing.stripe_subscription_id.clone(),
            stripe_current_period_end: billing.stripe_current_period_end,
            is_paid,
        }
    }

    fn find_by_price_id(&self, price_id: Option<&str>) -> Option<&SubscriptionPlan> {
        let price_id = price_id?;
        self.paid
            .iter()
            .find(|p| p.stripe_price_id.as_deref() == Some(price_id))
    }
}
