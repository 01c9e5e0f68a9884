//! User account models.

use chatbot_core::subscription::BillingState;
use chatbot_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub stripe_price_id: Option<String>,
    pub stripe_current_period_end: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The Stripe billing columns of a user, as used for plan resolution.
#[derive(Debug, Clone, FromRow)]
pub struct UserBilling {
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub stripe_price_id: Option<String>,
    pub stripe_current_period_end: Option<Timestamp>,
}

impl From<UserBilling> for BillingState {
    fn from(row: UserBilling) -> Self {
        Self {
            stripe_customer_id: row.stripe_customer_id,
            stripe_subscription_id: row.stripe_subscription_id,
            stripe_price_id: row.stripe_price_id,
            stripe_current_period_end: row.stripe_current_period_end,
        }
    }
}

/// DTO for inserting a user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: EntityId,
    pub email: String,
}

/// DTO for recording a user's Stripe subscription.
#[derive(Debug, Clone)]
pub struct UpdateUserBilling {
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub stripe_price_id: Option<String>,
    pub stripe_current_period_end: Option<Timestamp>,
}
