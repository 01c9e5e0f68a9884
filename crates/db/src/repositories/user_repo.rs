//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUserBilling, User, UserBilling};

/// Column list for full `users` rows.
const COLUMNS: &str = "\
    id, email, stripe_customer_id, stripe_subscription_id, stripe_price_id, \
    stripe_current_period_end, created_at, updated_at";

/// Provides data access for user accounts.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user without any billing information.
    ///
    /// Accounts are created elsewhere; only the repository integration tests
    /// call this, to seed rows.
    pub async fn create(pool: &PgPool, dto: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, email) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&dto.id)
            .bind(&dto.email)
            .fetch_one(pool)
            .await
    }

    /// Fetch only the Stripe billing columns of a user.
    ///
    /// Returns `None` if the user does not exist.
    pub async fn find_billing(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<UserBilling>, sqlx::Error> {
        sqlx::query_as::<_, UserBilling>(
            "SELECT stripe_customer_id, stripe_subscription_id, stripe_price_id, \
                    stripe_current_period_end \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Replace the Stripe billing columns of a user.
    ///
    /// Billing is written by the Stripe webhook handler, which lives outside
    /// this service. The repository integration tests use it to put a user
    /// on a paid plan.
    pub async fn update_billing(
        pool: &PgPool,
        id: &str,
        dto: &UpdateUserBilling,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                 stripe_customer_id = $2, \
                 stripe_subscription_id = $3, \
                 stripe_price_id = $4, \
                 stripe_current_period_end = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&dto.stripe_customer_id)
            .bind(&dto.stripe_subscription_id)
            .bind(&dto.stripe_price_id)
            .bind(dto.stripe_current_period_end)
            .fetch_optional(pool)
            .await
    }
}
