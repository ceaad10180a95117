//! User record definition

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{PlanType, UserId};

/// A generated user, immutable once created
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    /// Sequential id, starting at 1
    pub id: UserId,
    /// Date the user signed up, within the configured lookback window
    pub signup_date: NaiveDate,
    /// Two-letter country code
    pub country: String,
    /// Subscription plan
    pub plan: PlanType,
    /// Whether the account is active
    pub active: bool,
}
