//! Session record definition

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::types::{DeviceType, SessionId, UserId};

/// A generated browsing session
///
/// `user_id` always references a generated user because it is sampled directly
/// from the materialized user table. `end_time` is always strictly after
/// `start_time`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    /// Opaque random token identifying the session
    pub id: SessionId,
    /// Id of the user the session belongs to
    pub user_id: UserId,
    /// Session start, within the configured historical window
    pub start_time: NaiveDateTime,
    /// Session end, start plus a bounded random duration
    pub end_time: NaiveDateTime,
    /// Number of pages viewed, at least 1
    pub page_view_count: u32,
    /// Device the session was recorded on
    pub device: DeviceType,
}

impl SessionRecord {
    /// Length of the session
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}
