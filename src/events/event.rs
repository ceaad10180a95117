//! Event record definition

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::types::{DeviceType, EventId, EventType, SessionId, UserId};

/// A generated interaction event
///
/// `user_id` and `device` are copied from the parent session; `country` is the
/// denormalized country of the referenced user, resolved at generation time.
/// The timestamp always falls within the parent session's time span.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    /// Sequential id, starting at 1
    pub id: EventId,
    /// Id of the user the parent session belongs to
    pub user_id: UserId,
    /// Id of the parent session
    pub session_id: SessionId,
    /// Kind of interaction
    pub event_type: EventType,
    /// Page path the event occurred on
    pub page: String,
    /// Moment of the event, within [session start, session end)
    pub timestamp: NaiveDateTime,
    /// Device copied from the parent session
    pub device: DeviceType,
    /// Country of the referenced user
    pub country: String,
}
