//! Event generation
//!
//! Third and final stage of the pipeline. Events are generated per session, in
//! session order, until the global event cap is reached. The user-id to
//! country lookup is built once up front so the per-event join costs O(1)
//! instead of a scan of the user table.

use chrono::Duration;
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::events::EventRecord;
use crate::pipeline::{GenerationError, GenerationResult};
use crate::sampling::{sample_poisson, weighted_choice, RandomSources};
use crate::sessions::SessionRecord;
use crate::types::{catalog, EventId, EventType, GeneratorConfig};
use crate::users::UserRecord;

/// Number of sessions between progress log lines
const PROGRESS_LOG_INTERVAL: usize = 10_000;

/// Generator for the event table
#[derive(Debug, Default)]
pub struct EventGenerator;

impl EventGenerator {
    /// Create a new event generator
    pub fn new() -> Self {
        Self
    }

    /// Generate the event table from the user and session tables
    ///
    /// Sessions are visited in their generated order. Each contributes its
    /// page view count plus a Poisson jitter of extra interactions, until the
    /// running counter hits `event_count`: the session in progress is then
    /// truncated mid-stream and every later session contributes nothing.
    pub fn generate_events(
        &self,
        config: &GeneratorConfig,
        users: &[UserRecord],
        sessions: &[SessionRecord],
        rng: &mut RandomSources,
    ) -> GenerationResult<Vec<EventRecord>> {
        info!(
            "Generating event table for {} sessions, capped at {} records",
            sessions.len(),
            config.event_count
        );

        let country_by_user: HashMap<_, _> = users
            .iter()
            .map(|user| (user.id, user.country.as_str()))
            .collect();

        let mut events = Vec::with_capacity(config.event_count.min(1 << 20));
        let mut next_id: u64 = 1;

        'sessions: for (session_index, session) in sessions.iter().enumerate() {
            let country = *country_by_user.get(&session.user_id).ok_or_else(|| {
                GenerationError::EventGeneration(format!(
                    "session {} references user {} absent from the user table",
                    session.id, session.user_id
                ))
            })?;

            let events_in_session = session.page_view_count
                + sample_poisson(&mut rng.numeric, config.mean_extra_events);
            let duration_seconds = session.duration().num_seconds() as f64;

            for _ in 0..events_in_session {
                // Uniform placement within [start, end); sub-second precision
                // is discarded since output is truncated to whole seconds
                let offset = rng.general.gen_range(0.0..duration_seconds);
                let timestamp = session.start_time + Duration::seconds(offset as i64);

                let event_type = weighted_choice(&mut rng.numeric, &EventType::WEIGHTS);
                let page_index = rng.general.gen_range(0..catalog::PAGE_PATHS.len());

                events.push(EventRecord {
                    id: EventId::new(next_id),
                    user_id: session.user_id,
                    session_id: session.id.clone(),
                    event_type,
                    page: catalog::PAGE_PATHS[page_index].to_string(),
                    timestamp,
                    device: session.device,
                    country: country.to_string(),
                });
                next_id += 1;

                if events.len() >= config.event_count {
                    debug!(
                        "Event cap of {} reached at session {} of {}",
                        config.event_count,
                        session_index + 1,
                        sessions.len()
                    );
                    break 'sessions;
                }
            }

            if (session_index + 1) % PROGRESS_LOG_INTERVAL == 0 {
                info!("Processed {} sessions...", session_index + 1);
            }
        }

        // The counter check above already stops generation at the cap; the
        // truncate is the final invariant guard
        events.truncate(config.event_count);

        debug!("Event table complete: {} records", events.len());
        Ok(events)
    }
}
