//! Session generation
//!
//! Second stage of the pipeline. Every session references a user picked
//! uniformly with replacement from the already-generated user table, which is
//! what guarantees referential integrity: a session cannot point at a user
//! that does not exist.
//!
//! Session starts are sampled independently per field (day, hour, minute,
//! second) within the historical window, with no cross-check against the
//! referenced user's signup date. A session may therefore predate its user's
//! signup; this is accepted, documented behavior.

use chrono::Duration;
use rand::Rng;
use tracing::{debug, info};

use crate::pipeline::{GenerationError, GenerationResult};
use crate::sampling::{sample_exponential, weighted_choice, RandomSources};
use crate::sessions::SessionRecord;
use crate::types::{DeviceType, GeneratorConfig, SessionId};
use crate::users::UserRecord;

/// Generator for the session table
#[derive(Debug, Default)]
pub struct SessionGenerator;

impl SessionGenerator {
    /// Create a new session generator
    pub fn new() -> Self {
        Self
    }

    /// Generate the session table from the user population
    pub fn generate_sessions(
        &self,
        config: &GeneratorConfig,
        users: &[UserRecord],
        rng: &mut RandomSources,
    ) -> GenerationResult<Vec<SessionRecord>> {
        if users.is_empty() {
            return Err(GenerationError::SessionGeneration(
                "cannot generate sessions without a user population".to_string(),
            ));
        }

        info!(
            "Generating session table with {} records over a {} day window",
            config.session_count, config.window_days
        );

        let base_time = config.reference_time - Duration::days(i64::from(config.window_days));
        let mut sessions = Vec::with_capacity(config.session_count);

        for _ in 0..config.session_count {
            // Uniform pick with replacement from the materialized user set
            let user_index = rng.general.gen_range(0..users.len());
            let user_id = users[user_index].id;

            let start_time = base_time
                + Duration::days(i64::from(rng.general.gen_range(0..config.window_days)))
                + Duration::hours(rng.general.gen_range(0..24))
                + Duration::minutes(rng.general.gen_range(0..60))
                + Duration::seconds(rng.general.gen_range(0..60));

            let duration_minutes = rng
                .general
                .gen_range(config.min_session_minutes..=config.max_session_minutes);
            let end_time = start_time + Duration::minutes(duration_minutes);

            let page_view_count =
                (sample_exponential(&mut rng.numeric, config.mean_page_views) as u32 + 1).max(1);

            let device = weighted_choice(&mut rng.numeric, &DeviceType::WEIGHTS);

            sessions.push(SessionRecord {
                id: SessionId::generate(&mut rng.general),
                user_id,
                start_time,
                end_time,
                page_view_count,
                device,
            });
        }

        debug!("Session table complete: {} records", sessions.len());
        Ok(sessions)
    }
}
