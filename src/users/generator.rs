//! User population generation
//!
//! First stage of the pipeline. Produces exactly `user_count` records with
//! sequential ids; every attribute is drawn independently per record, so no
//! correlation exists between country, plan, active flag and signup date.

use chrono::Duration;
use rand::Rng;
use tracing::{debug, info};

use crate::pipeline::GenerationResult;
use crate::sampling::{weighted_choice, RandomSources};
use crate::types::{catalog, GeneratorConfig, PlanType, UserId};
use crate::users::UserRecord;

/// Generator for the user table
#[derive(Debug, Default)]
pub struct UserGenerator;

impl UserGenerator {
    /// Create a new user generator
    pub fn new() -> Self {
        Self
    }

    /// Generate the user population
    ///
    /// Ids run 1..=`user_count` with no gaps. Signup dates fall within
    /// `signup_lookback_days` of the configured reference time.
    pub fn generate_users(
        &self,
        config: &GeneratorConfig,
        rng: &mut RandomSources,
    ) -> GenerationResult<Vec<UserRecord>> {
        info!("Generating user table with {} records", config.user_count);

        let mut users = Vec::with_capacity(config.user_count);
        let reference_date = config.reference_time.date();

        for index in 0..config.user_count {
            let lookback = rng.general.gen_range(0..=config.signup_lookback_days);
            let signup_date = reference_date - Duration::days(i64::from(lookback));

            let country = weighted_choice(&mut rng.numeric, &catalog::COUNTRY_WEIGHTS);
            let plan = weighted_choice(&mut rng.numeric, &PlanType::WEIGHTS);
            let active = rng.numeric.gen::<f64>() < catalog::ACTIVE_PROBABILITY;

            users.push(UserRecord {
                id: UserId::new(index as u32 + 1),
                signup_date,
                country: country.to_string(),
                plan,
                active,
            });
        }

        debug!("User table complete: {} records", users.len());
        Ok(users)
    }
}
