//! Pipeline orchestration
//!
//! Runs the three generation stages strictly in sequence - users, then
//! sessions, then events - because each later stage samples from the previous
//! stage's output, and writes the resulting tables as CSV files.

use std::time::Instant;

use tracing::{info, instrument};

use crate::events::{EventGenerator, EventRecord};
use crate::output::{write_events_csv, write_sessions_csv, write_users_csv};
use crate::pipeline::{DatasetStatistics, GenerationResult};
use crate::sampling::RandomSources;
use crate::sessions::{SessionGenerator, SessionRecord};
use crate::types::GeneratorConfig;
use crate::users::{UserGenerator, UserRecord};

/// File name of the user table
pub const USERS_FILE: &str = "users.csv";

/// File name of the session table
pub const SESSIONS_FILE: &str = "sessions.csv";

/// File name of the event table
pub const EVENTS_FILE: &str = "raw_events.csv";

/// Orchestrates a full generation run
#[derive(Debug)]
pub struct GenerationPipeline {
    config: GeneratorConfig,
}

impl GenerationPipeline {
    /// Create a pipeline for a validated configuration
    pub fn new(config: GeneratorConfig) -> GenerationResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this pipeline runs with
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate all three tables in memory without writing them out
    ///
    /// The random sources are created here, once, from the configured seed;
    /// the stages share them by mutable reference.
    pub fn generate_tables(
        &self,
    ) -> GenerationResult<(Vec<UserRecord>, Vec<SessionRecord>, Vec<EventRecord>)> {
        let mut rng = RandomSources::from_seed(self.config.seed);

        let users = UserGenerator::new().generate_users(&self.config, &mut rng)?;
        let sessions =
            SessionGenerator::new().generate_sessions(&self.config, &users, &mut rng)?;
        let events =
            EventGenerator::new().generate_events(&self.config, &users, &sessions, &mut rng)?;

        Ok((users, sessions, events))
    }

    /// Run the full pipeline: generate all tables, write the CSV files, and
    /// return the summary statistics
    #[instrument(skip(self), fields(seed = self.config.seed))]
    pub fn run(&self) -> GenerationResult<DatasetStatistics> {
        let started = Instant::now();
        info!(
            "Starting generation run: {} users, {} sessions, up to {} events",
            self.config.user_count, self.config.session_count, self.config.event_count
        );

        let (users, sessions, events) = self.generate_tables()?;

        write_users_csv(&self.config.output_dir.join(USERS_FILE), &users)?;
        write_sessions_csv(&self.config.output_dir.join(SESSIONS_FILE), &sessions)?;
        write_events_csv(&self.config.output_dir.join(EVENTS_FILE), &events)?;

        let statistics = DatasetStatistics::from_tables(&users, &sessions, &events);

        info!(
            "Generation run completed in {:.2} seconds ({} events)",
            started.elapsed().as_secs_f64(),
            statistics.events_total
        );

        Ok(statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::GenerationError;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn pinned_config(users: usize, sessions: usize, events: usize) -> GeneratorConfig {
        GeneratorConfig {
            user_count: users,
            session_count: sessions,
            event_count: events,
            reference_time: NaiveDate::from_ymd_opt(2026, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let mut config = pinned_config(10, 10, 10);
        config.user_count = 0;
        let result = GenerationPipeline::new(config);
        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn test_tables_are_linked() {
        let pipeline = GenerationPipeline::new(pinned_config(30, 80, 600)).unwrap();
        let (users, sessions, events) = pipeline.generate_tables().unwrap();

        assert_eq!(users.len(), 30);
        assert_eq!(sessions.len(), 80);
        assert!(events.len() <= 600);

        let user_ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        let session_ids: HashSet<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
        for session in &sessions {
            assert!(user_ids.contains(&session.user_id));
        }
        for event in &events {
            assert!(session_ids.contains(event.session_id.as_str()));
            assert!(user_ids.contains(&event.user_id));
        }
    }

    #[test]
    fn test_run_writes_all_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = pinned_config(20, 40, 300);
        config.output_dir = dir.path().to_path_buf();

        let pipeline = GenerationPipeline::new(config).unwrap();
        let stats = pipeline.run().unwrap();

        assert!(dir.path().join(USERS_FILE).exists());
        assert!(dir.path().join(SESSIONS_FILE).exists());
        assert!(dir.path().join(EVENTS_FILE).exists());
        assert_eq!(stats.users_total, 20);
        assert_eq!(stats.sessions_total, 40);
    }

    #[test]
    fn test_run_fails_when_output_dir_missing() {
        let mut config = pinned_config(5, 5, 10);
        config.output_dir = std::path::PathBuf::from("/nonexistent/output/dir");

        let pipeline = GenerationPipeline::new(config).unwrap();
        let result = pipeline.run();
        assert!(result.is_err());
    }
}
