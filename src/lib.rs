//! Clickstream Dataset Generator
//!
//! A batch generator that synthesizes a small relational dataset - users,
//! sessions, and events - for downstream analytics testing. The three tables
//! satisfy referential integrity by construction (sessions reference users;
//! events reference both) and follow fixed categorical and statistical
//! distributions over a bounded time window.
//!
//! # Overview
//!
//! Generation runs as three stages strictly in sequence:
//!
//! 1. **Users** - the population, with sequential ids and independently drawn
//!    attributes.
//! 2. **Sessions** - each references a user sampled from the generated
//!    population, with bounded start times and durations.
//! 3. **Events** - each references a session (and transitively its user),
//!    capped at a global maximum count.
//!
//! The run is single-threaded and fully deterministic: both random sources
//! are seeded once at startup and threaded explicitly through the stages.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clickstream_dataset_generator::pipeline::GenerationPipeline;
//! use clickstream_dataset_generator::types::GeneratorConfig;
//!
//! let config = GeneratorConfig {
//!     user_count: 100,
//!     session_count: 500,
//!     event_count: 2000,
//!     ..Default::default()
//! };
//!
//! let pipeline = GenerationPipeline::new(config)?;
//! let statistics = pipeline.run()?;
//! println!("{}", statistics);
//! # Ok::<(), clickstream_dataset_generator::pipeline::GenerationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, categorical enums, configuration
//! - [`sampling`]: seeded random sources and distribution helpers
//! - [`users`], [`sessions`], [`events`]: the three generation stages
//! - [`output`]: CSV writers for the generated tables
//! - [`pipeline`]: orchestration, errors, logging, statistics
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod events;
pub mod output;
pub mod pipeline;
pub mod sampling;
pub mod sessions;
pub mod types;
pub mod users;

// Core types
pub use types::{
    catalog, CliArgs, ConfigError, ConfigValidationError, DeviceType, EventId, EventType,
    GeneratorConfig, PlanType, SessionId, UserId,
};

// Generation stages
pub use events::{EventGenerator, EventRecord};
pub use sessions::{SessionGenerator, SessionRecord};
pub use users::{UserGenerator, UserRecord};

// Sampling
pub use sampling::RandomSources;

// Pipeline
pub use pipeline::{
    DatasetStatistics, GenerationError, GenerationPipeline, GenerationResult, LoggingConfig,
};
