//! Pipeline orchestration, error handling, logging, and statistics

mod error;
mod logging;
mod orchestrator;
mod statistics;

pub use error::{GenerationError, GenerationResult};
pub use logging::LoggingConfig;
pub use orchestrator::{GenerationPipeline, EVENTS_FILE, SESSIONS_FILE, USERS_FILE};
pub use statistics::DatasetStatistics;
