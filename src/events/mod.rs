//! Event table generation
//!
//! The third pipeline stage: produces events that reference generated sessions
//! and, transitively, generated users, up to the configured cap.

mod event;
mod generator;

pub use event::EventRecord;
pub use generator::EventGenerator;
