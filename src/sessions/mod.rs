//! Session table generation
//!
//! The second pipeline stage: produces sessions that reference the generated
//! user population.

mod generator;
mod session;

pub use generator::SessionGenerator;
pub use session::SessionRecord;
