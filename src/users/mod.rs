//! User table generation
//!
//! The first pipeline stage: produces the user population with no upstream
//! dependencies.

mod generator;
mod user;

pub use generator::UserGenerator;
pub use user::UserRecord;
