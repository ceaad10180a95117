//! Core types for the clickstream dataset generator
//!
//! This module contains the identifier newtypes, categorical enumerations, and
//! configuration structures used throughout the generation pipeline.

pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::{catalog, CliArgs, ConfigError, ConfigFile, ConfigValidationError, GeneratorConfig};
pub use enums::{DeviceType, EventType, PlanType};
pub use identifiers::{EventId, SessionId, UserId};
