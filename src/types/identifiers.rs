//! Identifier types for generated records
//!
//! User and event ids are sequential integers assigned during generation.
//! Session ids are opaque random tokens; uniqueness is probabilistic because
//! the token key space vastly exceeds any realistic session count, so no
//! collision checking is performed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters a session token is drawn from (lowercase alphanumerics)
const SESSION_TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of the random portion of a session id
const SESSION_TOKEN_LEN: usize = 16;

/// Fixed prefix for session ids
const SESSION_ID_PREFIX: &str = "session_";

/// Sequential identifier of a user, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Create a user id from its raw value
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw integer value of this id
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential identifier of an event, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Create an event id from its raw value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw integer value of this id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque random token identifying a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh session id from the given random source
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut token = String::with_capacity(SESSION_ID_PREFIX.len() + SESSION_TOKEN_LEN);
        token.push_str(SESSION_ID_PREFIX);
        for _ in 0..SESSION_TOKEN_LEN {
            let index = rng.gen_range(0..SESSION_TOKEN_CHARSET.len());
            token.push(SESSION_TOKEN_CHARSET[index] as char);
        }
        Self(token)
    }

    /// String form of this id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
