//! Enumeration types for the clickstream dataset generator
//!
//! This module contains the categorical attribute types drawn during generation:
//! subscription plans, device types, and event types, together with the weighted
//! distributions each one is sampled from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription plan assigned to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Free tier plan
    Free,
    /// Paid premium plan
    Premium,
}

impl PlanType {
    /// Weighted distribution the plan attribute is drawn from
    pub const WEIGHTS: [(PlanType, f64); 2] = [(PlanType::Free, 0.85), (PlanType::Premium, 0.15)];

    /// Label used in CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Free => "free",
            PlanType::Premium => "premium",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(PlanType::Free),
            "premium" => Ok(PlanType::Premium),
            _ => Err(format!("Unknown plan type: {}", s)),
        }
    }
}

/// Device class a session was recorded on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Desktop or laptop browser
    Desktop,
    /// Mobile phone browser or app
    Mobile,
    /// Tablet browser or app
    Tablet,
}

impl DeviceType {
    /// Weighted distribution the device attribute is drawn from
    pub const WEIGHTS: [(DeviceType, f64); 3] = [
        (DeviceType::Desktop, 0.40),
        (DeviceType::Mobile, 0.45),
        (DeviceType::Tablet, 0.15),
    ];

    /// Label used in CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desktop" => Ok(DeviceType::Desktop),
            "mobile" => Ok(DeviceType::Mobile),
            "tablet" => Ok(DeviceType::Tablet),
            _ => Err(format!("Unknown device type: {}", s)),
        }
    }
}

/// Type of interaction recorded as an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Page was loaded
    PageView,
    /// Element was clicked
    Click,
    /// Item was added to the shopping cart
    AddToCart,
    /// Checkout flow was started
    Checkout,
    /// Order was completed
    Purchase,
    /// Account was created
    SignUp,
}

impl EventType {
    /// Weighted distribution the event type is drawn from
    pub const WEIGHTS: [(EventType, f64); 6] = [
        (EventType::PageView, 0.50),
        (EventType::Click, 0.25),
        (EventType::AddToCart, 0.10),
        (EventType::Checkout, 0.08),
        (EventType::Purchase, 0.05),
        (EventType::SignUp, 0.02),
    ];

    /// Label used in CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::PageView => "page_view",
            EventType::Click => "click",
            EventType::AddToCart => "add_to_cart",
            EventType::Checkout => "checkout",
            EventType::Purchase => "purchase",
            EventType::SignUp => "sign_up",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "page_view" | "pageview" => Ok(EventType::PageView),
            "click" => Ok(EventType::Click),
            "add_to_cart" | "addtocart" => Ok(EventType::AddToCart),
            "checkout" => Ok(EventType::Checkout),
            "purchase" => Ok(EventType::Purchase),
            "sign_up" | "signup" => Ok(EventType::SignUp),
            _ => Err(format!("Unknown event type: {}", s)),
        }
    }
}
