//! Common utilities and abstractions for services

/// Latest-value handoff between the polling context and its consumers
pub mod property;

pub use property::Property;
