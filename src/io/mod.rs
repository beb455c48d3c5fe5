//! Errors, constants and the application-side image collaborator

/// Filter constants and defaults
pub mod configuration;
/// Error types and helper constructors
pub mod error;
/// Load/save through the `image` crate
pub mod image;
/// Application image model with the load precondition
pub mod session;
