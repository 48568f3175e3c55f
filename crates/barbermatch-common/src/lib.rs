//! BarberMatch Common - Shared types for the BarberMatch platform core
//!
//! This crate provides the domain primitives the rest of the workspace
//! builds on:
//! - Subscription plan tiers and their total ordering
//! - Error handling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod plan;

pub use error::*;
pub use plan::*;
