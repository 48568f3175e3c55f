//! BarberMatch Feature Access Resolver
//!
//! Plan-based feature gating for the BarberMatch platform.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   FEATURE ACCESS RESOLVER                    │
//! │                                                              │
//! │   Feature + Plan ──► has_access ──► bool                     │
//! │                  ──► limitation ──► Option<String>           │
//! │                  ──► next_step  ──► AppDownload | Upgrade |  │
//! │                                     DemoLogin | Signup       │
//! │                                                              │
//! │   backed by a static Feature ──► FeatureConfig table         │
//! │   (total over the enum, immutable, no runtime mutation)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a pure read over the static table: no I/O, no shared
//! mutable state, safe to call concurrently from any thread.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod feature;
pub mod navigation;

pub use feature::{Feature, FeatureConfig};
pub use navigation::NextStep;
