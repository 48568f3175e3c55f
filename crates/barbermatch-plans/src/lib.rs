//! BarberMatch Plan Catalog
//!
//! Commercial plan data backing the pricing surface: display names,
//! taglines, monthly prices and the feature set each tier unlocks.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;

pub use catalog::{PlanCatalog, PlanOffering};
