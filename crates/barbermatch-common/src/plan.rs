//! Subscription Plan Tiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BarberMatchError;

/// Subscription plan tier
///
/// Tiers form a total order: `Free < Basic < Professional < Premium`. Every
/// access comparison goes through [`Plan::level`]; plan identifiers are never
/// compared as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Gratuito
    Free,
    /// Básico
    Basic,
    /// Profissional
    Professional,
    /// Premium
    Premium,
}

impl Plan {
    /// All plans, cheapest first
    pub fn all() -> [Plan; 4] {
        [Self::Free, Self::Basic, Self::Professional, Self::Premium]
    }

    /// Ordinal level, strictly increasing in the declared order
    pub fn level(&self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Basic => 1,
            Self::Professional => 2,
            Self::Premium => 3,
        }
    }

    /// True when this plan ranks at or above `other`
    pub fn is_at_least(&self, other: Plan) -> bool {
        self.level() >= other.level()
    }

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Basic => "basic",
            Self::Professional => "professional",
            Self::Premium => "premium",
        }
    }

    /// Name shown to users
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Free => "Gratuito",
            Self::Basic => "Básico",
            Self::Professional => "Profissional",
            Self::Premium => "Premium",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = BarberMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "basic" => Ok(Self::Basic),
            "professional" => Ok(Self::Professional),
            "premium" => Ok(Self::Premium),
            other => Err(BarberMatchError::UnknownPlan(other.to_string())),
        }
    }
}
