//! Next-Step Classification for Gated Features

use serde::{Deserialize, Serialize};

use barbermatch_common::Plan;

use crate::feature::Feature;

/// Where the client should send a visitor who reached a gated feature
///
/// Pure classification; mapping a step to a URL or view transition stays
/// with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    /// The feature only exists in the mobile app
    AppDownload,
    /// The requested plan is below the feature's minimum
    PlanUpgrade,
    /// A demo bypass is available for a paid feature
    DemoLogin,
    /// Proceed to signup carrying the requested plan
    SignupWithPlan(Plan),
}

impl Feature {
    /// Classify the next onboarding step for `requested_plan`
    ///
    /// First match wins: app-only beats plan gating, plan gating beats the
    /// demo shortcut.
    pub fn next_step(&self, requested_plan: Plan) -> NextStep {
        let step = if self.is_app_only() {
            NextStep::AppDownload
        } else if !self.has_access(requested_plan) {
            NextStep::PlanUpgrade
        } else if self.has_demo() && self.minimum_plan() != Plan::Free {
            NextStep::DemoLogin
        } else {
            NextStep::SignupWithPlan(requested_plan)
        };

        tracing::debug!(
            feature = %self,
            plan = %requested_plan,
            step = ?step,
            "next step classified"
        );
        step
    }
}
