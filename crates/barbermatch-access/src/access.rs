//! Access Decision and Limitation Resolution

use barbermatch_common::Plan;

use crate::feature::Feature;

impl Feature {
    /// True when `plan` meets this feature's minimum plan
    ///
    /// Monotonic in plan level: if a plan has access, every higher plan does
    /// too.
    pub fn has_access(&self, plan: Plan) -> bool {
        plan.is_at_least(self.minimum_plan())
    }

    /// Limitation text for `plan`, or `None` for full unqualified access
    ///
    /// Denial is checked first, so a configured free/basic text never shows
    /// for a plan below the minimum; those texts describe what a qualifying
    /// subscriber still gets, not a path around the gate.
    pub fn limitation(&self, plan: Plan) -> Option<String> {
        let config = self.config();

        if !self.has_access(plan) {
            tracing::debug!(
                feature = %self,
                plan = %plan,
                required = %config.minimum_plan,
                "feature access denied"
            );
            return Some(format!(
                "Este recurso requer o plano {} ou superior",
                config.minimum_plan.display_name()
            ));
        }

        match plan {
            Plan::Free => config.free_limitation.map(str::to_string),
            Plan::Basic => config.basic_limitation.map(str::to_string),
            _ => None,
        }
    }
}
