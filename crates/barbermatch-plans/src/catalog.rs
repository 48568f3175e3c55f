//! Plan Catalog for the Pricing Surface

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use barbermatch_access::Feature;
use barbermatch_common::Plan;

/// Commercial offering for a single plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOffering {
    /// Plan tier
    pub plan: Plan,
    /// Display name
    pub name: String,
    /// Marketing one-liner
    pub tagline: String,
    /// Monthly price in BRL
    pub monthly_price: Decimal,
    /// Spotlighted on the pricing page
    pub highlighted: bool,
    /// Features fully unlocked at this tier, in catalog order
    pub features: Vec<Feature>,
}

/// Plan catalog
///
/// Built eagerly, immutable afterwards. One offering per plan, stored in
/// ascending level order, so lookups index by [`Plan::level`]. The feature
/// list of each offering is derived from the access table rather than
/// duplicated here.
pub struct PlanCatalog {
    offerings: Vec<PlanOffering>,
}

impl PlanCatalog {
    /// Build the catalog
    pub fn new() -> Self {
        let offerings = Plan::all()
            .into_iter()
            .map(|plan| PlanOffering {
                plan,
                name: plan.display_name().to_string(),
                tagline: tagline(plan).to_string(),
                monthly_price: monthly_price(plan),
                highlighted: plan == Plan::Professional,
                features: Feature::all()
                    .into_iter()
                    .filter(|f| f.has_access(plan))
                    .collect(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(plans = offerings.len(), "plan catalog initialized");
        Self { offerings }
    }

    /// Offering for a plan
    pub fn get(&self, plan: Plan) -> &PlanOffering {
        &self.offerings[plan.level() as usize]
    }

    /// All offerings, cheapest first
    pub fn all(&self) -> &[PlanOffering] {
        &self.offerings
    }

    /// Cheapest offering that fully unlocks `feature`
    pub fn cheapest_unlocking(&self, feature: Feature) -> &PlanOffering {
        self.get(feature.minimum_plan())
    }

    /// Plans strictly above `current` that unlock `feature`, cheapest first
    ///
    /// Empty when `current` already has access.
    pub fn upgrades_unlocking(&self, current: Plan, feature: Feature) -> Vec<Plan> {
        if feature.has_access(current) {
            return Vec::new();
        }

        Plan::all()
            .into_iter()
            .filter(|p| p.level() > current.level() && feature.has_access(*p))
            .collect()
    }
}

impl Default for PlanCatalog {
    fn default() -> Self { Self::new() }
}

fn monthly_price(plan: Plan) -> Decimal {
    match plan {
        Plan::Free => dec!(0),
        Plan::Basic => dec!(19.90),
        Plan::Professional => dec!(49.90),
        Plan::Premium => dec!(89.90),
    }
}

fn tagline(plan: Plan) -> &'static str {
    match plan {
        Plan::Free => "Para conhecer a plataforma",
        Plan::Basic => "Para quem corta toda semana",
        Plan::Professional => "Para clientes que querem tudo",
        Plan::Premium => "Para barbearias e profissionais",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_offering_per_plan() {
        let catalog = PlanCatalog::new();

        assert_eq!(catalog.all().len(), Plan::all().len());
        for plan in Plan::all() {
            assert_eq!(catalog.get(plan).plan, plan);
        }
    }

    #[test]
    fn test_offerings_ascend_by_price() {
        let catalog = PlanCatalog::new();

        for pair in catalog.all().windows(2) {
            assert!(pair[0].monthly_price < pair[1].monthly_price);
        }
    }

    #[test]
    fn test_feature_lists_nest_upward() {
        let catalog = PlanCatalog::new();

        for pair in catalog.all().windows(2) {
            for feature in &pair[0].features {
                assert!(
                    pair[1].features.contains(feature),
                    "{} missing {feature} unlocked by {}",
                    pair[1].plan,
                    pair[0].plan
                );
            }
        }
    }

    #[test]
    fn test_exactly_one_highlighted_offering() {
        let catalog = PlanCatalog::new();
        let highlighted = catalog.all().iter().filter(|o| o.highlighted).count();

        assert_eq!(highlighted, 1);
    }

    #[test]
    fn test_premium_unlocks_everything() {
        let catalog = PlanCatalog::new();

        assert_eq!(catalog.get(Plan::Premium).features.len(), Feature::all().len());
    }

    #[test]
    fn test_cheapest_unlocking_is_minimum_plan() {
        let catalog = PlanCatalog::new();

        assert_eq!(
            catalog.cheapest_unlocking(Feature::TrendAnalysis).plan,
            Plan::Professional
        );
        assert_eq!(catalog.cheapest_unlocking(Feature::Scheduling).plan, Plan::Free);
    }

    #[test]
    fn test_upgrades_unlocking_ascending() {
        let catalog = PlanCatalog::new();

        assert_eq!(
            catalog.upgrades_unlocking(Plan::Basic, Feature::TrendAnalysis),
            vec![Plan::Professional, Plan::Premium]
        );
        assert_eq!(
            catalog.upgrades_unlocking(Plan::Free, Feature::BusinessManagement),
            vec![Plan::Premium]
        );
    }

    #[test]
    fn test_upgrades_empty_when_access_granted() {
        let catalog = PlanCatalog::new();

        assert!(catalog
            .upgrades_unlocking(Plan::Professional, Feature::TrendAnalysis)
            .is_empty());
        assert!(catalog.upgrades_unlocking(Plan::Free, Feature::Scheduling).is_empty());
    }

    #[test]
    fn test_prices() {
        let catalog = PlanCatalog::new();

        assert_eq!(catalog.get(Plan::Free).monthly_price, dec!(0));
        assert_eq!(catalog.get(Plan::Professional).monthly_price, dec!(49.90));
    }
}
