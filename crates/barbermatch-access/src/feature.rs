//! Feature Catalog and Gating Configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use barbermatch_common::{BarberMatchError, Plan};

/// Gated platform capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Haircut trend analysis for the client dashboard
    #[serde(rename = "trends")]
    TrendAnalysis,
    /// Face-shape based virtual try-on
    #[serde(rename = "virtual")]
    VirtualTryOn,
    /// Appointment scheduling with barbershops
    #[serde(rename = "scheduling")]
    Scheduling,
    /// Barbershop discovery and search
    #[serde(rename = "finder")]
    BarberFinder,
    /// Client/barber chat
    #[serde(rename = "chat")]
    Chat,
    /// Business management panel for shop owners
    #[serde(rename = "business")]
    BusinessManagement,
}

/// Gating configuration for a single feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureConfig {
    /// Display name
    pub name: &'static str,
    /// Short description for upgrade prompts
    pub description: &'static str,
    /// Cheapest plan that fully unlocks the feature
    pub minimum_plan: Plan,
    /// What a free subscriber still gets, if anything
    pub free_limitation: Option<&'static str>,
    /// What a basic subscriber still gets, if anything
    pub basic_limitation: Option<&'static str>,
    /// Served only by the mobile app surface
    pub app_only: bool,
    /// A demo mode exists that bypasses the gate
    pub has_demo: bool,
}

static TREND_ANALYSIS: FeatureConfig = FeatureConfig {
    name: "Análise de Tendências",
    description: "Tendências de cortes e estilos em alta na sua região",
    minimum_plan: Plan::Professional,
    free_limitation: None,
    basic_limitation: Some("Visualização limitada às 3 principais tendências"),
    app_only: false,
    has_demo: true,
};

static VIRTUAL_TRY_ON: FeatureConfig = FeatureConfig {
    name: "Experimentar Virtual",
    description: "Visualize cortes no seu rosto antes de agendar",
    minimum_plan: Plan::Free,
    free_limitation: Some("Limitado a 5 simulações por mês"),
    basic_limitation: None,
    app_only: true,
    has_demo: false,
};

static SCHEDULING: FeatureConfig = FeatureConfig {
    name: "Agendamento",
    description: "Agende horários com as melhores barbearias",
    minimum_plan: Plan::Free,
    free_limitation: Some("Limitado a 3 agendamentos por dia"),
    basic_limitation: None,
    app_only: false,
    has_demo: false,
};

static BARBER_FINDER: FeatureConfig = FeatureConfig {
    name: "Buscar Barbeiros",
    description: "Encontre barbearias e profissionais perto de você",
    minimum_plan: Plan::Free,
    free_limitation: None,
    basic_limitation: None,
    app_only: false,
    has_demo: false,
};

static CHAT: FeatureConfig = FeatureConfig {
    name: "Chat com Barbeiros",
    description: "Converse direto com o profissional antes do corte",
    minimum_plan: Plan::Basic,
    free_limitation: None,
    basic_limitation: Some("Mensagens limitadas a 10 por conversa"),
    app_only: false,
    has_demo: false,
};

static BUSINESS_MANAGEMENT: FeatureConfig = FeatureConfig {
    name: "Gestão de Negócio",
    description: "Painel completo para administrar sua barbearia",
    minimum_plan: Plan::Premium,
    free_limitation: None,
    basic_limitation: Some("Acesso básico ao painel de gestão"),
    app_only: false,
    has_demo: true,
};

impl Feature {
    /// All features in catalog order
    pub fn all() -> [Feature; 6] {
        [
            Self::TrendAnalysis,
            Self::VirtualTryOn,
            Self::Scheduling,
            Self::BarberFinder,
            Self::Chat,
            Self::BusinessManagement,
        ]
    }

    /// Gating configuration
    ///
    /// The match keeps the table total over the enum: adding a feature
    /// without a config entry is a compile error, not a runtime miss.
    pub fn config(&self) -> &'static FeatureConfig {
        match self {
            Self::TrendAnalysis => &TREND_ANALYSIS,
            Self::VirtualTryOn => &VIRTUAL_TRY_ON,
            Self::Scheduling => &SCHEDULING,
            Self::BarberFinder => &BARBER_FINDER,
            Self::Chat => &CHAT,
            Self::BusinessManagement => &BUSINESS_MANAGEMENT,
        }
    }

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrendAnalysis => "trends",
            Self::VirtualTryOn => "virtual",
            Self::Scheduling => "scheduling",
            Self::BarberFinder => "finder",
            Self::Chat => "chat",
            Self::BusinessManagement => "business",
        }
    }

    /// Name shown to users
    pub fn display_name(&self) -> &'static str {
        self.config().name
    }

    /// Cheapest plan that fully unlocks the feature
    pub fn minimum_plan(&self) -> Plan {
        self.config().minimum_plan
    }

    /// True when the feature is only served by the mobile app
    ///
    /// Orthogonal to plan gating; callers AND this with `has_access` to
    /// decide whether the feature is fully usable on the web surface.
    pub fn is_app_only(&self) -> bool {
        self.config().app_only
    }

    /// True when a demo bypass exists for the feature
    pub fn has_demo(&self) -> bool {
        self.config().has_demo
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = BarberMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trends" => Ok(Self::TrendAnalysis),
            "virtual" => Ok(Self::VirtualTryOn),
            "scheduling" => Ok(Self::Scheduling),
            "finder" => Ok(Self::BarberFinder),
            "chat" => Ok(Self::Chat),
            "business" => Ok(Self::BusinessManagement),
            other => Err(BarberMatchError::UnknownFeature(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_total_over_features() {
        for feature in Feature::all() {
            let config = feature.config();

            assert!(!config.name.is_empty());
            assert!(!config.description.is_empty());
        }
    }

    #[test]
    fn test_minimum_plans() {
        assert_eq!(Feature::TrendAnalysis.minimum_plan(), Plan::Professional);
        assert_eq!(Feature::Scheduling.minimum_plan(), Plan::Free);
        assert_eq!(Feature::Chat.minimum_plan(), Plan::Basic);
        assert_eq!(Feature::BusinessManagement.minimum_plan(), Plan::Premium);
    }

    #[test]
    fn test_app_only_flag() {
        assert!(Feature::VirtualTryOn.is_app_only());

        for feature in Feature::all() {
            if feature != Feature::VirtualTryOn {
                assert!(!feature.is_app_only(), "{feature} should not be app-only");
            }
        }
    }

    #[test]
    fn test_parse_known_ids() {
        for feature in Feature::all() {
            assert_eq!(feature.as_str().parse::<Feature>().unwrap(), feature);
        }
    }

    #[test]
    fn test_parse_unknown_id_fails() {
        let err = "beard-trim".parse::<Feature>().unwrap_err();

        assert!(matches!(err, BarberMatchError::UnknownFeature(ref id) if id == "beard-trim"));
    }

    #[test]
    fn test_wire_ids_match_serde() {
        for feature in Feature::all() {
            let json = serde_json::to_string(&feature).unwrap();
            assert_eq!(json, format!("\"{}\"", feature.as_str()));

            let back: Feature = serde_json::from_str(&json).unwrap();
            assert_eq!(back, feature);
        }
    }
}
