// Proven installations used as ground truth when sizing boilers and cylinders.

mod conversion_scenarios;
mod heating_scenarios;

pub use conversion_scenarios::CONVERSION_SCENARIOS;
pub use heating_scenarios::HEATING_SCENARIOS;

use crate::core::units::Pence;
use crate::input::BoilerType;
use serde::Serialize;
use strum_macros::Display;

/// System types recorded against reference installations. A high-output combi is sized and
/// priced as a combi.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum ScenarioSystemType {
    Combi,
    System,
    Regular,
    #[strum(serialize = "High-Output Combi")]
    #[serde(rename = "High-Output Combi")]
    HighOutputCombi,
}

impl ScenarioSystemType {
    pub fn category(&self) -> BoilerType {
        match self {
            ScenarioSystemType::Combi | ScenarioSystemType::HighOutputCombi => BoilerType::Combi,
            ScenarioSystemType::System => BoilerType::System,
            ScenarioSystemType::Regular => BoilerType::Regular,
        }
    }
}

/// Itemised costs recorded for a reference installation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReferenceCosts {
    pub boiler_unit: Pence,
    pub cylinder: Pence,
    pub flue: Pence,
    pub filter: Pence,
    pub chemicals: Pence,
    pub controls: Pence,
    pub labour: Pence,
}

/// A completed installation keyed by the shape of the property it was fitted in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeatingScenario {
    pub scenario_id: &'static str,
    pub property_description: &'static str,
    pub system_type: ScenarioSystemType,
    pub boiler_power_kw: u32,
    /// `None` when no cylinder was fitted.
    pub cylinder_size_l: Option<u32>,
    pub costs: ReferenceCosts,
}

impl HeatingScenario {
    pub fn total_cost(&self) -> Pence {
        let ReferenceCosts {
            boiler_unit,
            cylinder,
            flue,
            filter,
            chemicals,
            controls,
            labour,
        } = self.costs;
        [boiler_unit, cylinder, flue, filter, chemicals, controls, labour]
            .into_iter()
            .sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConversionRecommendation {
    pub category: BoilerType,
    pub justification: &'static str,
}

/// A proven change from one heating system to another.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConversionScenario {
    pub id: &'static str,
    pub property_description: &'static str,
    /// Loose phrase such as "1-2 adults" or "a family of 4".
    pub occupants: &'static str,
    pub current_system: &'static str,
    pub recommendation: ConversionRecommendation,
    pub recommended_specification: &'static str,
    pub flow_rate_lpm: f64,
    pub kw_output: u32,
    pub cylinder_size: Option<u32>,
    pub reasoning: &'static str,
}
