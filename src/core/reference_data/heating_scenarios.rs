use super::{HeatingScenario, ReferenceCosts, ScenarioSystemType};
use crate::core::units::Pence;

#[allow(clippy::too_many_arguments)]
const fn costs(
    boiler_unit: u64,
    cylinder: u64,
    flue: u64,
    filter: u64,
    chemicals: u64,
    controls: u64,
    labour: u64,
) -> ReferenceCosts {
    ReferenceCosts {
        boiler_unit: Pence::from_pounds(boiler_unit),
        cylinder: Pence::from_pounds(cylinder),
        flue: Pence::from_pounds(flue),
        filter: Pence::from_pounds(filter),
        chemicals: Pence::from_pounds(chemicals),
        controls: Pence::from_pounds(controls),
        labour: Pence::from_pounds(labour),
    }
}

/// Scan order matters: ties in scenario matching resolve to the earliest entry.
pub static HEATING_SCENARIOS: &[HeatingScenario] = &[
    HeatingScenario {
        scenario_id: "H01",
        property_description: "1-Bed Flat, 1 Bath, 1 Occ.",
        system_type: ScenarioSystemType::Combi,
        boiler_power_kw: 24,
        cylinder_size_l: None,
        costs: costs(950, 0, 120, 150, 90, 120, 1150),
    },
    HeatingScenario {
        scenario_id: "H02",
        property_description: "1-Bed Flat, 1 Bath, 2 Occ.",
        system_type: ScenarioSystemType::Combi,
        boiler_power_kw: 24,
        cylinder_size_l: None,
        costs: costs(980, 0, 120, 150, 90, 120, 1200),
    },
    HeatingScenario {
        scenario_id: "H03",
        property_description: "2-Bed Flat, 1 Bath, 2 Occ.",
        system_type: ScenarioSystemType::Combi,
        boiler_power_kw: 24,
        cylinder_size_l: None,
        costs: costs(1050, 0, 140, 150, 90, 150, 1250),
    },
    HeatingScenario {
        scenario_id: "H04",
        property_description: "2-Bed Flat, 1 Bath, 3 Occ.",
        system_type: ScenarioSystemType::Combi,
        boiler_power_kw: 28,
        cylinder_size_l: None,
        costs: costs(1150, 0, 140, 150, 90, 150, 1300),
    },
    HeatingScenario {
        scenario_id: "H05",
        property_description: "2-Bed Flat, 2 Bath, 3 Occ.",
        system_type: ScenarioSystemType::Combi,
        boiler_power_kw: 32,
        cylinder_size_l: None,
        costs: costs(1350, 0, 160, 150, 110, 180, 1450),
    },
    HeatingScenario {
        scenario_id: "H06",
        property_description: "3-Bed Flat, 2 Bath, 4 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 24,
        cylinder_size_l: Some(150),
        costs: costs(1250, 1100, 160, 150, 110, 220, 1900),
    },
    HeatingScenario {
        scenario_id: "H07",
        property_description: "2-Bed House, 1 Bath, 2 Occ.",
        system_type: ScenarioSystemType::Combi,
        boiler_power_kw: 28,
        cylinder_size_l: None,
        costs: costs(1150, 0, 150, 150, 100, 150, 1350),
    },
    HeatingScenario {
        scenario_id: "H08",
        property_description: "2-Bed House, 1 Bath, 3 Occ.",
        system_type: ScenarioSystemType::Combi,
        boiler_power_kw: 28,
        cylinder_size_l: None,
        costs: costs(1150, 0, 150, 150, 100, 180, 1400),
    },
    HeatingScenario {
        scenario_id: "H09",
        property_description: "3-Bed House, 1 Bath, 3 Occ.",
        system_type: ScenarioSystemType::Combi,
        boiler_power_kw: 30,
        cylinder_size_l: None,
        costs: costs(1250, 0, 160, 150, 110, 180, 1450),
    },
    HeatingScenario {
        scenario_id: "H10",
        property_description: "3-Bed House, 1 Bath, 4 Occ.",
        system_type: ScenarioSystemType::Combi,
        boiler_power_kw: 32,
        cylinder_size_l: None,
        costs: costs(1350, 0, 160, 150, 110, 200, 1500),
    },
    HeatingScenario {
        scenario_id: "H11",
        property_description: "3-Bed House, 2 Bath, 4 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 24,
        cylinder_size_l: Some(210),
        costs: costs(1300, 1700, 170, 150, 120, 250, 2100),
    },
    HeatingScenario {
        scenario_id: "H12",
        property_description: "3-Bed House, 2 Bath, 5 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 28,
        cylinder_size_l: Some(250),
        costs: costs(1400, 2000, 170, 150, 120, 250, 2200),
    },
    HeatingScenario {
        scenario_id: "H13",
        property_description: "4-Bed House, 1 Bath, 5 Occ.",
        system_type: ScenarioSystemType::HighOutputCombi,
        boiler_power_kw: 35,
        cylinder_size_l: None,
        costs: costs(1650, 0, 180, 150, 120, 220, 1650),
    },
    HeatingScenario {
        scenario_id: "H14",
        property_description: "4-Bed House, 2 Bath, 4 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 28,
        cylinder_size_l: Some(210),
        costs: costs(1400, 1700, 180, 150, 120, 280, 2250),
    },
    HeatingScenario {
        scenario_id: "H15",
        property_description: "4-Bed House, 2 Bath, 5 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 30,
        cylinder_size_l: Some(250),
        costs: costs(1500, 2000, 180, 150, 130, 280, 2350),
    },
    HeatingScenario {
        scenario_id: "H16",
        property_description: "4-Bed House, 3 Bath, 5 Occ.",
        system_type: ScenarioSystemType::HighOutputCombi,
        boiler_power_kw: 40,
        cylinder_size_l: None,
        costs: costs(1900, 0, 190, 150, 130, 250, 1800),
    },
    HeatingScenario {
        scenario_id: "H17",
        property_description: "4-Bed House, 3 Bath, 6 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 32,
        cylinder_size_l: Some(300),
        costs: costs(1600, 2300, 190, 150, 130, 300, 2500),
    },
    HeatingScenario {
        scenario_id: "H18",
        property_description: "5-Bed House, 2 Bath, 6 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 32,
        cylinder_size_l: Some(300),
        costs: costs(1600, 2300, 200, 150, 140, 300, 2600),
    },
    HeatingScenario {
        scenario_id: "H19",
        property_description: "5-Bed House, 3 Bath, 6 Occ.",
        system_type: ScenarioSystemType::Regular,
        boiler_power_kw: 35,
        cylinder_size_l: Some(300),
        costs: costs(1550, 2300, 200, 150, 150, 320, 2900),
    },
    HeatingScenario {
        scenario_id: "H20",
        property_description: "5-Bed House, 4 Bath, 7 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 40,
        cylinder_size_l: Some(400),
        costs: costs(1850, 2700, 210, 150, 150, 350, 2900),
    },
    HeatingScenario {
        scenario_id: "H21",
        property_description: "3-Bed House, 1 Bath, 3 Occ.",
        system_type: ScenarioSystemType::Regular,
        boiler_power_kw: 24,
        cylinder_size_l: Some(170),
        costs: costs(1100, 1400, 160, 150, 120, 220, 2100),
    },
    HeatingScenario {
        scenario_id: "H22",
        property_description: "6-Bed House, 4 Bath, 8 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 42,
        cylinder_size_l: Some(500),
        costs: costs(2000, 2700, 220, 150, 160, 380, 3200),
    },
    HeatingScenario {
        scenario_id: "H23",
        property_description: "6-Bed House, 6 Bath, 10 Occ.",
        system_type: ScenarioSystemType::System,
        boiler_power_kw: 50,
        cylinder_size_l: Some(500),
        costs: costs(2400, 2700, 240, 150, 180, 420, 3600),
    },
    HeatingScenario {
        scenario_id: "H24",
        property_description: "3-Bed House, 3 Bath, 5 Occ.",
        system_type: ScenarioSystemType::HighOutputCombi,
        boiler_power_kw: 40,
        cylinder_size_l: None,
        costs: costs(1900, 0, 180, 150, 130, 250, 1750),
    },
];
