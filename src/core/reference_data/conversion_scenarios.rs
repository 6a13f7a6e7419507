use super::{ConversionRecommendation, ConversionScenario};
use crate::input::BoilerType;

/// Scan order matters: ties in scenario matching resolve to the earliest entry.
pub static CONVERSION_SCENARIOS: &[ConversionScenario] = &[
    ConversionScenario {
        id: "C01",
        property_description: "1-bed flat, 1 bathroom",
        occupants: "1-2 adults",
        current_system: "Combi",
        recommendation: ConversionRecommendation {
            category: BoilerType::Combi,
            justification: "Like-for-like combi replacement keeps the layout and suits low simultaneous demand.",
        },
        recommended_specification: "24kW combi boiler",
        flow_rate_lpm: 9.8,
        kw_output: 24,
        cylinder_size: None,
        reasoning: "A single bathroom with one or two occupants rarely draws hot water at two outlets at once, so an on-demand combi is the most efficient choice.",
    },
    ConversionScenario {
        id: "C02",
        property_description: "2-bed flat, 1 bathroom",
        occupants: "a couple",
        current_system: "Combi",
        recommendation: ConversionRecommendation {
            category: BoilerType::Combi,
            justification: "Replacing a combi with a combi is the simplest upgrade.",
        },
        recommended_specification: "24kW combi boiler",
        flow_rate_lpm: 9.8,
        kw_output: 24,
        cylinder_size: None,
        reasoning: "Two occupants and one bathroom sit comfortably within a standard combi's flow rate.",
    },
    ConversionScenario {
        id: "C03",
        property_description: "2-bed flat, 1 bathroom",
        occupants: "a couple",
        current_system: "Regular",
        recommendation: ConversionRecommendation {
            category: BoilerType::Combi,
            justification: "Removing the loft tanks and cylinder frees space in a small flat.",
        },
        recommended_specification: "24kW combi boiler",
        flow_rate_lpm: 9.8,
        kw_output: 24,
        cylinder_size: None,
        reasoning: "Stored hot water is wasted in a small household and the cylinder cupboard can be reclaimed.",
    },
    ConversionScenario {
        id: "C04",
        property_description: "2-bed terraced house, 1 bathroom",
        occupants: "a family of 3",
        current_system: "Regular",
        recommendation: ConversionRecommendation {
            category: BoilerType::Combi,
            justification: "Combi conversion removes tanks and suits a single bathroom.",
        },
        recommended_specification: "28kW combi boiler",
        flow_rate_lpm: 11.5,
        kw_output: 28,
        cylinder_size: None,
        reasoning: "Mains pressure is adequate for one bathroom and three occupants, so stored water adds cost without benefit.",
    },
    ConversionScenario {
        id: "C05",
        property_description: "3-bed semi-detached house, 1 bathroom",
        occupants: "a family of 4",
        current_system: "Combi",
        recommendation: ConversionRecommendation {
            category: BoilerType::Combi,
            justification: "Like-for-like combi replacement with a higher hot water output.",
        },
        recommended_specification: "30kW combi boiler",
        flow_rate_lpm: 12.3,
        kw_output: 30,
        cylinder_size: None,
        reasoning: "A family of four with one bathroom needs a slightly higher flow rate but no stored hot water.",
    },
    ConversionScenario {
        id: "C06",
        property_description: "3-bed semi-detached house, 1 bathroom",
        occupants: "a family of 4",
        current_system: "Regular",
        recommendation: ConversionRecommendation {
            category: BoilerType::Combi,
            justification: "Combi conversion for a single-bathroom family home.",
        },
        recommended_specification: "32kW combi boiler",
        flow_rate_lpm: 13.1,
        kw_output: 32,
        cylinder_size: None,
        reasoning: "One bathroom limits simultaneous draw-off, so a 32kW combi replaces the tanks and cylinder.",
    },
    ConversionScenario {
        id: "C07",
        property_description: "3-bed semi-detached house, 2 bathrooms",
        occupants: "a family of 4",
        current_system: "Combi",
        recommendation: ConversionRecommendation {
            category: BoilerType::System,
            justification: "System boiler with cylinder to serve two bathrooms at once.",
        },
        recommended_specification: "24kW system boiler with 210L unvented cylinder",
        flow_rate_lpm: 18.0,
        kw_output: 24,
        cylinder_size: Some(210),
        reasoning: "Two bathrooms used together exceed what a combi can deliver, so hot water is stored.",
    },
    ConversionScenario {
        id: "C08",
        property_description: "3-bed detached house, 2 bathrooms",
        occupants: "a family of 5",
        current_system: "Regular",
        recommendation: ConversionRecommendation {
            category: BoilerType::System,
            justification: "System conversion removes the loft tanks while keeping stored hot water.",
        },
        recommended_specification: "28kW system boiler with 250L unvented cylinder",
        flow_rate_lpm: 20.0,
        kw_output: 28,
        cylinder_size: Some(250),
        reasoning: "Five occupants across two bathrooms need stored hot water at mains pressure.",
    },
    ConversionScenario {
        id: "C09",
        property_description: "4-bed detached house, 1 bathroom",
        occupants: "a family of 5",
        current_system: "Regular",
        recommendation: ConversionRecommendation {
            category: BoilerType::Combi,
            justification: "High-output combi removes the tanks for a single-bathroom home.",
        },
        recommended_specification: "35kW high-output combi boiler",
        flow_rate_lpm: 14.3,
        kw_output: 35,
        cylinder_size: None,
        reasoning: "With only one bathroom a high-output combi meets peak demand and frees the airing cupboard.",
    },
    ConversionScenario {
        id: "C10",
        property_description: "4-bed detached house, 2 bathrooms",
        occupants: "a family of 4",
        current_system: "System",
        recommendation: ConversionRecommendation {
            category: BoilerType::System,
            justification: "Like-for-like system replacement with a new cylinder.",
        },
        recommended_specification: "30kW system boiler with 250L unvented cylinder",
        flow_rate_lpm: 20.0,
        kw_output: 30,
        cylinder_size: Some(250),
        reasoning: "Two bathrooms and a larger home need stored hot water and a higher heating output.",
    },
    ConversionScenario {
        id: "C11",
        property_description: "4-bed detached house, 3 bathrooms",
        occupants: "a family of 5",
        current_system: "Combi",
        recommendation: ConversionRecommendation {
            category: BoilerType::Combi,
            justification: "High-output combi retained at the customer's request.",
        },
        recommended_specification: "40kW high-output combi boiler",
        flow_rate_lpm: 16.4,
        kw_output: 40,
        cylinder_size: None,
        reasoning: "A high-output combi can serve three bathrooms when they are rarely used together.",
    },
    ConversionScenario {
        id: "C12",
        property_description: "5-bed detached house, 2 bathrooms",
        occupants: "a family of 6",
        current_system: "Combi",
        recommendation: ConversionRecommendation {
            category: BoilerType::System,
            justification: "System boiler with a large cylinder for a busy household.",
        },
        recommended_specification: "32kW system boiler with 300L unvented cylinder",
        flow_rate_lpm: 22.0,
        kw_output: 32,
        cylinder_size: Some(300),
        reasoning: "Six occupants outstrip any combi's flow rate, so a large stored volume is required.",
    },
    ConversionScenario {
        id: "C13",
        property_description: "5-bed detached house, 3 bathrooms",
        occupants: "a large family",
        current_system: "Regular",
        recommendation: ConversionRecommendation {
            category: BoilerType::Regular,
            justification: "Keep the open-vented configuration for maximum capacity.",
        },
        recommended_specification: "35kW regular boiler with 300L vented cylinder",
        flow_rate_lpm: 22.0,
        kw_output: 35,
        cylinder_size: Some(300),
        reasoning: "The existing gravity-fed system and pipework suit a high-capacity regular boiler.",
    },
    ConversionScenario {
        id: "C14",
        property_description: "6-bed detached house, 4 bathrooms",
        occupants: "8 adults",
        current_system: "System",
        recommendation: ConversionRecommendation {
            category: BoilerType::System,
            justification: "Large system boiler with a high-recovery cylinder.",
        },
        recommended_specification: "42kW system boiler with 400L unvented cylinder",
        flow_rate_lpm: 25.0,
        kw_output: 42,
        cylinder_size: Some(400),
        reasoning: "Four bathrooms in use together require a large store and fast reheat.",
    },
    ConversionScenario {
        id: "C15",
        property_description: "6-bed country house, 6 bathrooms",
        occupants: "10 people",
        current_system: "Regular",
        recommendation: ConversionRecommendation {
            category: BoilerType::System,
            justification: "Maximum output system boiler with the largest cylinder.",
        },
        recommended_specification: "50kW system boiler with 500L unvented cylinder",
        flow_rate_lpm: 30.0,
        kw_output: 50,
        cylinder_size: Some(500),
        reasoning: "Six bathrooms make a stored, mains-pressure system mandatory.",
    },
];
