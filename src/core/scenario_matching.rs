use crate::core::reference_data::{ConversionScenario, HeatingScenario, CONVERSION_SCENARIOS};
use crate::core::text_signals::{
    bathrooms_in, bedrooms_in, describes_flat, describes_house, estimate_occupants, occupants_in,
};
use crate::input::{
    classify_system_text, BoilerType, PropertyAnalysis, PropertyCounts, PropertyType,
};
use serde::Serialize;

const BEDROOM_WEIGHTS: (u32, u32) = (100, 50);
const BATHROOM_WEIGHTS: (u32, u32) = (80, 40);
const OCCUPANT_WEIGHTS: (u32, u32) = (60, 30);
const PROPERTY_TYPE_BONUS: u32 = 40;
const HEATING_SYSTEM_BONUS: u32 = 20;
const CONVERSION_SYSTEM_BONUS: u32 = 15;

/// A heating scenario only counts as a match above this score.
pub const MINIMUM_CONFIDENT_SCORE: u32 = 50;

/// Find the heating scenario closest to the property, or `None` when no scenario scores above
/// [`MINIMUM_CONFIDENT_SCORE`]. The earliest of equally scored scenarios wins.
pub fn find_best_matching_scenario<'a>(
    scenarios: &'a [HeatingScenario],
    counts: PropertyCounts,
    property_type: PropertyType,
    preferred_system: BoilerType,
) -> Option<&'a HeatingScenario> {
    best_by_score(scenarios, |scenario| {
        score_heating_scenario(scenario, counts, property_type, preferred_system)
    })
    .filter(|(_, score)| *score > MINIMUM_CONFIDENT_SCORE)
    .map(|(scenario, _)| scenario)
}

pub(crate) fn score_heating_scenario(
    scenario: &HeatingScenario,
    counts: PropertyCounts,
    property_type: PropertyType,
    preferred_system: BoilerType,
) -> u32 {
    let description = scenario.property_description;
    let shape_matches = match property_type {
        PropertyType::Flat => describes_flat(description),
        PropertyType::House => describes_house(description),
    };

    proximity_score(bedrooms_in(description), counts.bedrooms, BEDROOM_WEIGHTS)
        + proximity_score(bathrooms_in(description), counts.bathrooms, BATHROOM_WEIGHTS)
        + proximity_score(occupants_in(description), counts.occupants, OCCUPANT_WEIGHTS)
        + if shape_matches { PROPERTY_TYPE_BONUS } else { 0 }
        + if scenario.system_type.category() == preferred_system {
            HEATING_SYSTEM_BONUS
        } else {
            0
        }
}

/// Find the conversion scenario closest to the property. Unlike heating scenarios there is no
/// confidence threshold, so this is only `None` for an empty table.
pub fn find_best_conversion_scenario<'a>(
    scenarios: &'a [ConversionScenario],
    counts: PropertyCounts,
    current_system: Option<BoilerType>,
) -> Option<&'a ConversionScenario> {
    best_by_score(scenarios, |scenario| {
        score_conversion_scenario(scenario, counts, current_system)
    })
    .map(|(scenario, _)| scenario)
}

pub(crate) fn score_conversion_scenario(
    scenario: &ConversionScenario,
    counts: PropertyCounts,
    current_system: Option<BoilerType>,
) -> u32 {
    let description = scenario.property_description;
    let same_system = current_system.is_some()
        && classify_system_text(scenario.current_system) == current_system;

    proximity_score(bedrooms_in(description), counts.bedrooms, BEDROOM_WEIGHTS)
        + proximity_score(bathrooms_in(description), counts.bathrooms, BATHROOM_WEIGHTS)
        + proximity_score(
            estimate_occupants(scenario.occupants),
            counts.occupants,
            OCCUPANT_WEIGHTS,
        )
        + if same_system { CONVERSION_SYSTEM_BONUS } else { 0 }
}

/// The recommendation carried by the conversion scenario closest to a property.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionAdvice {
    pub scenario_id: &'static str,
    pub current_system: &'static str,
    pub category: BoilerType,
    pub justification: &'static str,
    pub specification: &'static str,
    pub kw_output: u32,
    pub flow_rate_lpm: f64,
    pub cylinder_size: Option<u32>,
    pub reasoning: &'static str,
}

impl From<&ConversionScenario> for ConversionAdvice {
    fn from(scenario: &ConversionScenario) -> Self {
        Self {
            scenario_id: scenario.id,
            current_system: scenario.current_system,
            category: scenario.recommendation.category,
            justification: scenario.recommendation.justification,
            specification: scenario.recommended_specification,
            kw_output: scenario.kw_output,
            flow_rate_lpm: scenario.flow_rate_lpm,
            cylinder_size: scenario.cylinder_size,
            reasoning: scenario.reasoning,
        }
    }
}

pub fn get_conversion_recommendations(analysis: &PropertyAnalysis) -> Option<ConversionAdvice> {
    find_best_conversion_scenario(
        CONVERSION_SCENARIOS,
        analysis.counts(),
        analysis.current_system(),
    )
    .map(ConversionAdvice::from)
}

fn proximity_score(found: Option<u32>, target: u32, (exact, near): (u32, u32)) -> u32 {
    match found {
        Some(value) if value == target => exact,
        Some(value) if value.abs_diff(target) == 1 => near,
        _ => 0,
    }
}

fn best_by_score<T>(items: &[T], score: impl Fn(&T) -> u32) -> Option<(&T, u32)> {
    let mut best: Option<(&T, u32)> = None;
    for item in items {
        let item_score = score(item);
        if best.map_or(true, |(_, best_score)| item_score > best_score) {
            best = Some((item, item_score));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference_data::HEATING_SCENARIOS;
    use crate::input::Answer;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn counts(bedrooms: u32, bathrooms: u32, occupants: u32) -> PropertyCounts {
        PropertyCounts {
            bedrooms,
            bathrooms,
            occupants,
        }
    }

    #[rstest]
    #[case(Some(3), 3, 100)]
    #[case(Some(4), 3, 50)]
    #[case(Some(2), 3, 50)]
    #[case(Some(5), 3, 0)]
    #[case(None, 3, 0)]
    fn test_proximity_score(#[case] found: Option<u32>, #[case] target: u32, #[case] score: u32) {
        assert_eq!(proximity_score(found, target, BEDROOM_WEIGHTS), score);
    }

    #[test]
    fn test_score_heating_scenario_adds_all_signals() {
        let h13 = HEATING_SCENARIOS
            .iter()
            .find(|s| s.scenario_id == "H13")
            .unwrap();
        // 4-Bed House, 1 Bath, 5 Occ., high-output combi
        assert_eq!(
            score_heating_scenario(h13, counts(4, 1, 5), PropertyType::House, BoilerType::Combi),
            100 + 80 + 60 + 40 + 20
        );
        assert_eq!(
            score_heating_scenario(h13, counts(3, 2, 4), PropertyType::Flat, BoilerType::System),
            50 + 40 + 30
        );
    }

    #[test]
    fn test_find_best_matching_scenario() {
        let best = find_best_matching_scenario(
            HEATING_SCENARIOS,
            counts(3, 3, 4),
            PropertyType::House,
            BoilerType::Combi,
        )
        .unwrap();
        assert_eq!(best.scenario_id, "H24");
    }

    #[test]
    fn test_no_confident_match_below_threshold() {
        // only the property type bonus can apply to a nine bedroom, eight bathroom property
        assert_eq!(
            find_best_matching_scenario(
                HEATING_SCENARIOS,
                counts(9, 8, 12),
                PropertyType::Flat,
                BoilerType::Regular,
            ),
            None
        );
    }

    #[test]
    fn test_ties_resolve_to_first_scenario() {
        let scenarios = [HEATING_SCENARIOS[0], HEATING_SCENARIOS[0]];
        let best = find_best_matching_scenario(
            &scenarios,
            counts(1, 1, 1),
            PropertyType::Flat,
            BoilerType::Combi,
        )
        .unwrap();
        assert!(std::ptr::eq(best, &scenarios[0]));
    }

    #[rstest]
    #[case(counts(1, 1, 2), Some(BoilerType::Combi), "C01")]
    #[case(counts(4, 1, 5), Some(BoilerType::Regular), "C09")]
    #[case(counts(3, 2, 4), Some(BoilerType::Combi), "C07")]
    #[case(counts(6, 6, 10), Some(BoilerType::Regular), "C15")]
    fn test_find_best_conversion_scenario(
        #[case] counts: PropertyCounts,
        #[case] current: Option<BoilerType>,
        #[case] expected: &str,
    ) {
        let best = find_best_conversion_scenario(CONVERSION_SCENARIOS, counts, current).unwrap();
        assert_eq!(best.id, expected);
    }

    #[test]
    fn test_conversion_always_matches_non_empty_table() {
        assert!(
            find_best_conversion_scenario(CONVERSION_SCENARIOS, counts(12, 9, 20), None).is_some()
        );
        assert!(find_best_conversion_scenario(&[], counts(3, 1, 3), None).is_none());
    }

    #[test]
    fn test_same_system_bonus_separates_otherwise_equal_scenarios() {
        // C02 and C03 differ only in the current system
        let combi = find_best_conversion_scenario(
            CONVERSION_SCENARIOS,
            counts(2, 1, 2),
            Some(BoilerType::Combi),
        )
        .unwrap();
        let regular = find_best_conversion_scenario(
            CONVERSION_SCENARIOS,
            counts(2, 1, 2),
            Some(BoilerType::Regular),
        )
        .unwrap();
        assert_eq!(combi.id, "C02");
        assert_eq!(regular.id, "C03");
    }

    #[test]
    fn test_get_conversion_recommendations() {
        let analysis = PropertyAnalysis {
            property_type: PropertyType::House,
            bedrooms: "4".into(),
            bathrooms: "1".into(),
            occupants: Some("5".into()),
            current_boiler: Some("Regular".into()),
            postcode: "SW1A 1AA".into(),
            drain_nearby: Some(Answer::Yes),
            move_boiler: Some(Answer::No),
            parking_situation: None,
            parking_distance: None,
        };
        let advice = get_conversion_recommendations(&analysis).unwrap();
        assert_eq!(advice.scenario_id, "C09");
        assert_eq!(advice.category, BoilerType::Combi);
        assert_eq!(advice.kw_output, 35);
        assert_eq!(advice.cylinder_size, None);
    }
}
