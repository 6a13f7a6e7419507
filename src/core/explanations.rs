//! Advisory text accompanying a quote. Nothing here feeds back into sizing or price.

use crate::core::complexity::{Complexity, JobComplexity};
use crate::core::reference_data::{HeatingScenario, HEATING_SCENARIOS};
use crate::core::sizing::{mean, SizingSummary};
use crate::core::text_signals::bedrooms_in;
use crate::input::{BoilerType, PropertyAnalysis};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub system_explanation: String,
    pub boiler_explanation: String,
    pub alternatives: Vec<String>,
    pub installation_notes: Vec<String>,
}

pub fn generate_recommendations(
    analysis: &PropertyAnalysis,
    sizing: &SizingSummary,
    complexity: &JobComplexity,
    matched_scenario: Option<&HeatingScenario>,
) -> Recommendations {
    Recommendations {
        system_explanation: system_explanation(analysis, sizing, matched_scenario),
        boiler_explanation: boiler_explanation(analysis, sizing),
        alternatives: alternatives(sizing.boiler_type),
        installation_notes: installation_notes(analysis, complexity),
    }
}

fn system_explanation(
    analysis: &PropertyAnalysis,
    sizing: &SizingSummary,
    matched_scenario: Option<&HeatingScenario>,
) -> String {
    let counts = analysis.counts();
    let reason = match sizing.boiler_type {
        BoilerType::Combi => "heats water on demand, so no hot water cylinder is needed",
        BoilerType::System => {
            "stores hot water in a cylinder so several outlets can run at once without loft tanks"
        }
        BoilerType::Regular => {
            "works with a cylinder and cold water storage tank, suiting existing open-vented pipework"
        }
    };
    let mut explanation = format!(
        "A {} boiler is recommended for a {}-bedroom {} with {} bathroom(s) and {} occupant(s): it {}.",
        sizing.boiler_type,
        counts.bedrooms,
        analysis.property_type.to_string().to_lowercase(),
        counts.bathrooms,
        counts.occupants,
        reason,
    );
    if let Some(scenario) = matched_scenario {
        explanation.push_str(&format!(
            " This matches our proven installation for a {} ({} at {}kW).",
            scenario.property_description.trim_end_matches('.'),
            scenario.system_type,
            scenario.boiler_power_kw,
        ));
    }

    explanation
}

fn boiler_explanation(analysis: &PropertyAnalysis, sizing: &SizingSummary) -> String {
    let bedrooms = analysis.counts().bedrooms;
    let similar = HEATING_SCENARIOS
        .iter()
        .filter(|scenario| scenario.system_type.category() == sizing.boiler_type)
        .filter(|scenario| bedrooms_in(scenario.property_description) == Some(bedrooms))
        .count();

    let mut explanation = format!(
        "A {}kW boiler covers an estimated heat load of {}kW and a hot water demand score of {}.",
        sizing.boiler_size_kw, sizing.heat_load_kw, sizing.hot_water_demand,
    );
    if sizing.cylinder_capacity_l > 0 {
        explanation.push_str(&format!(
            " It is paired with a {} litre cylinder.",
            sizing.cylinder_capacity_l
        ));
    }
    if similar > 0 {
        explanation.push_str(&format!(
            " Sized against {similar} similar {bedrooms}-bedroom {} installation(s).",
            sizing.boiler_type
        ));
    }

    explanation
}

fn alternatives(boiler_type: BoilerType) -> Vec<String> {
    let options: &[(BoilerType, &str)] = match boiler_type {
        BoilerType::Combi => &[(
            BoilerType::System,
            "A system boiler with a cylinder would give better flow to several taps at once, at a higher installed cost",
        )],
        BoilerType::System => &[
            (
                BoilerType::Combi,
                "A high-output combi would free up cylinder space but may struggle when outlets run together",
            ),
            (
                BoilerType::Regular,
                "A regular boiler keeps loft tanks, which can suit older pipework and low mains pressure",
            ),
        ],
        BoilerType::Regular => &[(
            BoilerType::System,
            "A system boiler removes the loft tanks while keeping stored hot water",
        )],
    };

    options
        .iter()
        .map(|(alternative, text)| match average_output(*alternative) {
            Some(kw) => format!("{text} (similar homes used around {kw:.0}kW)."),
            None => format!("{text}."),
        })
        .collect()
}

fn average_output(boiler_type: BoilerType) -> Option<f64> {
    mean(
        HEATING_SCENARIOS
            .iter()
            .filter(|scenario| scenario.system_type.category() == boiler_type)
            .map(|scenario| f64::from(scenario.boiler_power_kw)),
    )
}

fn installation_notes(analysis: &PropertyAnalysis, complexity: &JobComplexity) -> Vec<String> {
    let mut notes = vec![];

    match complexity.complexity {
        Complexity::Complex => notes.push(format!(
            "{}: expect additional pipework, removal of tanks and a longer installation.",
            complexity.job_type
        )),
        Complexity::Medium => notes.push(format!(
            "{}: some pipework and controls changes are likely.",
            complexity.job_type
        )),
        Complexity::Simple => {}
    }
    if analysis.drain_missing() {
        notes.push(
            "No drain near the boiler, so a condensate pump is included in the price.".to_string(),
        );
    }
    if analysis.relocating_boiler() {
        notes.push(
            "Moving the boiler needs extra pipework and a new flue route, confirmed at survey."
                .to_string(),
        );
    }
    if let Some(parking) = analysis
        .parking_situation
        .as_deref()
        .filter(|parking| parking.to_lowercase().contains("paid"))
    {
        let distance = analysis
            .parking_distance
            .as_deref()
            .map(|distance| format!(", about {distance} from the property"))
            .unwrap_or_default();
        notes.push(format!(
            "Parking is {parking}{distance}. Our engineers will need a vehicle on site for the whole \
             installation, so please arrange a permit or visitor pass in advance. Parking charges \
             are not included in this quote and may be added to the final invoice.",
        ));
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::complexity::calculate_job_complexity;
    use crate::core::sizing::{heating_match, size_property};
    use crate::input::{Answer, PropertyType};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn analysis() -> PropertyAnalysis {
        PropertyAnalysis {
            property_type: PropertyType::House,
            bedrooms: "3".into(),
            bathrooms: "3".into(),
            occupants: Some("4".into()),
            current_boiler: Some("Combi".into()),
            postcode: "LS6 2AB".into(),
            drain_nearby: Some(Answer::Yes),
            move_boiler: Some(Answer::No),
            parking_situation: Some("Driveway".into()),
            parking_distance: None,
        }
    }

    fn recommendations_for(analysis: &PropertyAnalysis) -> Recommendations {
        let sizing = size_property(analysis);
        generate_recommendations(
            analysis,
            &sizing,
            &calculate_job_complexity(analysis),
            heating_match(analysis, sizing.boiler_type),
        )
    }

    #[rstest]
    fn test_system_explanation_cites_matched_scenario(analysis: PropertyAnalysis) {
        let recommendations = recommendations_for(&analysis);
        assert!(recommendations
            .system_explanation
            .contains("3-Bed House, 3 Bath, 5 Occ"));
        assert!(recommendations.boiler_explanation.starts_with("A 40kW boiler"));
        assert!(recommendations
            .boiler_explanation
            .contains("a hot water demand score of "));
        assert!(!recommendations.boiler_explanation.contains("litres."));
        assert!(recommendations.installation_notes.is_empty());
    }

    #[rstest]
    fn test_combi_alternative_cites_system_average(analysis: PropertyAnalysis) {
        let recommendations = recommendations_for(&analysis);
        assert_eq!(recommendations.alternatives.len(), 1);
        assert!(recommendations.alternatives[0].contains("kW)."));
    }

    #[rstest]
    fn test_installation_notes(analysis: PropertyAnalysis) {
        let analysis = PropertyAnalysis {
            bathrooms: "1".into(),
            current_boiler: Some("Regular".into()),
            drain_nearby: Some(Answer::No),
            move_boiler: Some(Answer::Yes),
            parking_situation: Some("Paid on-street".into()),
            parking_distance: Some("50m".into()),
            ..analysis
        };
        let notes = recommendations_for(&analysis).installation_notes;
        assert_eq!(notes.len(), 4);
        assert!(notes[0].starts_with("Regular to Combi Boiler Conversion"));
        assert!(notes[1].contains("condensate pump"));
        assert!(notes[2].contains("Moving the boiler"));
        assert!(notes[3].starts_with("Parking is Paid on-street, about 50m from the property."));
    }
}
