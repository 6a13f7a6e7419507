use crate::core::sizing::determine_optimal_boiler_type;
use crate::input::{BoilerType, PropertyAnalysis};
use serde::Serialize;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

/// How far an installation departs from a like-for-like swap, and the resulting labour scaling.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobComplexity {
    pub complexity: Complexity,
    /// Applied to labour only, never to the boiler unit price.
    pub multiplier: f64,
    pub job_type: String,
}

pub const SURVEY_REQUIRED_JOB_TYPE: &str = "Boiler Replacement (Survey Required)";

pub fn calculate_job_complexity(analysis: &PropertyAnalysis) -> JobComplexity {
    classify_transition(
        analysis.current_system(),
        determine_optimal_boiler_type(analysis),
    )
}

pub fn classify_transition(current: Option<BoilerType>, recommended: BoilerType) -> JobComplexity {
    use BoilerType::*;

    let (complexity, multiplier, job_type) = match (current, recommended) {
        (Some(current), recommended) if current == recommended => (
            Complexity::Simple,
            1.0,
            format!("{recommended} Boiler Replacement (Like-for-Like)"),
        ),
        (Some(current @ Combi), recommended @ System)
        | (Some(current @ System), recommended @ Combi) => (
            Complexity::Medium,
            1.3,
            format!("{current} to {recommended} Boiler Conversion"),
        ),
        (Some(Regular), Combi) => (
            Complexity::Complex,
            1.7,
            "Regular to Combi Boiler Conversion".to_string(),
        ),
        (Some(Regular), System) => (
            Complexity::Medium,
            1.2,
            "Regular to System Boiler Conversion".to_string(),
        ),
        _ => (
            Complexity::Medium,
            1.4,
            SURVEY_REQUIRED_JOB_TYPE.to_string(),
        ),
    };

    JobComplexity {
        complexity,
        multiplier,
        job_type,
    }
}
