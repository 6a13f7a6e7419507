use crate::errors::QuoteError;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::io::Read;
use strum_macros::{Display, EnumIter};

pub fn ingest_property_analysis(json: impl Read) -> anyhow::Result<PropertyAnalysis> {
    let analysis: PropertyAnalysis = serde_json::from_reader(json)?;
    analysis.validate().map_err(QuoteError::InvalidInput)?;

    Ok(analysis)
}

/// The property questionnaire answers a quote is calculated from.
///
/// Counts arrive as the strings the questionnaire offers (e.g. "3" or "5+") and are only turned
/// into numbers through [`PropertyAnalysis::counts`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct PropertyAnalysis {
    pub property_type: PropertyType,
    #[validate(min_length = 1)]
    pub bedrooms: String,
    #[validate(min_length = 1)]
    pub bathrooms: String,
    pub occupants: Option<String>,
    pub current_boiler: Option<String>,
    #[validate(min_length = 1)]
    pub postcode: String,
    pub drain_nearby: Option<Answer>,
    pub move_boiler: Option<Answer>,
    pub parking_situation: Option<String>,
    pub parking_distance: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PropertyType {
    House,
    Flat,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Answer {
    Yes,
    No,
}

/// The three boiler categories a property can be fitted with.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, Hash, PartialEq, Serialize,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BoilerType {
    Combi,
    System,
    Regular,
}

/// Parsed room and occupant counts, each at least 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PropertyCounts {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub occupants: u32,
}

impl PropertyAnalysis {
    pub fn counts(&self) -> PropertyCounts {
        PropertyCounts {
            bedrooms: parse_count(&self.bedrooms),
            bathrooms: parse_count(&self.bathrooms),
            occupants: self.occupants.as_deref().map(parse_count).unwrap_or(1),
        }
    }

    pub fn is_flat(&self) -> bool {
        self.property_type == PropertyType::Flat
    }

    /// Category of the system currently installed, when the free-text answer names one.
    pub fn current_system(&self) -> Option<BoilerType> {
        self.current_boiler.as_deref().and_then(classify_system_text)
    }

    pub fn current_is_combi(&self) -> bool {
        self.current_boiler_text().contains("combi")
    }

    pub fn current_is_regular(&self) -> bool {
        let text = self.current_boiler_text();
        ["regular", "conventional", "heat only"]
            .iter()
            .any(|signal| text.contains(signal))
    }

    pub fn drain_missing(&self) -> bool {
        self.drain_nearby == Some(Answer::No)
    }

    pub fn relocating_boiler(&self) -> bool {
        self.move_boiler == Some(Answer::Yes)
    }

    fn current_boiler_text(&self) -> String {
        self.current_boiler
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
    }
}

const MAX_COUNT: u32 = 99;

/// Parse a questionnaire count such as "3" or "5+", falling back to 1 for anything unusable.
pub fn parse_count(value: &str) -> u32 {
    match value.trim().trim_end_matches('+').trim().parse::<u32>() {
        Ok(count) if count >= 1 => count.min(MAX_COUNT),
        _ => 1,
    }
}

/// Classify a free-text description of a heating system into a boiler category.
pub fn classify_system_text(text: &str) -> Option<BoilerType> {
    let text = text.to_lowercase();
    if text.contains("combi") {
        Some(BoilerType::Combi)
    } else if text.contains("system") {
        Some(BoilerType::System)
    } else if ["regular", "conventional", "heat only"]
        .iter()
        .any(|signal| text.contains(signal))
    {
        Some(BoilerType::Regular)
    } else {
        None
    }
}
