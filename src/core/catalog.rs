//! Catalog entities and the store they are read from.
//!
//! The engine never writes to the catalog. A store is injected per quote and each read is
//! independent, so the engine is free to issue them concurrently.

use crate::core::units::Pence;
use crate::errors::CatalogError;
use crate::input::BoilerType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::sync::Arc;
use strum_macros::Display;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Quality band a boiler SKU is stocked in.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum CatalogTier {
    Budget,
    #[serde(rename = "Mid-Range")]
    #[strum(serialize = "Mid-Range")]
    MidRange,
    Premium,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Boiler {
    pub make: String,
    pub model: String,
    pub boiler_type: BoilerType,
    pub tier: CatalogTier,
    /// Hot water output; usually only quoted for combis.
    #[serde(default)]
    pub dhw_kw: Option<f64>,
    #[serde(default)]
    pub central_heating_kw: Option<f64>,
    #[serde(default)]
    pub flow_rate_lpm: Option<f64>,
    pub warranty_years: u32,
    pub efficiency_rating: String,
    pub supply_price: Pence,
}

impl Boiler {
    /// Output used when matching a boiler to a recommended size.
    pub fn rated_kw(&self) -> Option<f64> {
        self.dhw_kw.or(self.central_heating_kw)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum LabourTier {
    Standard,
    Premium,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LabourCost {
    pub job_type: String,
    pub tier: LabourTier,
    pub city: String,
    pub price: Pence,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum SundryCategory {
    MagneticFilter,
    ChemicalFlush,
    FlueKit,
    Trvs,
    SmartThermostat,
    CondensatePump,
    Other,
}

/// An ancillary item, priced either at a fixed amount or within a range.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Sundry {
    pub name: String,
    pub category: SundryCategory,
    #[serde(default)]
    pub price: Option<Pence>,
    #[serde(default)]
    pub price_min: Option<Pence>,
    #[serde(default)]
    pub price_max: Option<Pence>,
}

impl Sundry {
    /// The fixed price, otherwise the low end of the range.
    pub fn unit_price(&self) -> Option<Pence> {
        self.price.or(self.price_min)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Postcode prefix, optionally ending in `*`, e.g. "SW1*".
    pub postcode_pattern: String,
    #[serde(default)]
    pub area: Option<String>,
    pub price_multiplier: f64,
    pub labour_multiplier: f64,
}

impl Location {
    fn prefix(&self) -> String {
        normalise_postcode(self.postcode_pattern.trim_end_matches('*'))
    }
}

fn normalise_postcode(postcode: &str) -> String {
    postcode
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Outward code of a postcode, e.g. "SW1A" for "SW1A 1AA". Postcodes written without a space
/// lose their three-character inward code; anything shorter is taken as an outward code alone.
fn outward_code(postcode: &str) -> String {
    let postcode = postcode.trim();
    if let Some((outward, _)) = postcode.split_once(char::is_whitespace) {
        return normalise_postcode(outward);
    }

    let compact = normalise_postcode(postcode);
    match compact.char_indices().rev().nth(2) {
        Some((inward_start, _)) if compact.chars().count() >= 5 => {
            compact[..inward_start].to_string()
        }
        _ => compact,
    }
}

/// Whether `prefix` ends on an area or district boundary of `outward`. "B" covers "B15" but not
/// "BN1", and "SW1" covers "SW1A" but not "SW19".
fn covers_outward_code(prefix: &str, outward: &str) -> bool {
    let Some(rest) = outward.strip_prefix(prefix) else {
        return false;
    };
    match (prefix.chars().last(), rest.chars().next()) {
        (Some(last), Some(next)) => last.is_ascii_digit() != next.is_ascii_digit(),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// The location whose pattern is the longest prefix of the postcode's outward code, stopping
/// at area and district boundaries. Of equally long patterns the first listed wins.
pub fn match_location<'a>(locations: &'a [Location], postcode: &str) -> Option<&'a Location> {
    let outward = outward_code(postcode);
    let mut best: Option<(&Location, usize)> = None;
    for location in locations {
        let prefix = location.prefix();
        if !covers_outward_code(&prefix, &outward) {
            continue;
        }
        if best.map_or(true, |(_, length)| prefix.len() > length) {
            best = Some((location, prefix.len()));
        }
    }

    best.map(|(location, _)| location)
}

/// Read-only access to the product and pricing catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn get_boilers(&self) -> CatalogResult<Vec<Boiler>>;
    async fn get_labour_costs(&self) -> CatalogResult<Vec<LabourCost>>;
    async fn get_sundries(&self) -> CatalogResult<Vec<Sundry>>;
    async fn get_locations(&self) -> CatalogResult<Vec<Location>>;

    async fn get_location_by_postcode(&self, postcode: &str) -> CatalogResult<Option<Location>> {
        let locations = self.get_locations().await?;
        Ok(match_location(&locations, postcode).cloned())
    }
}

/// Catalog tables as loaded for a single quote.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub boilers: Vec<Boiler>,
    #[serde(default)]
    pub labour_costs: Vec<LabourCost>,
    #[serde(default)]
    pub sundries: Vec<Sundry>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// A catalog store held entirely in memory, used for seeded catalogs and test fixtures.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    data: Arc<CatalogSnapshot>,
}

impl InMemoryCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            data: Arc::new(snapshot),
        }
    }

    pub fn from_json(json: impl Read) -> CatalogResult<Self> {
        Ok(Self::new(serde_json::from_reader(json)?))
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.data
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn get_boilers(&self) -> CatalogResult<Vec<Boiler>> {
        Ok(self.data.boilers.clone())
    }

    async fn get_labour_costs(&self) -> CatalogResult<Vec<LabourCost>> {
        Ok(self.data.labour_costs.clone())
    }

    async fn get_sundries(&self) -> CatalogResult<Vec<Sundry>> {
        Ok(self.data.sundries.clone())
    }

    async fn get_locations(&self) -> CatalogResult<Vec<Location>> {
        Ok(self.data.locations.clone())
    }
}
