use crate::core::catalog::{match_location, Boiler, CatalogTier, LabourCost, LabourTier, Location};
use crate::core::default_catalog::DEFAULT_CATALOG;
use crate::core::units::Pence;
use crate::input::BoilerType;
use itertools::Itertools;
use serde::Serialize;
use strum_macros::{Display, EnumIter};
use tracing::{debug, warn};

/// Customer-facing package a boiler is offered in.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QuoteTier {
    Standard,
    Premium,
    Luxury,
}

impl QuoteTier {
    /// Catalog tiers to draw this package's boiler from, most preferred first.
    pub fn preferred_catalog_tiers(&self) -> &'static [CatalogTier] {
        match self {
            QuoteTier::Standard => &[CatalogTier::Budget, CatalogTier::MidRange],
            QuoteTier::Premium => &[CatalogTier::MidRange, CatalogTier::Premium],
            QuoteTier::Luxury => &[CatalogTier::Premium],
        }
    }

    pub fn labour_tier(&self) -> LabourTier {
        match self {
            QuoteTier::Standard => LabourTier::Standard,
            QuoteTier::Premium | QuoteTier::Luxury => LabourTier::Premium,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedBoiler {
    pub boiler: Boiler,
    pub used_default: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoilerSelection {
    pub standard: SelectedBoiler,
    pub premium: SelectedBoiler,
    pub luxury: SelectedBoiler,
}

impl BoilerSelection {
    pub fn for_tier(&self, tier: QuoteTier) -> &SelectedBoiler {
        match tier {
            QuoteTier::Standard => &self.standard,
            QuoteTier::Premium => &self.premium,
            QuoteTier::Luxury => &self.luxury,
        }
    }
}

/// Inclusive range of rated outputs accepted for a recommended size.
pub fn acceptable_output_band(boiler_type: BoilerType, size_kw: u32) -> (f64, f64) {
    let size_kw = f64::from(size_kw);
    match boiler_type {
        BoilerType::Combi => (size_kw, size_kw + 6.),
        BoilerType::System | BoilerType::Regular => (size_kw - 3., size_kw + 5.),
    }
}

pub fn filter_candidates(boilers: &[Boiler], boiler_type: BoilerType, size_kw: u32) -> Vec<&Boiler> {
    let (lower, upper) = acceptable_output_band(boiler_type, size_kw);
    boilers
        .iter()
        .filter(|boiler| boiler.boiler_type == boiler_type)
        .filter(|boiler| {
            boiler
                .rated_kw()
                .is_some_and(|kw| (lower..=upper).contains(&kw))
        })
        .collect()
}

pub fn select_boilers(boilers: &[Boiler], boiler_type: BoilerType, size_kw: u32) -> BoilerSelection {
    let candidates = filter_candidates(boilers, boiler_type, size_kw);
    debug!(
        %boiler_type,
        size_kw,
        "boiler candidates in band: [{}]",
        candidates.iter().map(|boiler| &boiler.model).join(", ")
    );
    let select = |tier| select_for_tier(&candidates, tier, boiler_type, size_kw);

    BoilerSelection {
        standard: select(QuoteTier::Standard),
        premium: select(QuoteTier::Premium),
        luxury: select(QuoteTier::Luxury),
    }
}

fn select_for_tier(
    candidates: &[&Boiler],
    tier: QuoteTier,
    boiler_type: BoilerType,
    size_kw: u32,
) -> SelectedBoiler {
    let preferred = tier
        .preferred_catalog_tiers()
        .iter()
        .find_map(|catalog_tier| candidates.iter().find(|b| b.tier == *catalog_tier));

    match preferred.or(candidates.first()) {
        Some(boiler) => SelectedBoiler {
            boiler: (*boiler).clone(),
            used_default: false,
        },
        None => {
            warn!(%tier, %boiler_type, size_kw, "no catalog boiler available, using default");
            SelectedBoiler {
                boiler: DEFAULT_CATALOG.boiler(tier, boiler_type, size_kw),
                used_default: true,
            }
        }
    }
}

/// Labour multiplier of the location matching the postcode, 1.0 when none does.
pub fn location_multiplier(locations: &[Location], postcode: &str) -> f64 {
    match match_location(locations, postcode) {
        Some(location) => location.labour_multiplier,
        None => {
            warn!(postcode, "no location matches postcode, using default multiplier");
            DEFAULT_CATALOG.location_multiplier
        }
    }
}

/// Base labour price for a job type before any multipliers are applied.
pub fn labour_base_price(labour_costs: &[LabourCost], job_type: &str, tier: LabourTier) -> Pence {
    labour_costs
        .iter()
        .find(|cost| cost.job_type == job_type && cost.tier == tier)
        .map(|cost| cost.price)
        .unwrap_or_else(|| {
            warn!(job_type, %tier, "no labour rate for job type, using default");
            match tier {
                LabourTier::Standard => DEFAULT_CATALOG.standard_labour,
                LabourTier::Premium => DEFAULT_CATALOG.premium_labour,
            }
        })
}
