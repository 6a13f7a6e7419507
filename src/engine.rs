use crate::core::catalog::{
    CatalogResult, CatalogSnapshot, CatalogStore, LabourTier, SundryCategory,
};
use crate::core::catalog_matcher::{
    labour_base_price, location_multiplier, select_boilers, QuoteTier, SelectedBoiler,
};
use crate::core::complexity::{calculate_job_complexity, Complexity};
use crate::core::explanations::{generate_recommendations, Recommendations};
use crate::core::pricing::{
    assemble_prices, sundry_bundles, sundry_price, LabourPrices, PriceBreakdown, PriceInputs,
};
use crate::core::scenario_matching::get_conversion_recommendations;
use crate::core::sizing::{heating_match, size_property, SizingSource};
use crate::core::units::Pence;
use crate::errors::QuoteError;
use crate::input::{BoilerType, PropertyAnalysis};
use serde::Serialize;
use std::future::{pending, Future};
use tracing::{error, info, instrument, warn};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub options: [TierOption; 3],
    pub analysis: QuoteAnalysis,
    pub price_breakdown: PriceBreakdown,
    pub recommendations: Recommendations,
}

impl QuoteResult {
    pub fn option(&self, tier: QuoteTier) -> &TierOption {
        match tier {
            QuoteTier::Standard => &self.options[0],
            QuoteTier::Premium => &self.options[1],
            QuoteTier::Luxury => &self.options[2],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TierOption {
    pub tier: QuoteTier,
    pub boiler_make: String,
    pub boiler_model: String,
    pub warranty_years: u32,
    pub kw: f64,
    pub flow_rate_lpm: Option<f64>,
    pub efficiency_rating: String,
    /// Total including VAT.
    pub base_price: Pence,
    pub used_default: bool,
}

impl TierOption {
    fn new(tier: QuoteTier, selected: &SelectedBoiler, size_kw: u32, base_price: Pence) -> Self {
        let boiler = &selected.boiler;
        Self {
            tier,
            boiler_make: boiler.make.clone(),
            boiler_model: boiler.model.clone(),
            warranty_years: boiler.warranty_years,
            kw: boiler.rated_kw().unwrap_or(f64::from(size_kw)),
            flow_rate_lpm: boiler.flow_rate_lpm,
            efficiency_rating: boiler.efficiency_rating.clone(),
            base_price,
            used_default: selected.used_default,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuoteAnalysis {
    pub recommended_boiler_type: BoilerType,
    pub recommended_boiler_size: u32,
    pub boiler_size_source: SizingSource,
    pub cylinder_capacity: u32,
    pub cylinder_source: SizingSource,
    pub heat_load_calculation: u32,
    pub hot_water_demand: u32,
    pub property_complexity: Complexity,
    pub job_type: String,
    pub installation_multiplier: f64,
    pub location_multiplier: f64,
    pub matched_scenario_id: Option<&'static str>,
    pub conversion_scenario_id: Option<&'static str>,
}

/// Produce a three-tier quote for a property, reading the catalog from the given store.
pub async fn calculate_intelligent_quote<S: CatalogStore + ?Sized>(
    analysis: &PropertyAnalysis,
    store: &S,
) -> Result<QuoteResult, QuoteError> {
    calculate_intelligent_quote_with_cancellation(analysis, store, pending()).await
}

/// As [`calculate_intelligent_quote`], abandoning the catalog reads if `cancelled` resolves first.
#[instrument(skip_all, fields(property_type = %analysis.property_type, postcode = %analysis.postcode))]
pub async fn calculate_intelligent_quote_with_cancellation<S: CatalogStore + ?Sized>(
    analysis: &PropertyAnalysis,
    store: &S,
    cancelled: impl Future<Output = ()>,
) -> Result<QuoteResult, QuoteError> {
    let catalog = tokio::select! {
        biased;
        _ = cancelled => {
            warn!("quote calculation cancelled while loading catalog");
            return Err(QuoteError::Cancelled);
        }
        catalog = load_catalog(store) => catalog.inspect_err(|err| {
            error!(error = %err, "catalog could not be loaded");
        })?,
    };

    let quote = assemble_quote(analysis, &catalog);
    info!(
        boiler_type = %quote.analysis.recommended_boiler_type,
        size_kw = quote.analysis.recommended_boiler_size,
        "quote calculated"
    );

    Ok(quote)
}

async fn load_catalog<S: CatalogStore + ?Sized>(store: &S) -> CatalogResult<CatalogSnapshot> {
    let (boilers, labour_costs, sundries, locations) = futures::try_join!(
        store.get_boilers(),
        store.get_labour_costs(),
        store.get_sundries(),
        store.get_locations(),
    )?;

    Ok(CatalogSnapshot {
        boilers,
        labour_costs,
        sundries,
        locations,
    })
}

/// Size, classify and price a property against an already loaded catalog.
pub fn assemble_quote(analysis: &PropertyAnalysis, catalog: &CatalogSnapshot) -> QuoteResult {
    let sizing = size_property(analysis);
    let complexity = calculate_job_complexity(analysis);
    let matched_scenario = heating_match(analysis, sizing.boiler_type);
    let conversion = get_conversion_recommendations(analysis);

    let boilers = select_boilers(
        &catalog.boilers,
        sizing.boiler_type,
        sizing.boiler_size_kw,
    );
    let location_multiplier = location_multiplier(&catalog.locations, &analysis.postcode);
    let labour = LabourPrices::new(
        labour_base_price(
            &catalog.labour_costs,
            &complexity.job_type,
            LabourTier::Standard,
        ),
        labour_base_price(
            &catalog.labour_costs,
            &complexity.job_type,
            LabourTier::Premium,
        ),
        complexity.multiplier,
        location_multiplier,
    );
    let price_breakdown = assemble_prices(PriceInputs {
        boilers: &boilers,
        labour,
        sundries: sundry_bundles(&catalog.sundries),
        cylinder_capacity_l: sizing.cylinder_capacity_l,
        condensate_pump: analysis
            .drain_missing()
            .then(|| sundry_price(&catalog.sundries, SundryCategory::CondensatePump)),
    });

    let options = [QuoteTier::Standard, QuoteTier::Premium, QuoteTier::Luxury].map(|tier| {
        TierOption::new(
            tier,
            boilers.for_tier(tier),
            sizing.boiler_size_kw,
            price_breakdown.for_tier(tier).total,
        )
    });

    QuoteResult {
        options,
        analysis: QuoteAnalysis {
            recommended_boiler_type: sizing.boiler_type,
            recommended_boiler_size: sizing.boiler_size_kw,
            boiler_size_source: sizing.boiler_size_source,
            cylinder_capacity: sizing.cylinder_capacity_l,
            cylinder_source: sizing.cylinder_source,
            heat_load_calculation: sizing.heat_load_kw,
            hot_water_demand: sizing.hot_water_demand,
            property_complexity: complexity.complexity,
            job_type: complexity.job_type.clone(),
            installation_multiplier: complexity.multiplier,
            location_multiplier,
            matched_scenario_id: matched_scenario.map(|scenario| scenario.scenario_id),
            conversion_scenario_id: conversion.map(|advice| advice.scenario_id),
        },
        price_breakdown,
        recommendations: generate_recommendations(
            analysis,
            &sizing,
            &complexity,
            matched_scenario,
        ),
    }
}
