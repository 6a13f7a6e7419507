mod compare_floats;
pub mod core;
pub mod engine;
pub mod errors;
pub mod input;
pub mod output;

pub use crate::core::catalog::{CatalogSnapshot, CatalogStore, InMemoryCatalog};
pub use crate::core::complexity::calculate_job_complexity;
pub use crate::core::scenario_matching::{get_conversion_recommendations, ConversionAdvice};
pub use crate::core::sizing::{
    calculate_cylinder_capacity, calculate_heat_load, calculate_hot_water_demand,
    calculate_optimal_boiler_size, determine_optimal_boiler_type,
};
pub use crate::engine::{
    assemble_quote, calculate_intelligent_quote, calculate_intelligent_quote_with_cancellation,
    QuoteResult,
};
pub use crate::errors::{CatalogError, QuoteError};
pub use crate::input::{ingest_property_analysis, PropertyAnalysis};
use crate::output::Output;
use std::io::Write;
use tracing::debug;

pub const QUOTE_LOCATION_KEY: &str = "quote";

/// The catalog the engine ships with, used when no other catalog is supplied.
pub const SEED_CATALOG_JSON: &str = include_str!("../catalog/seed_catalog.json");

pub fn seed_catalog() -> Result<InMemoryCatalog, CatalogError> {
    InMemoryCatalog::from_json(SEED_CATALOG_JSON.as_bytes())
}

pub fn write_quote_output(
    output: &impl Output,
    quote: &QuoteResult,
    pretty: bool,
) -> anyhow::Result<()> {
    if output.is_noop() {
        return Ok(());
    }

    let mut writer = output.writer_for_location_key(QUOTE_LOCATION_KEY, "json")?;
    if pretty {
        serde_json::to_writer_pretty(&mut writer, quote)?;
    } else {
        serde_json::to_writer(&mut writer, quote)?;
    }
    writer.flush()?;
    debug!("wrote quote to output location '{QUOTE_LOCATION_KEY}'");

    Ok(())
}
