use boiler_quote::{PropertyAnalysis, QuoteResult};
use schemars::schema_for;
use std::env;

/// Prints the JSON Schema of the quote request, or of the quote response when run with `quote`.
fn main() -> anyhow::Result<()> {
    let schema = match env::args().nth(1).as_deref() {
        Some("quote") => schema_for!(QuoteResult),
        Some("input") | None => schema_for!(PropertyAnalysis),
        Some(other) => anyhow::bail!("Unknown schema '{other}', expected 'input' or 'quote'"),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
