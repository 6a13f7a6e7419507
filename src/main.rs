extern crate boiler_quote;

use anyhow::Context;
use boiler_quote::output::FileOutput;
use boiler_quote::{
    calculate_intelligent_quote, ingest_property_analysis, seed_catalog, write_quote_output,
    InMemoryCatalog,
};
use clap::Parser;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct QuoteArgs {
    #[arg(help = "Path to a property analysis in .json format")]
    input_file: String,
    #[arg(
        long,
        short,
        help = "Path to a catalog in .json format. Defaults to the built-in seed catalog"
    )]
    catalog: Option<String>,
    #[clap(long, default_value_t = false, help = "Whether to log out spans")]
    log_spans: bool,
    #[clap(long, default_value_t = false, help = "Pretty-print the quote JSON")]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = QuoteArgs::parse();

    // set up basic tracing
    let tracing_subscriber = {
        let mut builder = tracing_subscriber::fmt::fmt().with_max_level(tracing::Level::DEBUG);

        if args.log_spans {
            builder = builder.with_span_events(FmtSpan::CLOSE);
        }

        builder.finish()
    };
    tracing::subscriber::set_global_default(tracing_subscriber)
        .context("setting tracing subscriber failed")?;

    let input_file = Path::new(args.input_file.as_str());
    let input_file_stem = input_file
        .file_stem()
        .and_then(OsStr::to_str)
        .context("Input file name was not valid UTF-8")?;
    let output_directory = input_file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(PathBuf::new);
    let file_output = FileOutput::new(output_directory, format!("{input_file_stem}__{{}}.{{}}"));

    let analysis = ingest_property_analysis(BufReader::new(File::open(input_file)?))?;
    let catalog = match args.catalog {
        Some(ref path) => InMemoryCatalog::from_json(BufReader::new(File::open(path)?))?,
        None => seed_catalog()?,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let quote = runtime
        .block_on(calculate_intelligent_quote(&analysis, &catalog))
        .inspect_err(|err| error!("{err}"))?;

    write_quote_output(&file_output, &quote, args.pretty)?;
    info!(
        "Quote written to {}",
        file_output
            .path_for_location_key(boiler_quote::QUOTE_LOCATION_KEY, "json")?
            .display()
    );

    Ok(())
}
