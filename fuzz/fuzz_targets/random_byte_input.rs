#![no_main]

use boiler_quote::output::Output;
use boiler_quote::{
    assemble_quote, ingest_property_analysis, write_quote_output, CatalogSnapshot,
};
use libfuzzer_sys::fuzz_target;
use std::io;
use std::io::{BufReader, Cursor, Write};

fuzz_target!(|data: &[u8]| {
    if let Ok(analysis) = ingest_property_analysis(BufReader::new(Cursor::new(data))) {
        let quote = assemble_quote(&analysis, &CatalogSnapshot::default());
        let _ = write_quote_output(&SinkOutput, &quote, false);
    }
});

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_location_key(
        &self,
        _location_key: &str,
        _file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        // make the output pretend it's not a no-op so fuzzing exercises the serializer
        false
    }
}
