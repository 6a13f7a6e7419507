use boiler_quote::output::Output;
use boiler_quote::{
    calculate_intelligent_quote, ingest_property_analysis, write_quote_output, InMemoryCatalog,
    SEED_CATALOG_JSON,
};
use lambda_http::{run, service_fn, tracing, Body, Error, Request, Response};
use parking_lot::Mutex;
use serde_json::json;
use std::io;
use std::io::{ErrorKind, Write};
use std::str::from_utf8;
use std::sync::{Arc, LazyLock};
use uuid::Uuid;

static CATALOG: LazyLock<Result<InMemoryCatalog, String>> = LazyLock::new(|| {
    InMemoryCatalog::from_json(SEED_CATALOG_JSON.as_bytes()).map_err(|err| err.to_string())
});

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let input = match event.body() {
        Body::Empty => "",
        Body::Text(text) => text.as_str(),
        Body::Binary(bytes) => match from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("{e}");
                return error_response(format!("Request body was not valid UTF-8: {e}"));
            }
        },
    }
    .as_bytes();

    let output = LambdaOutput::new();

    match calculate_quote(input, &output).await {
        Ok(()) => Ok(Response::builder()
            .status(200)
            .header("Content-Type", "application/json")
            .body(output.into())
            .map_err(Box::new)?),
        Err(e) => {
            tracing::error!("{e:#}");
            error_response(e.to_string())
        }
    }
}

fn error_response(detail: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(422)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(
            &json!({"errors": [{"id": Uuid::new_v4(), "status": "422", "detail": detail}]}),
        )?))
        .map_err(Box::new)?)
}

async fn calculate_quote(input: &[u8], output: &LambdaOutput) -> anyhow::Result<()> {
    let analysis = ingest_property_analysis(input)?;
    let catalog = CATALOG.as_ref().map_err(|err| anyhow::anyhow!("{err}"))?;
    let quote = calculate_intelligent_quote(&analysis, catalog).await?;

    write_quote_output(output, &quote, false)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    run(service_fn(function_handler)).await
}

/// This output uses a shared string that the quote writer appends to - this string can then be
/// used as the response body for the Lambda.
#[derive(Debug)]
struct LambdaOutput(Arc<Mutex<String>>);

impl LambdaOutput {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(String::with_capacity(
            // a serialized quote is a few kilobytes
            2usize.pow(13),
        ))))
    }
}

impl Output for LambdaOutput {
    fn writer_for_location_key(
        &self,
        _location_key: &str,
        _file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        Ok(StringWriter(self.0.clone()))
    }
}

impl From<LambdaOutput> for Body {
    fn from(value: LambdaOutput) -> Self {
        let body = std::mem::take(&mut *value.0.lock());
        body.into()
    }
}

struct StringWriter(Arc<Mutex<String>>);

impl Write for StringWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let utf8 = match from_utf8(buf) {
            Ok(utf8) => utf8,
            Err(_) => {
                return Err(io::Error::new(
                    ErrorKind::InvalidData,
                    "Tried to write out invalid UTF-8.",
                ));
            }
        };
        self.0.lock().push_str(utf8);
        Ok(utf8.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_text(response: &Response<Body>) -> &str {
        match response.body() {
            Body::Text(text) => text.as_str(),
            _ => "",
        }
    }

    #[tokio::test]
    async fn test_non_utf8_body_is_rejected() {
        let response = function_handler(Request::new(Body::Binary(vec![0xff, 0xfe, 0xfd])))
            .await
            .unwrap();

        assert_eq!(response.status(), 422);
        let body: serde_json::Value = serde_json::from_str(body_text(&response)).unwrap();
        assert!(body["errors"][0]["detail"]
            .as_str()
            .unwrap()
            .starts_with("Request body was not valid UTF-8"));
    }

    #[tokio::test]
    async fn test_valid_body_is_quoted() {
        let input = r#"{
            "propertyType": "Flat",
            "bedrooms": "1",
            "bathrooms": "1",
            "occupants": "2",
            "currentBoiler": "Combi",
            "postcode": "M1 1AE",
            "drainNearby": "Yes",
            "moveBoiler": "No"
        }"#;
        let response = function_handler(Request::new(Body::Binary(input.as_bytes().to_vec())))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = serde_json::from_str(body_text(&response)).unwrap();
        assert_eq!(body["options"].as_array().map(Vec::len), Some(3));
    }
}
