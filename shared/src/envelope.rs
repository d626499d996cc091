//! Response body shapes accepted from the catalog.

use serde_json::Value;

use crate::capabilities::HttpResponse;
use crate::error::FetchError;

pub const ENVELOPE_FIELD: &str = "content";

/// Decodes a catalog body into its entries.
///
/// A bare array is used as-is and an object exposes its entries under
/// `content`. Any other shape, `{"content": null}` included, yields no
/// entries. Only a body that is not JSON at all is an error.
pub fn decode_entries(response: &HttpResponse) -> Result<Vec<Value>, FetchError> {
    let body: Value = response.json()?;
    Ok(entries(body))
}

pub fn entries(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove(ENVELOPE_FIELD) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
