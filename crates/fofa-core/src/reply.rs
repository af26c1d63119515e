//! Decoding of the `/api/v1/search/all` reply envelope.
//!
//! FOFA answers every search with an object like
//!
//! ```json
//! { "error": false, "size": 2, "page": 1, "mode": "extended",
//!   "results": [["example.com", "1.2.3.4:80", ...], ...] }
//! ```
//!
//! When a single field is requested the rows are bare values instead of
//! one-element arrays. Column `i` of a row holds field `i` of the
//! [`FieldMapping`] the request was made with.

use crate::{FieldMapping, FofaError, Record, Result, SearchResults};
use serde::Deserialize;
use serde_json::{Map, Value};

const UNKNOWN_REMOTE_ERROR: &str = "unknown error";

/// Raw envelope; every member is optional so that shape problems surface as
/// [`FofaError::Format`] with a useful message instead of a serde error.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    errmsg: Option<Value>,
    #[serde(default)]
    size: Option<Value>,
    #[serde(default)]
    page: Option<Value>,
    #[serde(default)]
    mode: Option<Value>,
    #[serde(default)]
    query: Option<Value>,
    #[serde(default)]
    results: Option<Value>,
}

impl Envelope {
    /// A non-empty `errmsg`, or `error: true`, means the request failed
    fn remote_error(&self) -> Option<String> {
        let message = self
            .errmsg
            .as_ref()
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty());
        let flagged = self.error.as_ref().and_then(Value::as_bool).unwrap_or(false);

        match (message, flagged) {
            (Some(message), _) => Some(message.to_string()),
            (None, true) => Some(UNKNOWN_REMOTE_ERROR.to_string()),
            (None, false) => None,
        }
    }

    fn size(&self) -> Result<u64> {
        let size = self
            .size
            .as_ref()
            .ok_or_else(|| FofaError::format("missing `size`"))?;

        if let Some(n) = size.as_u64() {
            return if n < 1 { Err(FofaError::NoData) } else { Ok(n) };
        }
        match size.as_i64() {
            Some(_) => Err(FofaError::NoData),
            None => Err(FofaError::format(format!("`size` is not an integer: {size}"))),
        }
    }

    fn rows(&self) -> Result<&[Value]> {
        match &self.results {
            Some(Value::Array(rows)) => Ok(rows),
            Some(other) => Err(FofaError::format(format!(
                "`results` is not an array: {}",
                kind_of(other)
            ))),
            None => Err(FofaError::format("missing `results`")),
        }
    }
}

/// Parse a complete reply body into [`SearchResults`].
///
/// Checks run in this order: service-reported error, `size` (zero means
/// [`FofaError::NoData`] whatever `results` holds), then `results` shape.
pub fn parse_reply(body: &[u8], mapping: &FieldMapping) -> Result<SearchResults> {
    // Only a JSON object is an envelope; arrays must not map onto it by position
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    let envelope: Envelope = serde_json::from_value(Value::Object(object))?;

    if let Some(message) = envelope.remote_error() {
        return Err(FofaError::Remote(message));
    }

    let size = envelope.size()?;
    let records = envelope
        .rows()?
        .iter()
        .map(|row| record_from_row(row, mapping))
        .collect();

    Ok(SearchResults {
        size,
        page: envelope
            .page
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|p| u32::try_from(p).ok()),
        mode: envelope.mode.as_ref().and_then(Value::as_str).map(String::from),
        query: envelope.query.as_ref().and_then(Value::as_str).map(String::from),
        records,
    })
}

/// Parse a reply body and keep only the records
pub fn parse_records(body: &[u8], mapping: &FieldMapping) -> Result<Vec<Record>> {
    parse_reply(body, mapping).map(|results| results.records)
}

/// Build one record from a row, assigning column `i` to field `i`.
///
/// Short rows leave the trailing attributes empty; extra columns are ignored.
fn record_from_row(row: &Value, mapping: &FieldMapping) -> Record {
    let columns = match row {
        Value::Array(columns) => columns.as_slice(),
        bare => std::slice::from_ref(bare),
    };

    let mut record = Record::default();
    for (field, column) in mapping.fields().iter().zip(columns) {
        if field.is_known() {
            record.set(field, column_text(column));
        }
    }
    record
}

fn column_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
