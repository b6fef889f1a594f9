//! Decoding of untyped JSON collections into records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::CoreError;

/// Decode a JSON array into records, skipping elements that are not usable.
///
/// The array itself is the contract: anything else is
/// [`CoreError::InvalidInput`]. Individual elements are best effort. An
/// element that is not an object, or that fails to decode, is logged and
/// dropped.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] if `value` is not an array.
pub fn decode_collection<T: DeserializeOwned>(
    value: &Value,
    collection: &str,
) -> Result<Vec<T>, CoreError> {
    let Value::Array(items) = value else {
        return Err(CoreError::InvalidInput {
            collection: collection.to_string(),
            found: json_kind(value).to_string(),
        });
    };

    let records = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!(collection, index, kind = json_kind(item), "skipping non-object record");
                return None;
            }
            match T::deserialize(item) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::warn!(collection, index, %error, "skipping undecodable record");
                    None
                }
            }
        })
        .collect();
    Ok(records)
}

/// Short name of a JSON value's type, for error messages.
#[must_use]
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
