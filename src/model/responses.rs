/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Response envelope unwrapping
//!
//! The API is not consistent about wrapping payloads in a `data` envelope, so
//! each endpoint picks one of the two helpers below and keeps it.

use crate::model::http::ApiResponse;
use serde_json::Value;

fn empty() -> Value {
    Value::Array(Vec::new())
}

/// Returns the `data` member of the body, or an empty array when it is missing or null
pub fn unwrap_data(response: &ApiResponse) -> Value {
    response
        .json()
        .and_then(|body| body.get("data"))
        .filter(|data| !data.is_null())
        .cloned()
        .unwrap_or_else(empty)
}

/// Returns the `data` member when it is an array or object, otherwise the whole body
///
/// Used by list endpoints that only sometimes paginate. A body that is not JSON
/// yields an empty array.
pub fn unwrap_envelope(response: &ApiResponse) -> Value {
    match response.json() {
        Some(body) => match body.get("data") {
            Some(data) if data.is_array() || data.is_object() => data.clone(),
            _ if body.is_null() => empty(),
            _ => body.clone(),
        },
        None => empty(),
    }
}
