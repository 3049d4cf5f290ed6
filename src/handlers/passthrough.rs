//! Whatever the dispatcher does not claim: read-only access to the raw
//! collections, `GET /{collection}` and `GET /{collection}/{id}`.

use axum::{
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::{error::AppError, error::AppResult, AppState};

pub async fn respond(state: &AppState, method: &Method, path: &str) -> AppResult<Response> {
    let not_found = || AppError::NotFound(format!("Cannot {} {}", method, path));

    if *method != Method::GET {
        return Err(not_found());
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let document = state.db.lock().await.to_value()?;

    let found = match segments.as_slice() {
        [collection] => document.get(*collection).cloned(),
        [collection, id] => document
            .get(*collection)
            .and_then(Value::as_array)
            .and_then(|items| items.iter().find(|item| id_matches(item, id)))
            .cloned(),
        _ => None,
    };

    debug!(path, found = found.is_some(), "Pass-through lookup");

    found
        .map(|value| Json(value).into_response())
        .ok_or_else(not_found)
}

fn id_matches(item: &Value, id: &str) -> bool {
    match item.get("id") {
        Some(Value::Number(n)) => n.to_string() == id,
        Some(Value::String(s)) => s == id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_matches_numbers_and_strings() {
        assert!(id_matches(&json!({ "id": 4 }), "4"));
        assert!(id_matches(&json!({ "id": "abc" }), "abc"));
        assert!(!id_matches(&json!({ "id": 4 }), "5"));
        assert!(!id_matches(&json!({ "name": "x" }), "4"));
    }
}
