//! Uniform JSON response wrapper: `{status, success, error, data}` plus an
//! optional `meta` block.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::Pagination;

/// Name of the key carrying the HTTP status inside the body.
///
/// The menus endpoint has always answered with `statusCode`, everything else
/// with `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKey {
    Status,
    StatusCode,
}

impl StatusKey {
    fn as_str(self) -> &'static str {
        match self {
            StatusKey::Status => "status",
            StatusKey::StatusCode => "statusCode",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub status: StatusCode,
    pub error: Option<String>,
    pub data: T,
    pub pagination: Option<Pagination>,
    pub status_key: StatusKey,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            error: None,
            data,
            pagination: None,
            status_key: StatusKey::Status,
        }
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_status_key(mut self, key: StatusKey) -> Self {
        self.status_key = key;
        self
    }

    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

impl Envelope<()> {
    pub fn failure(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: Some(error.into()),
            data: (),
            pagination: None,
            status_key: StatusKey::Status,
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.pagination.is_some() { 5 } else { 4 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(self.status_key.as_str(), &self.status.as_u16())?;
        map.serialize_entry("success", &self.success())?;
        map.serialize_entry("error", &self.error)?;
        map.serialize_entry("data", &self.data)?;
        if let Some(pagination) = &self.pagination {
            map.serialize_entry("meta", &serde_json::json!({ "pagination": pagination }))?;
        }
        map.end()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
