//! Wire types for the REST API.
//!
//! `PatientReq` and `PatientRes` describe the patient shapes in the OpenAPI document only. Request
//! bodies are read leniently by `ward_core::PatientDraft` and responses serialise
//! `ward_core::Patient` directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Error body returned with every 4xx and 5xx response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Acknowledgement body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

/// Body accepted by `POST /api/patients` and `PUT /api/patients/{id}`.
///
/// The four required fields must be present and truthy. Any other keys are ignored.
#[derive(ToSchema)]
pub struct PatientReq {
    #[schema(value_type = Object, example = "12A")]
    pub room: Value,
    #[schema(value_type = Object, example = "Jane Doe")]
    pub name: Value,
    #[schema(value_type = Object, example = "fever")]
    pub complaint: Value,
    #[schema(value_type = Object, example = "ibuprofen")]
    pub treatments: Value,
    /// Kept only when it has at least one entry.
    #[schema(rename = "customFields", value_type = Option<Object>)]
    pub custom_fields: Option<Value>,
}

/// A stored patient record.
#[derive(ToSchema)]
pub struct PatientRes {
    /// Creation time in milliseconds since the Unix epoch.
    #[schema(example = 1718000000000i64)]
    pub id: i64,
    #[schema(value_type = Object)]
    pub room: Value,
    #[schema(value_type = Object)]
    pub name: Value,
    #[schema(value_type = Object)]
    pub complaint: Value,
    #[schema(value_type = Object)]
    pub treatments: Value,
    #[schema(rename = "customFields", value_type = Option<Object>)]
    pub custom_fields: Option<Value>,
}
