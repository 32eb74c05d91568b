//! Request handlers for the patient endpoints.

use axum::{
    body::Bytes,
    extract::{Path as AxumPath, State},
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use ward_core::{Patient, PatientDraft, PatientError, PatientStore};

use crate::types::{ErrorRes, HealthRes, MessageRes};
use crate::AppState;

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "All required fields (room, name, complaint, treatments) must be provided";
pub const NOT_FOUND_MESSAGE: &str = "Patient not found";
pub const DELETED_MESSAGE: &str = "Patient deleted successfully";

pub type ApiError = (StatusCode, Json<ErrorRes>);
pub type ApiResult<T> = Result<Json<T>, ApiError>;

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorRes {
            error: message.to_string(),
        }),
    )
}

/// Map a core error onto a response.
///
/// Storage failures are logged with `context` and answered with the static `internal` message.
fn patient_error(e: PatientError, context: &str, internal: &str) -> ApiError {
    match e {
        PatientError::MissingRequiredFields => {
            api_error(StatusCode::BAD_REQUEST, REQUIRED_FIELDS_MESSAGE)
        }
        PatientError::NotFound(_) => api_error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        e => {
            tracing::error!("{}: {:?}", context, e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, internal)
        }
    }
}

/// Parse a path id like JavaScript's `parseInt(raw, 10)`: optional leading whitespace and sign,
/// then at least one decimal digit. Anything after the digits is ignored.
pub fn parse_patient_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Read a request body as a draft. Only `application/json` bodies are parsed; anything else
/// yields an empty draft.
fn read_draft(headers: &HeaderMap, body: &[u8]) -> PatientDraft {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"));

    if is_json {
        PatientDraft::from_json_slice(body)
    } else {
        PatientDraft::default()
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Ward board REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/patients",
    responses(
        (status = 200, description = "All patients in insertion order", body = [crate::types::PatientRes]),
        (status = 500, description = "Store could not be read", body = ErrorRes)
    )
)]
/// List all patients
///
/// Returns the stored array as is.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store cannot be read or parsed.
#[axum::debug_handler]
pub async fn list_patients(State(state): State<AppState>) -> ApiResult<Vec<Patient>> {
    state
        .store
        .list()
        .map(Json)
        .map_err(|e| patient_error(e, "List patients error", "Failed to read patients"))
}

#[utoipa::path(
    post,
    path = "/api/patients",
    request_body = crate::types::PatientReq,
    responses(
        (status = 200, description = "Patient created", body = crate::types::PatientRes),
        (status = 400, description = "A required field is missing", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Create a new patient record
///
/// The record gets a timestamp-derived `id`. Unknown body fields are dropped and
/// `customFields` is kept only when it has entries.
///
/// # Errors
/// Returns `400 Bad Request` if a required field is missing or falsy (a body not sent as
/// `application/json` counts as empty), and `500 Internal Server Error` if the store cannot be
/// read or written.
#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Patient> {
    let draft = read_draft(&headers, &body);
    state
        .store
        .create(draft)
        .map(Json)
        .map_err(|e| patient_error(e, "Create patient error", "Failed to add patient"))
}

#[utoipa::path(
    put,
    path = "/api/patients/{id}",
    params(("id" = String, Path, description = "Patient id")),
    request_body = crate::types::PatientReq,
    responses(
        (status = 200, description = "Patient updated", body = crate::types::PatientRes),
        (status = 400, description = "A required field is missing", body = ErrorRes),
        (status = 404, description = "Patient not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Replace a patient's required fields and custom fields
///
/// `customFields` is removed from the record when the body does not carry a non-empty value.
///
/// # Errors
/// Returns `400 Bad Request` for a missing field (checked before the id),
/// `404 Not Found` if no record has the id, and `500 Internal Server Error` on storage failure.
#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Patient> {
    let draft = read_draft(&headers, &body);

    let Some(id) = parse_patient_id(&id) else {
        return match draft.validate() {
            Ok(_) => Err(api_error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)),
            Err(e) => Err(patient_error(e, "Update patient error", "Failed to update patient")),
        };
    };

    state
        .store
        .update(id, draft)
        .map(Json)
        .map_err(|e| patient_error(e, "Update patient error", "Failed to update patient"))
}

#[utoipa::path(
    delete,
    path = "/api/patients/{id}",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Patient deleted", body = MessageRes),
        (status = 404, description = "Patient not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Delete a patient record
///
/// # Errors
/// Returns `404 Not Found` if no record has the id and `500 Internal Server Error` on storage
/// failure.
#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> ApiResult<MessageRes> {
    let Some(id) = parse_patient_id(&id) else {
        return Err(api_error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE));
    };

    match state.store.delete(id) {
        Ok(()) => Ok(Json(MessageRes {
            message: DELETED_MESSAGE.into(),
        })),
        Err(e) => Err(patient_error(
            e,
            "Delete patient error",
            "Failed to delete patient",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patient_id_accepts_plain_digits() {
        assert_eq!(parse_patient_id("1718000000000"), Some(1_718_000_000_000));
        assert_eq!(parse_patient_id("0"), Some(0));
    }

    #[test]
    fn test_parse_patient_id_ignores_trailing_characters() {
        assert_eq!(parse_patient_id("42abc"), Some(42));
        assert_eq!(parse_patient_id("  7.5"), Some(7));
        assert_eq!(parse_patient_id("0x1A"), Some(0));
    }

    #[test]
    fn test_parse_patient_id_handles_signs() {
        assert_eq!(parse_patient_id("-12"), Some(-12));
        assert_eq!(parse_patient_id("+12"), Some(12));
        assert_eq!(parse_patient_id("-"), None);
    }

    #[test]
    fn test_read_draft_ignores_non_json_content_types() {
        let body = br#"{"room":"1","name":"Ann","complaint":"cut","treatments":"stitches"}"#;

        let mut headers = HeaderMap::new();
        assert_eq!(read_draft(&headers, body), PatientDraft::default());

        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert_eq!(read_draft(&headers, body), PatientDraft::default());

        headers.insert(header::CONTENT_TYPE, "Application/JSON".parse().unwrap());
        assert!(read_draft(&headers, body).validate().is_ok());
    }

    #[test]
    fn test_parse_patient_id_rejects_non_numeric() {
        assert_eq!(parse_patient_id(""), None);
        assert_eq!(parse_patient_id("abc"), None);
        assert_eq!(parse_patient_id("99999999999999999999"), None);
    }
}
