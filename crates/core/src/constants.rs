//! Constants used throughout the ward core crate.

/// Default store file when no explicit path is configured.
pub const DEFAULT_PATIENT_DATA_FILE: &str = "patients.json";

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:5000";

/// Default directory served for paths outside the API.
pub const DEFAULT_STATIC_DIR: &str = ".";

/// Contents written when the store file does not exist yet.
pub const EMPTY_STORE: &str = "[]";
