//! # Ward Core
//!
//! Core business logic for the ward board patient list.
//!
//! This crate contains pure data operations:
//! - Patient record types and presence validation
//! - Timestamp-derived record identifiers
//! - The [`PatientStore`] interface with JSON-file and in-memory implementations
//!
//! **No API concerns**: HTTP servers, routing and wire formats belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod patient;
pub mod store;

pub use config::CoreConfig;
pub use constants::{DEFAULT_PATIENT_DATA_FILE, DEFAULT_REST_ADDR, DEFAULT_STATIC_DIR};
pub use error::{PatientError, PatientResult};
pub use ids::IdGenerator;
pub use patient::{Patient, PatientDraft, PatientFields};
pub use store::{InMemoryStore, JsonFileStore, PatientStore};
