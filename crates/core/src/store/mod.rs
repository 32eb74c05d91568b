//! Patient persistence.
//!
//! [`PatientStore`] is the interface the REST layer talks to. Both implementations share the same
//! mutation rules through [`RecordBackend`]: a backend only knows how to hand out the current
//! record list and persist a modified one, and the blanket [`PatientStore`] implementation does
//! the rest.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::ids::IdGenerator;
use crate::patient::{Patient, PatientDraft};
use crate::{PatientError, PatientResult};

/// List, create, update and delete operations over a single array of patient records.
pub trait PatientStore: Send + Sync {
    /// Returns every record in insertion order.
    fn list(&self) -> PatientResult<Vec<Patient>>;

    /// Validates `draft`, assigns a fresh id, appends the record and persists it.
    ///
    /// # Errors
    ///
    /// `PatientError::MissingRequiredFields` if validation fails (the store is not touched), or a
    /// storage error.
    fn create(&self, draft: PatientDraft) -> PatientResult<Patient>;

    /// Validates `draft` and replaces the record with `id` in place.
    ///
    /// # Errors
    ///
    /// `PatientError::MissingRequiredFields`, `PatientError::NotFound`, or a storage error.
    fn update(&self, id: i64, draft: PatientDraft) -> PatientResult<Patient>;

    /// Removes the record with `id`.
    ///
    /// # Errors
    ///
    /// `PatientError::NotFound` or a storage error.
    fn delete(&self, id: i64) -> PatientResult<()>;
}

/// Raw access to the record list backing a store.
pub trait RecordBackend: Send + Sync {
    /// Snapshot of the current records.
    fn read_all(&self) -> PatientResult<Vec<Patient>>;

    /// Runs `f` against the current records as one read-modify-write step.
    ///
    /// Changes are persisted only when `f` returns `Ok`.
    fn modify<R, F>(&self, f: F) -> PatientResult<R>
    where
        F: FnOnce(&mut Vec<Patient>) -> PatientResult<R>;

    fn ids(&self) -> &IdGenerator;
}

impl<B: RecordBackend> PatientStore for B {
    fn list(&self) -> PatientResult<Vec<Patient>> {
        self.read_all()
    }

    fn create(&self, draft: PatientDraft) -> PatientResult<Patient> {
        let fields = draft.validate()?;
        self.modify(|patients| {
            let patient = Patient::new(self.ids().next_id(), fields);
            patients.push(patient.clone());
            Ok(patient)
        })
    }

    fn update(&self, id: i64, draft: PatientDraft) -> PatientResult<Patient> {
        let fields = draft.validate()?;
        self.modify(|patients| {
            let patient = patients
                .iter_mut()
                .find(|p| p.id() == id)
                .ok_or(PatientError::NotFound(id))?;
            patient.apply(fields);
            Ok(patient.clone())
        })
    }

    fn delete(&self, id: i64) -> PatientResult<()> {
        self.modify(|patients| {
            let before = patients.len();
            patients.retain(|p| p.id() != id);
            if patients.len() == before {
                return Err(PatientError::NotFound(id));
            }
            Ok(())
        })
    }
}
