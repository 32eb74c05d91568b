//! In-memory patient store.

use super::RecordBackend;
use crate::ids::IdGenerator;
use crate::patient::Patient;
use crate::{PatientError, PatientResult};
use std::sync::Mutex;

/// Keeps records in a vector behind a mutex. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    patients: Mutex<Vec<Patient>>,
    ids: IdGenerator,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records.
    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self {
            patients: Mutex::new(patients),
            ids: IdGenerator::new(),
        }
    }
}

impl RecordBackend for InMemoryStore {
    fn read_all(&self) -> PatientResult<Vec<Patient>> {
        let patients = self
            .patients
            .lock()
            .map_err(|_| PatientError::StoreUnavailable)?;
        Ok(patients.clone())
    }

    fn modify<R, F>(&self, f: F) -> PatientResult<R>
    where
        F: FnOnce(&mut Vec<Patient>) -> PatientResult<R>,
    {
        let mut patients = self
            .patients
            .lock()
            .map_err(|_| PatientError::StoreUnavailable)?;

        // Work on a copy so a failed step leaves the records as they were.
        let mut working = patients.clone();
        let result = f(&mut working)?;
        *patients = working;
        Ok(result)
    }

    fn ids(&self) -> &IdGenerator {
        &self.ids
    }
}
