use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use super::RecordStore;
use crate::error::StoreError;
use crate::models::appointment::Appointment;
use crate::models::availability::AvailabilityWindow;

/// In-memory record store for tests and local runs. `set_failing(true)`
/// makes every call fail, for exercising the submission-error paths.
#[derive(Default)]
pub struct MemoryStore {
    windows: Mutex<Vec<AvailabilityWindow>>,
    appointments: Mutex<Vec<Appointment>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_windows(windows: Vec<AvailabilityWindow>) -> Self {
        MemoryStore {
            windows: Mutex::new(windows),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Seed an appointment directly, bypassing validation.
    pub fn push_appointment(&self, appointment: Appointment) {
        self.appointments.lock().unwrap().push(appointment);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Backend("injected store failure".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn select_windows(&self) -> Result<Vec<AvailabilityWindow>, StoreError> {
        self.check()?;
        Ok(self.windows.lock().unwrap().clone())
    }

    async fn select_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        self.check()?;
        let mut appointments = self.appointments.lock().unwrap().clone();
        appointments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(appointments)
    }

    async fn insert_appointment(&self, appointment: &Appointment) -> Result<(), StoreError> {
        self.check()?;
        self.appointments.lock().unwrap().push(appointment.clone());
        Ok(())
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<bool, StoreError> {
        self.check()?;
        let mut appointments = self.appointments.lock().unwrap();
        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        Ok(appointments.len() < before)
    }
}
