//! The record-store collaborator: generic CRUD over the two hosted
//! collections. Injected as a trait object so tests run against the
//! in-memory fake instead of a live database.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::appointment::Appointment;
use crate::models::availability::AvailabilityWindow;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

pub const WINDOWS_COLLECTION: &str = "AvailableDays";
pub const APPOINTMENTS_COLLECTION: &str = "Appointments";

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All weekly availability windows, active or not.
    async fn select_windows(&self) -> Result<Vec<AvailabilityWindow>, StoreError>;

    /// All appointments, newest first.
    async fn select_appointments(&self) -> Result<Vec<Appointment>, StoreError>;

    async fn insert_appointment(&self, appointment: &Appointment) -> Result<(), StoreError>;

    /// Returns false when no record with that id existed.
    async fn delete_appointment(&self, id: Uuid) -> Result<bool, StoreError>;
}
