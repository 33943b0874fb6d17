use chrono::Local;
use uuid::Uuid;

use crate::AppState;
use crate::booking::submit_booking;
use crate::error::{BookingError, StoreError};
use crate::models::appointment::{Appointment, BookingRequest};
use crate::models::booking::BookingDraft;

pub async fn book(state: &AppState, request: BookingRequest) -> Result<Appointment, BookingError> {
    let draft = BookingDraft::from(request);
    let today = Local::now().date_naive();
    submit_booking(state.store.as_ref(), &draft, today).await
}

/// Admin dashboard listing, newest first.
pub async fn list_all(state: &AppState) -> Result<Vec<Appointment>, StoreError> {
    state.store.select_appointments().await
}

/// Admin delete. Returns false for an unknown id.
pub async fn remove(state: &AppState, id: Uuid) -> Result<bool, StoreError> {
    let deleted = state.store.delete_appointment(id).await?;
    if deleted {
        tracing::info!("deleted appointment {}", id);
    }
    Ok(deleted)
}
