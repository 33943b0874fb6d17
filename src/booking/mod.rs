//! Booking validation and submission.

pub mod session;

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BookingError;
use crate::models::appointment::Appointment;
use crate::models::booking::{BookingDraft, FieldErrors};
use crate::store::RecordStore;

/// Leading + allowed, then digits, spaces, hyphens, parentheses.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]+$").unwrap());

const MIN_NAME_CHARS: usize = 2;
/// Counting punctuation, per current front-desk policy.
const MIN_PHONE_CHARS: usize = 11;

/// Check a draft against the booking rules. Empty result means the draft
/// may be submitted.
pub fn validate(draft: &BookingDraft, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = draft.full_name.trim();
    if name.is_empty() {
        errors.full_name = Some("Full name is required".to_string());
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.full_name = Some("Please enter a valid name".to_string());
    }

    let phone = &draft.phone_number;
    if phone.trim().is_empty() || phone.chars().count() < MIN_PHONE_CHARS {
        errors.phone_number = Some("Phone number is incorrect or empty".to_string());
    } else if !PHONE_PATTERN.is_match(phone) {
        errors.phone_number = Some("Please enter a valid phone number".to_string());
    }

    match draft.day {
        None => errors.date = Some("Preferred date is required".to_string()),
        Some(day) if day.date < today => {
            errors.date = Some("Please select a future date".to_string());
        }
        Some(_) => {}
    }

    if draft.time.is_none() {
        errors.time = Some("Preferred time is required".to_string());
    }

    errors
}

/// Validate the draft and, if clean, write exactly one appointment record.
/// There is no retry; a store failure surfaces to the caller, who must
/// resubmit.
pub async fn submit_booking(
    store: &dyn RecordStore,
    draft: &BookingDraft,
    today: NaiveDate,
) -> Result<Appointment, BookingError> {
    let errors = validate(draft, today);
    if !errors.is_empty() {
        return Err(BookingError::Validation(errors));
    }

    // validate() flags a missing day or time, so both are present past
    // this point.
    let (Some(day), Some(time)) = (draft.day, draft.time) else {
        return Err(BookingError::Validation(errors));
    };

    let appointment = Appointment::new(draft, day, time, Utc::now());
    store.insert_appointment(&appointment).await?;
    tracing::info!("stored appointment {} for {}", appointment.id, appointment.date);
    Ok(appointment)
}
