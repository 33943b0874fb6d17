//! The booking form's display-state machine:
//! idle -> submitting -> success | error, with the transient display
//! states reverting to idle on their own.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tokio::time::{Duration, sleep};

use crate::booking::{submit_booking, validate};
use crate::models::availability::DayChoice;
use crate::models::booking::{BookingDraft, FieldErrors, SubmissionStatus};
use crate::store::RecordStore;

/// How long the success banner shows before the form resets.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);
/// How long the error banner shows. The draft is kept so the user can
/// resubmit without retyping.
pub const ERROR_RESET_DELAY: Duration = Duration::from_secs(5);

/// One user's in-progress booking. Owns the draft, the field errors, and
/// the submission status; driven by discrete events from a single caller.
pub struct FormSession {
    store: Arc<dyn RecordStore>,
    draft: BookingDraft,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl FormSession {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        FormSession {
            store,
            draft: BookingDraft::default(),
            errors: FieldErrors::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    // Editing a field clears its previous error, so the user sees stale
    // messages disappear as they type.

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.draft.full_name = value.into();
        self.errors.full_name = None;
    }

    pub fn set_phone_number(&mut self, value: impl Into<String>) {
        self.draft.phone_number = value.into();
        self.errors.phone_number = None;
    }

    pub fn set_day(&mut self, day: DayChoice) {
        self.draft.day = Some(day);
        self.errors.date = None;
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.draft.time = Some(time);
        self.errors.time = None;
    }

    pub fn set_reason(&mut self, value: impl Into<String>) {
        self.draft.reason = value.into();
    }

    /// Drive one submission attempt and return the resulting status.
    /// Ignored while a submission is already in flight. A draft that
    /// fails validation stays idle with the field errors set.
    pub async fn submit(&mut self, today: NaiveDate) -> SubmissionStatus {
        if self.status == SubmissionStatus::Submitting {
            return self.status;
        }

        self.errors = validate(&self.draft, today);
        if !self.errors.is_empty() {
            self.status = SubmissionStatus::Idle;
            return self.status;
        }

        self.status = SubmissionStatus::Submitting;
        match submit_booking(self.store.as_ref(), &self.draft, today).await {
            Ok(_) => self.status = SubmissionStatus::Success,
            Err(e) => {
                tracing::warn!("booking submission failed: {}", e);
                self.status = SubmissionStatus::Error;
            }
        }
        self.status
    }

    /// Let a transient display state settle back to idle: after the
    /// success delay the draft is cleared, after the error delay it is
    /// retained for resubmission. A no-op in idle or submitting.
    pub async fn settle(&mut self) {
        match self.status {
            SubmissionStatus::Success => {
                sleep(SUCCESS_RESET_DELAY).await;
                self.draft = BookingDraft::default();
                self.status = SubmissionStatus::Idle;
            }
            SubmissionStatus::Error => {
                sleep(ERROR_RESET_DELAY).await;
                self.status = SubmissionStatus::Idle;
            }
            SubmissionStatus::Idle | SubmissionStatus::Submitting => {}
        }
    }
}
