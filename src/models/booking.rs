use chrono::NaiveTime;
use serde::Serialize;

use super::appointment::BookingRequest;
use super::availability::DayChoice;

/// In-progress, unsaved state of the booking form. Owned by one form
/// session and discarded after a successful submission.
#[derive(Debug, Default, Clone)]
pub struct BookingDraft {
    pub full_name: String,
    pub phone_number: String,
    pub day: Option<DayChoice>,
    pub time: Option<NaiveTime>,
    pub reason: String,
}

impl From<BookingRequest> for BookingDraft {
    fn from(req: BookingRequest) -> Self {
        // A day selection is only usable with both halves present.
        let day = match (req.date, req.day_of_week) {
            (Some(date), Some(day_of_week)) => Some(DayChoice { date, day_of_week }),
            _ => None,
        };
        BookingDraft {
            full_name: req.full_name,
            phone_number: req.phone_number,
            day,
            time: req.time,
            reason: req.reason,
        }
    }
}

/// Field-level validation errors, one message per offending input.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone_number.is_none()
            && self.date.is_none()
            && self.time.is_none()
    }
}

/// Display state of a form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Idle
    }
}
