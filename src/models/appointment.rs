use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::availability::DayChoice;
use super::booking::BookingDraft;
use super::serde_helpers::{wall_clock, wall_clock_opt};

/// A booked appointment as stored in the `Appointments` collection.
/// Created once by a successful submission, deleted only from the admin
/// dashboard, never mutated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub phone_number: String,
    pub date: NaiveDate,
    #[serde(with = "wall_clock")]
    pub time: NaiveTime,
    #[serde(default)]
    pub reason: String,
    pub day_of_week: u8,
}

impl Appointment {
    /// Build the record for a draft that already passed validation.
    pub fn new(draft: &BookingDraft, day: DayChoice, time: NaiveTime, now: DateTime<Utc>) -> Self {
        Appointment {
            id: Uuid::new_v4(),
            created_at: now,
            full_name: draft.full_name.trim().to_string(),
            phone_number: draft.phone_number.clone(),
            date: day.date,
            time,
            reason: draft.reason.trim().to_string(),
            day_of_week: day.day_of_week,
        }
    }
}

/// Wire payload of `POST /appointments`. Date, weekday and time are
/// optional here so a missing one surfaces as a field error instead of a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub day_of_week: Option<u8>,
    #[serde(default, with = "wall_clock_opt")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub reason: String,
}
