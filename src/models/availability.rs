use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::serde_helpers::wall_clock;

/// A recurring weekly opening window for the clinic. Rows live in the
/// hosted store's `AvailableDays` collection and are managed elsewhere;
/// this service only reads them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AvailabilityWindow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u8,
    pub day_name: String,
    #[serde(with = "wall_clock")]
    pub start_time: NaiveTime,
    #[serde(with = "wall_clock")]
    pub end_time: NaiveTime,
    pub active: bool,
}

/// A concrete calendar day paired with its weekday index. Carried as two
/// real fields everywhere a day is selected, never as a packed string.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DayChoice {
    pub date: NaiveDate,
    pub day_of_week: u8,
}

/// One selectable entry in the booking form's date dropdown: the next
/// occurrence of an active window's weekday.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DayOption {
    pub date: NaiveDate,
    pub day_of_week: u8,
    pub day_name: String,
}
