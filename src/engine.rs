//! Availability computation: which upcoming dates are bookable, and which
//! time slots on a chosen date are still open. Pure functions of their
//! inputs; empty inputs mean "offer nothing yet", never an error.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveTime};

use crate::models::appointment::Appointment;
use crate::models::availability::{AvailabilityWindow, DayOption};

/// Slots are offered on the half hour.
pub const SLOT_GRANULARITY_MINUTES: u32 = 30;

/// Next calendar date (today or later, cyclically within 7 days) falling
/// on the given weekday, 0 = Sunday. A window on today's weekday offers
/// today.
pub fn next_occurrence(target_day_of_week: u8, today: NaiveDate) -> NaiveDate {
    let today_dow = i64::from(today.weekday().num_days_from_sunday());
    let diff = (i64::from(target_day_of_week) - today_dow).rem_euclid(7);
    today + Days::new(diff as u64)
}

/// One selectable date per active window.
pub fn upcoming_days(windows: &[AvailabilityWindow], today: NaiveDate) -> Vec<DayOption> {
    windows
        .iter()
        .filter(|window| window.active)
        .map(|window| DayOption {
            date: next_occurrence(window.day_of_week, today),
            day_of_week: window.day_of_week,
            day_name: window.day_name.clone(),
        })
        .collect()
}

/// All slot times a window offers: start through end inclusive, stepped
/// by the granularity. The last slot is the latest time <= end. A window
/// with start > end yields no slots.
pub fn generate_time_slots(
    window: &AvailabilityWindow,
    granularity_minutes: u32,
) -> Vec<NaiveTime> {
    if window.start_time > window.end_time || granularity_minutes == 0 {
        return Vec::new();
    }

    let step = Duration::minutes(i64::from(granularity_minutes));
    let mut slots = Vec::new();
    let mut cursor = window.start_time;
    loop {
        slots.push(cursor);
        let (next, wrapped) = cursor.overflowing_add_signed(step);
        // wrapped != 0 means the step crossed midnight
        if wrapped != 0 || next > window.end_time {
            break;
        }
        cursor = next;
    }
    slots
}

/// The subsequence of `all_slots` not taken by an appointment on `date`.
/// Matching is exact value equality on (date, time); no fuzzy matching,
/// no timezone normalization.
pub fn open_slots_for_date(
    date: NaiveDate,
    all_slots: &[NaiveTime],
    appointments: &[Appointment],
) -> Vec<NaiveTime> {
    all_slots
        .iter()
        .copied()
        .filter(|slot| {
            !appointments
                .iter()
                .any(|appointment| appointment.date == date && appointment.time == *slot)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_window(day_of_week: u8, start: &str, end: &str, active: bool) -> AvailabilityWindow {
        AvailabilityWindow {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            day_of_week,
            day_name: "Monday".to_string(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            active,
        }
    }

    fn make_appointment(date: NaiveDate, time: &str) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            full_name: "Jo Doe".to_string(),
            phone_number: "01234567890".to_string(),
            date,
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            reason: String::new(),
            day_of_week: date.weekday().num_days_from_sunday() as u8,
        }
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn test_next_occurrence_same_day_is_today() {
        // 2025-06-02 is a Monday (weekday index 1)
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let next = next_occurrence(1, today);
        assert_eq!(next, today);
        assert_eq!(next.day(), today.day());
    }

    #[test]
    fn test_next_occurrence_wraps_week() {
        // Monday asking for Sunday: six days out
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let next = next_occurrence(0, today);
        assert_eq!(next, NaiveDate::from_ymd_opt(2025, 6, 8).unwrap());
    }

    #[test]
    fn test_next_occurrence_crosses_month_boundary() {
        // 2025-06-30 is the last Monday of June; next Tuesday is July 1
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let next = next_occurrence(2, today);
        assert_eq!(next, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    }

    #[test]
    fn test_slots_step_by_granularity() {
        let window = make_window(1, "09:00", "10:00", true);
        let slots = generate_time_slots(&window, 30);
        assert_eq!(slots, vec![time("09:00"), time("09:30"), time("10:00")]);
    }

    #[test]
    fn test_slots_last_is_latest_before_end() {
        // Span does not divide evenly; 10:15 must not be overshot
        let window = make_window(1, "09:00", "10:15", true);
        let slots = generate_time_slots(&window, 30);
        assert_eq!(slots, vec![time("09:00"), time("09:30"), time("10:00")]);
    }

    #[test]
    fn test_slots_single_point_window() {
        let window = make_window(1, "09:00", "09:00", true);
        assert_eq!(generate_time_slots(&window, 30), vec![time("09:00")]);
    }

    #[test]
    fn test_slots_inverted_window_is_empty() {
        let window = make_window(1, "17:00", "09:00", true);
        assert!(generate_time_slots(&window, 30).is_empty());
    }

    #[test]
    fn test_slots_stop_at_midnight() {
        let window = make_window(1, "23:30", "23:59", true);
        assert_eq!(generate_time_slots(&window, 30), vec![time("23:30")]);
    }

    #[test]
    fn test_open_slots_exclude_taken_times() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let slots = vec![time("09:00"), time("09:30"), time("10:00")];
        let appointments = vec![make_appointment(date, "09:30")];

        let open = open_slots_for_date(date, &slots, &appointments);
        assert_eq!(open, vec![time("09:00"), time("10:00")]);
    }

    #[test]
    fn test_open_slots_ignore_other_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let other = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        let slots = vec![time("09:00"), time("09:30")];
        let appointments = vec![make_appointment(other, "09:00")];

        let open = open_slots_for_date(date, &slots, &appointments);
        assert_eq!(open, slots);
    }

    #[test]
    fn test_open_slots_with_no_data_yet() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert!(open_slots_for_date(date, &[], &[]).is_empty());
    }

    #[test]
    fn test_upcoming_days_skip_inactive_windows() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let windows = vec![
            make_window(1, "09:00", "17:00", true),
            make_window(3, "09:00", "17:00", false),
        ];

        let days = upcoming_days(&windows, today);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day_of_week, 1);
        assert_eq!(days[0].date, today);
    }

    #[test]
    fn test_upcoming_days_with_no_windows() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert!(upcoming_days(&[], today).is_empty());
    }
}
