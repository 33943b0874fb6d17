use chrono::{Local, NaiveTime};

use crate::AppState;
use crate::engine::{self, SLOT_GRANULARITY_MINUTES};
use crate::error::StoreError;
use crate::models::availability::{DayChoice, DayOption};

/// The booking form's date dropdown: the next occurrence of each active
/// window's weekday.
pub async fn day_options(state: &AppState) -> Result<Vec<DayOption>, StoreError> {
    let windows = state.windows.get_or_fetch(state.store.as_ref()).await?;
    let today = Local::now().date_naive();
    Ok(engine::upcoming_days(&windows, today))
}

/// Open slots for a chosen day. An unknown or inactive weekday offers
/// nothing rather than failing.
pub async fn open_slots(state: &AppState, choice: DayChoice) -> Result<Vec<NaiveTime>, StoreError> {
    let windows = state.windows.get_or_fetch(state.store.as_ref()).await?;
    let Some(window) = windows
        .iter()
        .find(|w| w.active && w.day_of_week == choice.day_of_week)
    else {
        return Ok(Vec::new());
    };

    let slots = engine::generate_time_slots(window, SLOT_GRANULARITY_MINUTES);
    let appointments = state.store.select_appointments().await?;
    Ok(engine::open_slots_for_date(choice.date, &slots, &appointments))
}
