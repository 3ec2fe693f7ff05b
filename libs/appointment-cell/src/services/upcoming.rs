use chrono::{Duration, NaiveDateTime};
use tracing::warn;

use shared_models::Appointment;

/// Scheduled appointments starting after `now` and no later than
/// `now + window_hours`. Records with an unreadable date or time are skipped.
/// A window too large to represent has no upper bound.
pub fn upcoming_within(window_hours: i64, appointments: &[Appointment], now: NaiveDateTime) -> Vec<Appointment> {
    let horizon = Duration::try_hours(window_hours).and_then(|window| now.checked_add_signed(window));
    if horizon.is_none() {
        warn!("Window of {} hours overflows the calendar, listing every future appointment", window_hours);
    }

    appointments
        .iter()
        .filter(|a| a.is_scheduled())
        .filter(|a| match a.starts_at() {
            Some(start) => start > now && horizon.map_or(true, |h| start <= h),
            None => {
                warn!("Skipping appointment {} with unreadable date/time '{} {}'", a.id, a.date, a.time);
                false
            }
        })
        .cloned()
        .collect()
}
