use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use shared_models::records::{DATE_FORMAT, TIME_FORMAT};
use shared_models::{Appointment, Doctor, Weekday};

/// Doctors who work on the weekday of `date`, whose schedule covers `time`
/// (bounds inclusive) and who have no scheduled appointment in that exact slot.
pub fn find_available_doctors(
    date: NaiveDate,
    time: NaiveTime,
    doctors: &[Doctor],
    appointments: &[Appointment],
) -> Vec<Doctor> {
    let day = Weekday::of(date);
    debug!("Looking up doctors available on {} ({}) at {}", date, day, time);

    doctors
        .iter()
        .filter(|doctor| doctor.works_on(day))
        .filter(|doctor| doctor.covers(time))
        .filter(|doctor| !slot_taken(&doctor.id, date, time, appointments))
        .cloned()
        .collect()
}

/// True when a scheduled appointment already holds `(doctor_id, date, time)`.
pub fn slot_taken(doctor_id: &str, date: NaiveDate, time: NaiveTime, appointments: &[Appointment]) -> bool {
    let date = date.format(DATE_FORMAT).to_string();
    let time = time.format(TIME_FORMAT).to_string();

    appointments.iter().any(|a| a.occupies(doctor_id, &date, &time))
}
