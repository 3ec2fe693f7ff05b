// libs/appointment-cell/src/services/booking.rs
use chrono::NaiveDateTime;
use tracing::debug;

use doctor_cell::services::availability::slot_taken;
use shared_models::ids::next_id;
use shared_models::records::{parse_date, parse_time, DATE_FORMAT, TIME_FORMAT};
use shared_models::{Appointment, AppointmentStatus, Doctor, Patient, Weekday};

use crate::models::{AppointmentError, BookAppointmentRequest};

pub const APPOINTMENT_ID_PREFIX: &str = "C";

/// Checks a booking against the current collections, in this order: required
/// fields, date/time format, patient, doctor, future start, working day,
/// working hours, free slot.
pub fn validate_new_appointment(
    candidate: BookAppointmentRequest,
    patients: &[Patient],
    doctors: &[Doctor],
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> Result<Appointment, AppointmentError> {
    let patient_id = required(candidate.patient_id, "patientId")?;
    let doctor_id = required(candidate.doctor_id, "doctorId")?;
    let raw_date = required(candidate.date, "date")?;
    let raw_time = required(candidate.time, "time")?;
    let reason = required(candidate.reason, "reason")?;

    let date = parse_date(&raw_date)
        .ok_or_else(|| AppointmentError::InvalidDateTime(format!("'{}' is not YYYY-MM-DD", raw_date)))?;
    let time = parse_time(&raw_time)
        .ok_or_else(|| AppointmentError::InvalidDateTime(format!("'{}' is not HH:MM", raw_time)))?;

    if !patients.iter().any(|p| p.id == patient_id) {
        return Err(AppointmentError::UnknownPatient(patient_id));
    }

    let doctor = doctors
        .iter()
        .find(|d| d.id == doctor_id)
        .ok_or_else(|| AppointmentError::UnknownDoctor(doctor_id.clone()))?;

    if date.and_time(time) <= now {
        return Err(AppointmentError::PastDateTime);
    }

    let day = Weekday::of(date);
    if !doctor.works_on(day) {
        return Err(AppointmentError::DoctorNotWorkingThatDay(day));
    }

    if !doctor.covers(time) {
        return Err(AppointmentError::OutsideWorkingHours {
            start: doctor.schedule_start.format(TIME_FORMAT).to_string(),
            end: doctor.schedule_end.format(TIME_FORMAT).to_string(),
        });
    }

    if slot_taken(&doctor.id, date, time, appointments) {
        debug!("Slot {} {} already taken for doctor {}", date, time, doctor.id);
        return Err(AppointmentError::SlotTaken);
    }

    Ok(Appointment {
        id: next_id(APPOINTMENT_ID_PREFIX, appointments.iter().map(|a| a.id.as_str())),
        patient_id,
        doctor_id,
        date: date.format(DATE_FORMAT).to_string(),
        time: time.format(TIME_FORMAT).to_string(),
        reason,
        status: AppointmentStatus::Scheduled,
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AppointmentError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppointmentError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use shared_utils::test_utils::{appointment, doctor, patient};

    // Friday 2024-01-05 08:00; the next Monday is 2024-01-08.
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    fn patients() -> Vec<Patient> {
        vec![patient("P001", "Lucia Perez", "lucia@example.com")]
    }

    fn doctors() -> Vec<Doctor> {
        vec![doctor("D001", "Dr. Ana Ruiz", "Cardiology", "09:00", "12:00", &[Weekday::Monday])]
    }

    fn request(date: &str, time: &str) -> BookAppointmentRequest {
        BookAppointmentRequest {
            patient_id: Some("P001".to_string()),
            doctor_id: Some("D001".to_string()),
            date: Some(date.to_string()),
            time: Some(time.to_string()),
            reason: Some("Chest pain".to_string()),
        }
    }

    fn book(candidate: BookAppointmentRequest, existing: &[Appointment]) -> Result<Appointment, AppointmentError> {
        validate_new_appointment(candidate, &patients(), &doctors(), existing, now())
    }

    #[test]
    fn books_a_valid_slot() {
        let booked = book(request("2024-01-08", "10:00"), &[]).unwrap();

        assert_eq!(booked.id, "C001");
        assert_eq!(booked.status, AppointmentStatus::Scheduled);
        assert_eq!(booked.date, "2024-01-08");
        assert_eq!(booked.time, "10:00");
        assert_eq!(booked.reason, "Chest pain");
    }

    #[test]
    fn missing_reason_is_rejected() {
        let mut candidate = request("2024-01-08", "10:00");
        candidate.reason = None;
        assert_matches!(book(candidate, &[]), Err(AppointmentError::MissingField("reason")));
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert_matches!(book(request("08/01/2024", "10:00"), &[]), Err(AppointmentError::InvalidDateTime(_)));
        assert_matches!(book(request("2024-01-08", "10am"), &[]), Err(AppointmentError::InvalidDateTime(_)));
    }

    #[test]
    fn unknown_references_are_rejected() {
        let mut candidate = request("2024-01-08", "10:00");
        candidate.patient_id = Some("P999".to_string());
        assert_matches!(book(candidate, &[]), Err(AppointmentError::UnknownPatient(id)) if id == "P999");

        let mut candidate = request("2024-01-08", "10:00");
        candidate.doctor_id = Some("D999".to_string());
        assert_matches!(book(candidate, &[]), Err(AppointmentError::UnknownDoctor(id)) if id == "D999");
    }

    #[test]
    fn past_or_present_start_is_rejected_before_schedule_checks() {
        // Monday 2024-01-01 10:00 would be a valid slot if it were in the future.
        assert_matches!(book(request("2024-01-01", "10:00"), &[]), Err(AppointmentError::PastDateTime));
        // Friday, outside hours, and in the past: the past check wins.
        assert_matches!(book(request("2024-01-05", "07:00"), &[]), Err(AppointmentError::PastDateTime));
        // Exactly now.
        assert_matches!(book(request("2024-01-05", "08:00"), &[]), Err(AppointmentError::PastDateTime));
    }

    #[test]
    fn non_working_day_is_rejected() {
        assert_matches!(
            book(request("2024-01-09", "10:00"), &[]),
            Err(AppointmentError::DoctorNotWorkingThatDay(Weekday::Tuesday))
        );
    }

    #[test]
    fn outside_hours_is_rejected_with_bounds_inclusive() {
        assert_matches!(
            book(request("2024-01-08", "08:59"), &[]),
            Err(AppointmentError::OutsideWorkingHours { .. })
        );
        assert_matches!(
            book(request("2024-01-08", "12:01"), &[]),
            Err(AppointmentError::OutsideWorkingHours { .. })
        );
        assert!(book(request("2024-01-08", "12:00"), &[]).is_ok());
    }

    #[test]
    fn double_booking_is_rejected_unless_cancelled() {
        let scheduled = vec![appointment("C001", "P001", "D001", "2024-01-08", "10:00", AppointmentStatus::Scheduled)];
        assert_matches!(book(request("2024-01-08", "10:00"), &scheduled), Err(AppointmentError::SlotTaken));

        let cancelled = vec![appointment("C001", "P001", "D001", "2024-01-08", "10:00", AppointmentStatus::Cancelled)];
        let rebooked = book(request("2024-01-08", "10:00"), &cancelled).unwrap();
        assert_eq!(rebooked.id, "C002");
    }
}
