use shared_models::{Appointment, Doctor};

use crate::models::{DoctorRanking, SpecialtyRanking};

pub const UNKNOWN_DOCTOR: &str = "Unknown";

/// Doctor with the most booked (scheduled or completed) appointments.
/// `None` when nothing is counted.
pub fn busiest_doctor(appointments: &[Appointment], doctors: &[Doctor]) -> Option<DoctorRanking> {
    let counted = appointments
        .iter()
        .filter(|a| a.status.counts_as_booked())
        .map(|a| a.doctor_id.as_str());

    let (doctor_id, total_count) = top_of(tally(counted))?;
    let doctor_name = doctors
        .iter()
        .find(|d| d.id == doctor_id)
        .map_or_else(|| UNKNOWN_DOCTOR.to_string(), |d| d.name.clone());

    Some(DoctorRanking { doctor_name, total_count })
}

/// Specialty with the most booked appointments. Appointments whose doctor
/// is not on file are left out.
pub fn busiest_specialty(appointments: &[Appointment], doctors: &[Doctor]) -> Option<SpecialtyRanking> {
    let counted = appointments
        .iter()
        .filter(|a| a.status.counts_as_booked())
        .filter_map(|a| doctors.iter().find(|d| d.id == a.doctor_id))
        .map(|d| d.specialty.as_str());

    let (specialty, total_count) = top_of(tally(counted))?;

    Some(SpecialtyRanking {
        specialty: specialty.to_string(),
        total_count,
    })
}

// Counts keep the order in which keys first appear.
fn tally<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

// Strictly greater replaces, so ties stay with the earliest key.
fn top_of(counts: Vec<(&str, usize)>) -> Option<(&str, usize)> {
    counts.into_iter().fold(None, |best, (key, n)| match best {
        Some((_, top)) if top >= n => best,
        _ => Some((key, n)),
    })
}
