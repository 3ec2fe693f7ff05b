use chrono::NaiveTime;
use serde_json::Value;

use shared_models::ids::next_id;
use shared_models::records::parse_time;
use shared_models::{Doctor, Weekday};

use crate::models::{CreateDoctorRequest, DoctorError};

pub const DOCTOR_ID_PREFIX: &str = "D";

/// Shortest accepted day name; rules out abbreviations such as "Mon".
const MIN_DAY_NAME_LEN: usize = 5;

pub fn validate_new_doctor(
    candidate: CreateDoctorRequest,
    existing: &[Doctor],
) -> Result<Doctor, DoctorError> {
    let name = required(candidate.name, "name")?;
    let specialty = required(candidate.specialty, "specialty")?;
    let start_raw = required(candidate.schedule_start, "scheduleStart")?;
    let end_raw = required(candidate.schedule_end, "scheduleEnd")?;
    let days_raw = match candidate.available_days {
        None | Some(Value::Null) => return Err(DoctorError::MissingField("availableDays")),
        Some(days) => days,
    };

    let schedule_start = time_field(&start_raw, "scheduleStart")?;
    let schedule_end = time_field(&end_raw, "scheduleEnd")?;
    if schedule_start >= schedule_end {
        return Err(DoctorError::InvalidSchedule);
    }

    let available_days = parse_days(&days_raw)?;

    let duplicate = existing.iter().any(|d| {
        d.name.eq_ignore_ascii_case(&name) && d.specialty.eq_ignore_ascii_case(&specialty)
    });
    if duplicate {
        return Err(DoctorError::DuplicateDoctor { name, specialty });
    }

    Ok(Doctor {
        id: next_id(DOCTOR_ID_PREFIX, existing.iter().map(|d| d.id.as_str())),
        name,
        specialty,
        schedule_start,
        schedule_end,
        available_days,
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DoctorError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(DoctorError::MissingField(field)),
    }
}

fn time_field(raw: &str, field: &'static str) -> Result<NaiveTime, DoctorError> {
    parse_time(raw).ok_or_else(|| DoctorError::InvalidTimeFormat {
        field,
        value: raw.to_string(),
    })
}

/// Non-empty array of full weekday names; duplicates collapse in order.
fn parse_days(raw: &Value) -> Result<Vec<Weekday>, DoctorError> {
    let entries = match raw {
        Value::Array(entries) if !entries.is_empty() => entries,
        _ => {
            return Err(DoctorError::InvalidDaysList(
                "expected a non-empty list of weekday names".to_string(),
            ))
        }
    };

    let mut days = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = match entry {
            Value::String(s) if s.trim().chars().count() >= MIN_DAY_NAME_LEN => s.trim(),
            other => {
                return Err(DoctorError::InvalidDaysList(format!(
                    "{} is not a full weekday name",
                    other
                )))
            }
        };

        let day: Weekday = name
            .parse()
            .map_err(|_| DoctorError::InvalidDaysList(format!("'{}' is not a weekday", name)))?;
        if !days.contains(&day) {
            days.push(day);
        }
    }

    Ok(days)
}
