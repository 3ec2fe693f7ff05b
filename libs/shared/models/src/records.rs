use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).ok()
}

/// Serde adapter for `HH:MM` time-of-day fields.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(super::TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid time of day '{}', expected HH:MM", raw)))
    }
}

// ==============================================================================
// WEEKDAY
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Sunday-first week.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn spanish_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Domingo",
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeekday(pub String);

impl fmt::Display for UnknownWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown weekday '{}'", self.0)
    }
}

impl std::error::Error for UnknownWeekday {}

fn fold_accents(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Accepts full English or Spanish names, any case, with or without accents.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let folded = fold_accents(raw);
        Weekday::ALL
            .into_iter()
            .find(|day| {
                folded == day.name().to_lowercase() || folded == fold_accents(day.spanish_name())
            })
            .ok_or_else(|| UnknownWeekday(raw.to_string()))
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==============================================================================
// PATIENT
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub phone: String,
    pub email: String,
    pub registration_date: NaiveDate,
}

// ==============================================================================
// DOCTOR
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(with = "hhmm")]
    pub schedule_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub schedule_end: NaiveTime,
    pub available_days: Vec<Weekday>,
}

impl Doctor {
    pub fn works_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }

    /// Both schedule bounds are inclusive.
    pub fn covers(&self, time: NaiveTime) -> bool {
        self.schedule_start <= time && time <= self.schedule_end
    }
}

// ==============================================================================
// APPOINTMENT
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[serde(alias = "programada")]
    Scheduled,
    #[serde(alias = "cancelada")]
    Cancelled,
    #[serde(alias = "realizada")]
    Completed,
}

impl AppointmentStatus {
    /// Scheduled and completed appointments count towards workload statistics.
    pub fn counts_as_booked(self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::Completed)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// `date` and `time` stay as stored text; a record with an unreadable value is
/// still listed, it just never matches time-based queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn is_scheduled(&self) -> bool {
        self.status == AppointmentStatus::Scheduled
    }

    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        Some(parse_date(&self.date)?.and_time(parse_time(&self.time)?))
    }

    /// True when this appointment holds the doctor's slot.
    pub fn occupies(&self, doctor_id: &str, date: &str, time: &str) -> bool {
        self.is_scheduled() && self.doctor_id == doctor_id && self.date == date && self.time == time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn weekday_mapping_is_sunday_first() {
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(Weekday::of(sunday), Weekday::Sunday);
        assert_eq!(Weekday::of(monday), Weekday::Monday);
        assert_eq!(Weekday::ALL[0], Weekday::Sunday);
        assert_eq!(Weekday::ALL[6], Weekday::Saturday);
    }

    #[test]
    fn weekday_parses_english_and_spanish_names() {
        assert_eq!("Monday".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!("lunes".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!("Miércoles".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!("MIERCOLES".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!(" Sábado ".parse::<Weekday>(), Ok(Weekday::Saturday));
        assert!("Mon".parse::<Weekday>().is_err());
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn doctor_round_trips_through_stored_json() {
        let stored = json!({
            "id": "D001",
            "name": "Dr. Ana Ruiz",
            "specialty": "Cardiology",
            "scheduleStart": "09:00",
            "scheduleEnd": "12:30",
            "availableDays": ["Lunes", "Wednesday"]
        });
        let doctor: Doctor = serde_json::from_value(stored).unwrap();
        assert_eq!(doctor.available_days, vec![Weekday::Monday, Weekday::Wednesday]);
        assert!(doctor.covers(NaiveTime::from_hms_opt(12, 30, 0).unwrap()));
        assert!(!doctor.covers(NaiveTime::from_hms_opt(12, 31, 0).unwrap()));

        let written = serde_json::to_value(&doctor).unwrap();
        assert_eq!(written["scheduleEnd"], "12:30");
        assert_eq!(written["availableDays"], json!(["Monday", "Wednesday"]));
    }

    #[test]
    fn status_accepts_legacy_spanish_values() {
        let status: AppointmentStatus = serde_json::from_value(json!("programada")).unwrap();
        assert_eq!(status, AppointmentStatus::Scheduled);
        assert_eq!(serde_json::to_value(status).unwrap(), json!("scheduled"));
    }

    #[test]
    fn unreadable_appointment_time_has_no_start() {
        let appointment = Appointment {
            id: "C001".into(),
            patient_id: "P001".into(),
            doctor_id: "D001".into(),
            date: "2024-13-45".into(),
            time: "10:00".into(),
            reason: "Checkup".into(),
            status: AppointmentStatus::Scheduled,
        };
        assert_eq!(appointment.starts_at(), None);
    }
}
