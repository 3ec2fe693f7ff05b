use chrono::NaiveDate;

use shared_models::ids::next_id;
use shared_models::Patient;

use crate::models::{CreatePatientRequest, PatientError, UpdatePatientRequest};

pub const PATIENT_ID_PREFIX: &str = "P";

/// Validates a registration against the current patients and builds the record.
pub fn validate_new_patient(
    candidate: CreatePatientRequest,
    existing: &[Patient],
    today: NaiveDate,
) -> Result<Patient, PatientError> {
    let name = required(candidate.name, "name")?;
    let age = candidate.age.ok_or(PatientError::MissingField("age"))?;
    let phone = required(candidate.phone, "phone")?;
    let email = required(candidate.email, "email")?;

    if age <= 0 {
        return Err(PatientError::InvalidAge);
    }

    if email_taken(&email, existing, None) {
        return Err(PatientError::DuplicateEmail { email });
    }

    Ok(Patient {
        id: next_id(PATIENT_ID_PREFIX, existing.iter().map(|p| p.id.as_str())),
        name,
        age,
        phone,
        email,
        registration_date: today,
    })
}

/// Merges the provided fields over `current`. The id and registration date
/// never change.
pub fn apply_patient_update(
    current: &Patient,
    changes: UpdatePatientRequest,
    patients: &[Patient],
) -> Result<Patient, PatientError> {
    let mut updated = current.clone();

    if let Some(name) = changes.name {
        updated.name = required(Some(name), "name")?;
    }
    if let Some(age) = changes.age {
        if age <= 0 {
            return Err(PatientError::InvalidAge);
        }
        updated.age = age;
    }
    if let Some(phone) = changes.phone {
        updated.phone = required(Some(phone), "phone")?;
    }
    if let Some(email) = changes.email {
        let email = required(Some(email), "email")?;
        if email_taken(&email, patients, Some(&current.id)) {
            return Err(PatientError::DuplicateEmail { email });
        }
        updated.email = email;
    }

    Ok(updated)
}

fn required(value: Option<String>, field: &'static str) -> Result<String, PatientError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(PatientError::MissingField(field)),
    }
}

fn email_taken(email: &str, patients: &[Patient], except_id: Option<&str>) -> bool {
    patients
        .iter()
        .filter(|p| Some(p.id.as_str()) != except_id)
        .any(|p| p.email.eq_ignore_ascii_case(email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn request(name: &str, age: i64, email: &str) -> CreatePatientRequest {
        CreatePatientRequest {
            name: Some(name.to_string()),
            age: Some(age),
            phone: Some("555-0199".to_string()),
            email: Some(email.to_string()),
        }
    }

    #[test]
    fn registers_with_sequential_id_and_today() {
        let first = validate_new_patient(request("Lucia Perez", 29, "lucia@example.com"), &[], today()).unwrap();
        assert_eq!(first.id, "P001");
        assert_eq!(first.registration_date, today());

        let second = validate_new_patient(
            request("Marco Diaz", 41, "marco@example.com"),
            std::slice::from_ref(&first),
            today(),
        )
        .unwrap();
        assert_eq!(second.id, "P002");
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let err = validate_new_patient(CreatePatientRequest::default(), &[], today()).unwrap_err();
        assert_eq!(err, PatientError::MissingField("name"));

        let mut candidate = request("Lucia Perez", 29, "lucia@example.com");
        candidate.phone = Some("   ".to_string());
        assert_matches!(
            validate_new_patient(candidate, &[], today()),
            Err(PatientError::MissingField("phone"))
        );
    }

    #[test]
    fn non_positive_age_is_rejected() {
        assert_matches!(
            validate_new_patient(request("Lucia Perez", 0, "lucia@example.com"), &[], today()),
            Err(PatientError::InvalidAge)
        );
        assert_matches!(
            validate_new_patient(request("Lucia Perez", -4, "lucia@example.com"), &[], today()),
            Err(PatientError::InvalidAge)
        );
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let first = validate_new_patient(request("Lucia Perez", 29, "lucia@example.com"), &[], today()).unwrap();

        let err = validate_new_patient(request("Other Lucia", 30, "lucia@example.com"), &[first], today())
            .unwrap_err();
        assert_matches!(err, PatientError::DuplicateEmail { email } if email == "lucia@example.com");
    }

    #[test]
    fn update_merges_fields_and_keeps_identity() {
        let current = validate_new_patient(request("Lucia Perez", 29, "lucia@example.com"), &[], today()).unwrap();
        let changes = UpdatePatientRequest {
            age: Some(30),
            phone: Some("555-0000".to_string()),
            ..Default::default()
        };

        let updated = apply_patient_update(&current, changes, std::slice::from_ref(&current)).unwrap();
        assert_eq!(updated.id, current.id);
        assert_eq!(updated.registration_date, current.registration_date);
        assert_eq!(updated.name, "Lucia Perez");
        assert_eq!(updated.age, 30);
        assert_eq!(updated.phone, "555-0000");
    }

    #[test]
    fn update_keeps_email_unique_but_allows_own_email() {
        let lucia = validate_new_patient(request("Lucia Perez", 29, "lucia@example.com"), &[], today()).unwrap();
        let marco = validate_new_patient(
            request("Marco Diaz", 41, "marco@example.com"),
            std::slice::from_ref(&lucia),
            today(),
        )
        .unwrap();
        let patients = vec![lucia.clone(), marco.clone()];

        let same = UpdatePatientRequest {
            email: Some("lucia@example.com".to_string()),
            ..Default::default()
        };
        assert!(apply_patient_update(&lucia, same, &patients).is_ok());

        let stolen = UpdatePatientRequest {
            email: Some("LUCIA@example.com".to_string()),
            ..Default::default()
        };
        assert_matches!(
            apply_patient_update(&marco, stolen, &patients),
            Err(PatientError::DuplicateEmail { .. })
        );
    }

    #[test]
    fn update_rejects_invalid_age() {
        let current = validate_new_patient(request("Lucia Perez", 29, "lucia@example.com"), &[], today()).unwrap();
        let changes = UpdatePatientRequest {
            age: Some(0),
            ..Default::default()
        };
        assert_matches!(apply_patient_update(&current, changes, &[]), Err(PatientError::InvalidAge));
    }
}
