pub mod patient;
pub mod registration;

pub use patient::PatientService;
pub use registration::{apply_patient_update, validate_new_patient};
