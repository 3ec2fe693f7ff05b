pub mod error;
pub mod extract;
pub mod ids;
pub mod records;

pub use error::AppError;
pub use extract::{AppJson, AppQuery};
pub use records::{Appointment, AppointmentStatus, Doctor, Patient, Weekday};
