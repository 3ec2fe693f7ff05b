pub mod availability;
pub mod doctor;
pub mod registration;

pub use availability::{find_available_doctors, slot_taken};
pub use doctor::DoctorService;
pub use registration::validate_new_doctor;
