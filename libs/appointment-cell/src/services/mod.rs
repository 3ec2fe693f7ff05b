pub mod appointment;
pub mod booking;
pub mod lifecycle;
pub mod upcoming;

pub use appointment::AppointmentService;
pub use booking::validate_new_appointment;
pub use lifecycle::cancel_appointment;
pub use upcoming::upcoming_within;
