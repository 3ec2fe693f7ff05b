// libs/appointment-cell/src/services/lifecycle.rs
use tracing::{debug, warn};

use shared_models::{Appointment, AppointmentStatus};

use crate::models::AppointmentError;

/// Statuses reachable from `current`. Only a scheduled appointment moves, and
/// only to cancelled; nothing exposes the move to completed.
pub fn valid_transitions(current: AppointmentStatus) -> &'static [AppointmentStatus] {
    match current {
        AppointmentStatus::Scheduled => &[AppointmentStatus::Cancelled],
        AppointmentStatus::Cancelled | AppointmentStatus::Completed => &[],
    }
}

/// Returns the cancelled copy of appointment `id`; the caller persists it.
/// Cancelling twice fails the second time.
pub fn cancel_appointment(id: &str, appointments: &[Appointment]) -> Result<Appointment, AppointmentError> {
    let current = appointments
        .iter()
        .find(|a| a.id == id)
        .ok_or(AppointmentError::NotFound)?;

    debug!("Cancelling appointment {} (status {})", id, current.status);

    if !valid_transitions(current.status).contains(&AppointmentStatus::Cancelled) {
        warn!("Refusing to cancel appointment {} in status {}", id, current.status);
        return Err(AppointmentError::NotCancellable(current.status));
    }

    Ok(Appointment {
        status: AppointmentStatus::Cancelled,
        ..current.clone()
    })
}
