pub mod clock;
pub mod state;
#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use state::AppState;
