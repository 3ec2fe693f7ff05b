pub mod ranking;
pub mod statistics;

pub use ranking::{busiest_doctor, busiest_specialty};
pub use statistics::StatisticsService;
