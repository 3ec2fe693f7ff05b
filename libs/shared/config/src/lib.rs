use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPCOMING_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub port: u16,
    pub upcoming_window_hours: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            port: DEFAULT_PORT,
            upcoming_window_hours: DEFAULT_UPCOMING_WINDOW_HOURS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("DATA_DIR not set, using default '{}'", DEFAULT_DATA_DIR);
                    PathBuf::from(DEFAULT_DATA_DIR)
                }),
            port: parse_var("PORT", DEFAULT_PORT),
            upcoming_window_hours: parse_var("UPCOMING_WINDOW_HOURS", DEFAULT_UPCOMING_WINDOW_HOURS),
        };

        if config.upcoming_window_hours <= 0 {
            warn!(
                "UPCOMING_WINDOW_HOURS must be positive, using default {}",
                DEFAULT_UPCOMING_WINDOW_HOURS
            );
            return Self {
                upcoming_window_hours: DEFAULT_UPCOMING_WINDOW_HOURS,
                ..config
            };
        }

        config
    }

    /// Config rooted at an explicit data directory, everything else default.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", key, default);
            default
        }
    }
}
