use std::env;
use std::time::Duration;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub inventory_path: String,
    pub elicitation_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            inventory_path: env::var("INVENTORY_PATH")
                .unwrap_or_else(|_| "data/rooms.json".to_string()),
            elicitation_timeout_secs: env::var("ELICITATION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.inventory_path.trim().is_empty() {
            return Err(AppError::Config("INVENTORY_PATH must not be empty".to_string()));
        }
        Ok(())
    }

    /// `None` means an elicitation may wait for an answer indefinitely.
    pub fn elicitation_timeout(&self) -> Option<Duration> {
        self.elicitation_timeout_secs.map(Duration::from_secs)
    }
}
