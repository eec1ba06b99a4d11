use serde::{Deserialize, Serialize};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error` (case-insensitive).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// The configured level trimmed and lowercased, as the subscriber expects it.
    pub fn normalized_level(&self) -> String {
        self.level.trim().to_ascii_lowercase()
    }

    pub fn is_known_level(&self) -> bool {
        LOG_LEVELS.contains(&self.normalized_level().as_str())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
