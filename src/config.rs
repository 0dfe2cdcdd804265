use std::env;

/// Runtime mode, read once at startup and passed explicitly to anything
/// that varies behavior on it. Development mode exposes error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    /// `APP_ENV=development` selects development mode; anything else
    /// (including unset) is production.
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(val) if val == "development" => RuntimeMode::Development,
            _ => RuntimeMode::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == RuntimeMode::Development
    }
}
