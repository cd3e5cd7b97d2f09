use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    InvalidFormat {
        setting_name: String,
        expected: String,
        actual: String,
    },
    InvalidValue {
        setting_name: String,
        reason: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                setting_name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Setting '{}' has invalid format. Expected: {}, got: {}",
                    setting_name, expected, actual
                )
            }
            Self::InvalidValue {
                setting_name,
                reason,
            } => {
                write!(f, "Invalid setting '{}': {}", setting_name, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
