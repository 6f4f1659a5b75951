use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Sum overflowed after {processed} of {total} numbers")]
    OverflowError { processed: usize, total: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrillError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DrillError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            DrillError::IoError(_) => ErrorSeverity::Critical,
            DrillError::OverflowError { .. } => ErrorSeverity::High,
            DrillError::ConfigError { .. } | DrillError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DrillError::IoError(_) => "Check that standard output is writable",
            DrillError::OverflowError { .. } => "Use smaller numbers or fewer of them",
            DrillError::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            DrillError::InvalidConfigValueError { .. } => {
                "Fix the offending value in the config file or on the command line"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrillError::IoError(e) => format!("Could not write output: {}", e),
            DrillError::OverflowError { .. } => "The numbers are too large to add up".to_string(),
            DrillError::ConfigError { message } => format!("Bad configuration: {}", message),
            DrillError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_pipe_is_not_fatal() {
        let err = DrillError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn config_errors_map_to_exit_code_two() {
        let err = DrillError::InvalidConfigValueError {
            field: "countdown.start".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("countdown.start"));
    }
}
