//! Error types for rust_motion_planning

use std::fmt;

/// Main error type for the planning core
#[derive(Debug)]
pub enum PlanningError {
    /// Invalid space/manifold configuration detected at construction or setup
    Configuration(String),
    /// Invalid parameter passed to an operation
    InvalidParameter(String),
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            PlanningError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for PlanningError {}

/// Result type alias for planning operations
pub type PlanningResult<T> = Result<T, PlanningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanningError::Configuration("dimension must be > 0".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration error: dimension must be > 0"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = PlanningError::InvalidParameter("resolution out of range".to_string());
        assert_eq!(format!("{}", err), "Invalid parameter: resolution out of range");
    }
}
