//! Style errors.

use thiserror::Error;

/// Error returned by stylesheet validation, scaling, and rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// A scale factor that is zero, negative, NaN, or infinite.
    #[error("invalid scale factor {value}: must be a positive finite number")]
    InvalidScale { value: f64 },
    /// A stylesheet defines a flag that collides with a reserved parameter name.
    #[error("stylesheet flag '{name}' collides with a reserved parameter name")]
    ReservedFlag { name: String },
    /// A prop bag carries a name that elements only take as a named parameter.
    #[error("prop '{name}' must be set through its named parameter, not as a prop")]
    ReservedProp { name: String },
    /// A stylesheet source could not be parsed.
    #[error("failed to parse stylesheet: {message}")]
    Parse { message: String },
}

impl From<serde_yaml::Error> for StyleError {
    fn from(err: serde_yaml::Error) -> Self {
        StyleError::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_scale_display() {
        let err = StyleError::InvalidScale { value: -2.0 };
        let msg = err.to_string();
        assert!(msg.contains("-2"));
        assert!(msg.contains("positive finite"));
    }

    #[test]
    fn test_reserved_flag_display() {
        let err = StyleError::ReservedFlag {
            name: "scale".to_string(),
        };
        assert!(err.to_string().contains("'scale'"));
    }

    #[test]
    fn test_reserved_prop_display() {
        let err = StyleError::ReservedProp {
            name: "style".to_string(),
        };
        assert!(err.to_string().contains("'style'"));
        assert!(err.to_string().contains("named parameter"));
    }

    #[test]
    fn test_parse_error_from_yaml() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err: StyleError = yaml_err.into();
        assert!(matches!(err, StyleError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse stylesheet"));
    }
}
