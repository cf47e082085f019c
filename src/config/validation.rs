//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde/clap handle syntactic)
//! - Check required backend identity fields are present
//! - Reject drivers the Any pool cannot dial
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs once, after flag/file merging, before anything starts

use crate::config::schema::AppConfig;

/// Drivers the connection layer can open.
pub const SUPPORTED_DRIVERS: &[&str] = &["postgres", "mysql"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a resolved configuration, collecting every failure.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.listen_address.is_empty() {
        errors.push(ValidationError {
            field: "server.listen_address",
            message: "must not be empty".into(),
        });
    }
    if config.server.listen_port == 0 {
        errors.push(ValidationError {
            field: "server.listen_port",
            message: "must be non-zero".into(),
        });
    }

    let db = &config.database;
    if !SUPPORTED_DRIVERS.contains(&db.driver.as_str()) {
        errors.push(ValidationError {
            field: "database.driver",
            message: format!(
                "unsupported driver '{}', expected one of {:?}",
                db.driver, SUPPORTED_DRIVERS
            ),
        });
    }
    if db.hostname.is_empty() {
        errors.push(ValidationError {
            field: "database.hostname",
            message: "required".into(),
        });
    }
    if db.port == 0 {
        errors.push(ValidationError {
            field: "database.port",
            message: "must be non-zero".into(),
        });
    }
    if db.schema.is_empty() {
        errors.push(ValidationError {
            field: "database.schema",
            message: "required".into(),
        });
    }
    if db.user.is_empty() {
        errors.push(ValidationError {
            field: "database.user",
            message: "required".into(),
        });
    }
    if db.password.is_empty() {
        errors.push(ValidationError {
            field: "database.password",
            message: "required".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::AppConfig;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.database.hostname = "db.internal".into();
        config.database.schema = "orders".into();
        config.database.user = "svc".into();
        config.database.password = "secret".into();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_config(&AppConfig::default()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"database.hostname"));
        assert!(fields.contains(&"database.schema"));
        assert!(fields.contains(&"database.user"));
        assert!(fields.contains(&"database.password"));
    }

    #[test]
    fn test_rejects_unknown_driver() {
        let mut config = valid_config();
        config.database.driver = "mssql".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "database.driver");
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = valid_config();
        config.database.port = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "database.port");
    }
}
