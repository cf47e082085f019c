//! Command-line flag surface.
//!
//! Flags mirror the configuration schema one to one. Every flag is optional
//! on the command line: values come from the `--config` file when given,
//! then flags override, then schema defaults fill the rest.

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{self, ConfigError};
use crate::config::schema::AppConfig;

/// dbstatus - JSON HTTP status API over a relational database.
#[derive(Debug, Parser)]
#[command(name = "dbstatus", version)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (sensitive data may be logged).
    #[arg(long)]
    pub debug: bool,

    /// HTTP API listen address.
    #[arg(long)]
    pub listen_address: Option<String>,

    /// HTTP API listen port.
    #[arg(long)]
    pub listen_port: Option<u16>,

    /// Database driver (postgres/mysql).
    #[arg(long)]
    pub db_driver: Option<String>,

    /// Database server hostname or IP address.
    #[arg(long)]
    pub db_hostname: Option<String>,

    /// Database server port.
    #[arg(long)]
    pub db_port: Option<u16>,

    /// Database instance (optional).
    #[arg(long)]
    pub db_instance: Option<String>,

    /// Database schema name.
    #[arg(long)]
    pub db_schema: Option<String>,

    /// Database username.
    #[arg(long)]
    pub db_user: Option<String>,

    /// Database password.
    #[arg(long)]
    pub db_password: Option<String>,
}

impl Cli {
    /// Resolve flags (and the optional config file) into a validated config.
    pub fn resolve(self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => loader::load_file(path)?,
            None => AppConfig::default(),
        };

        if self.debug {
            config.server.debug = true;
        }
        if let Some(addr) = self.listen_address {
            config.server.listen_address = addr;
        }
        if let Some(port) = self.listen_port {
            config.server.listen_port = port;
        }
        if let Some(driver) = self.db_driver {
            config.database.driver = driver;
        }
        if let Some(hostname) = self.db_hostname {
            config.database.hostname = hostname;
        }
        if let Some(port) = self.db_port {
            config.database.port = port;
        }
        if let Some(instance) = self.db_instance {
            config.database.instance = Some(instance);
        }
        if let Some(schema) = self.db_schema {
            config.database.schema = schema;
        }
        if let Some(user) = self.db_user {
            config.database.user = user;
        }
        if let Some(password) = self.db_password {
            config.database.password = password;
        }

        loader::check(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dbstatus").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_resolve_into_config() {
        let cli = parse(&[
            "--debug",
            "--listen-port",
            "9090",
            "--db-hostname",
            "db.internal",
            "--db-schema",
            "orders",
            "--db-user",
            "svc",
            "--db-password",
            "secret",
        ]);
        let config = cli.resolve().unwrap();
        assert!(config.server.debug);
        assert_eq!(config.server.listen_port, 9090);
        assert_eq!(config.server.listen_address, "127.0.0.1");
        assert_eq!(config.database.hostname, "db.internal");
        assert_eq!(config.database.driver, "postgres");
    }

    #[test]
    fn test_missing_required_fields_fail_resolution() {
        let cli = parse(&["--db-hostname", "db.internal"]);
        assert!(cli.resolve().is_err());
    }
}
