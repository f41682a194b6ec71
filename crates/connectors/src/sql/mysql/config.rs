use crate::sql::base::{error::ConfigError, query::generator::validate_ident};
use mysql_async::{Opts, OptsBuilder};
use std::{collections::HashMap, fmt};

pub const ENV_HOST: &str = "MYSQL_HOST";
pub const ENV_USER: &str = "MYSQL_USER";
pub const ENV_PASSWORD: &str = "MYSQL_PASSWORD";
pub const ENV_PORT: &str = "MYSQL_PORT";
pub const ENV_DATABASE: &str = "MYSQL_DATABASE";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_DATABASE: &str = "ALX_prodev";

/// Connection parameters for a MySQL server.
#[derive(Clone, PartialEq, Eq)]
pub struct MySqlConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub database: String,
}

impl MySqlConfig {
    /// Reads `MYSQL_*` variables, falling back to the documented defaults
    /// for any that are unset.
    pub fn from_env(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| {
            vars.get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let port = match vars.get(ENV_PORT).map(|p| p.trim()) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidPort {
                var: ENV_PORT.to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            })?,
        };

        let host = get(ENV_HOST, DEFAULT_HOST).trim().to_string();
        if host.is_empty() {
            return Err(ConfigError::Env(format!("{ENV_HOST} is set but empty")));
        }

        // The database name is interpolated into CREATE DATABASE.
        let database = get(ENV_DATABASE, DEFAULT_DATABASE).trim().to_string();
        validate_ident(&database).map_err(|_| {
            ConfigError::Env(format!(
                "{ENV_DATABASE} '{database}' may only contain letters, digits and '_'"
            ))
        })?;

        Ok(MySqlConfig {
            host,
            user: get(ENV_USER, DEFAULT_USER),
            password: get(ENV_PASSWORD, ""),
            port,
            database,
        })
    }

    /// Options for the server itself, with no default schema selected.
    pub fn server_opts(&self) -> Opts {
        self.builder().into()
    }

    /// Options for the configured database.
    pub fn database_opts(&self) -> Opts {
        self.builder().db_name(Some(self.database.clone())).into()
    }

    fn builder(&self) -> OptsBuilder {
        OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.user.clone()))
            .pass(Some(self.password.clone()))
    }
}

impl Default for MySqlConfig {
    fn default() -> Self {
        MySqlConfig {
            host: DEFAULT_HOST.to_string(),
            user: DEFAULT_USER.to_string(),
            password: String::new(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl fmt::Debug for MySqlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

impl fmt::Display for MySqlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mysql://{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}
