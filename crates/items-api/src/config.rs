//! Configuration for the items API server.
//!
//! All configuration comes from environment variables:
//!
//! - `PORT` -- TCP port to listen on (default 4000)
//! - `HOST` -- address to bind (default `0.0.0.0`)
//! - `ITEMS_DB_PATH` -- storage document path (default `db.json` in the
//!   parent of the executable's directory, next to the installation)

use std::path::{Path, PathBuf};

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 4000;

/// Bind address used when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// File name of the storage document.
pub const DB_FILE_NAME: &str = "db.json";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        /// The raw variable value.
        value: String,
        /// The underlying parse error.
        source: std::num::ParseIntError,
    },

    /// The executable's location could not be determined.
    #[error("cannot locate executable for default storage path: {0}")]
    Executable(#[source] std::io::Error),
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// The host address to bind to.
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Path of the JSON storage document.
    pub db_path: PathBuf,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value
    /// or `None` when unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let db_path = match lookup("ITEMS_DB_PATH") {
            Some(path) => PathBuf::from(path),
            None => {
                let exe = std::env::current_exe().map_err(ConfigError::Executable)?;
                default_db_path(&exe)
            }
        };

        Ok(Self {
            host,
            port,
            db_path,
        })
    }
}

/// Storage path for an executable at `exe`: `db.json` one directory above
/// the executable's own directory.
pub fn default_db_path(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    exe_dir.parent().unwrap_or(exe_dir).join(DB_FILE_NAME)
}
