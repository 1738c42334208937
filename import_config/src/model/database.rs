//! Database connection entries.

use serde::{Deserialize, Serialize};

use super::coerce;

/// Database type assumed when an entry does not name one.
pub const TYPE_MYSQL: &str = "mysql";
/// Key-value store database type.
pub const TYPE_REDIS: &str = "redis";
/// Database types the loader accepts. Entries of any other type are treated
/// as absent by lookups.
pub const AVAILABLE_TYPES: [&str; 2] = [TYPE_MYSQL, TYPE_REDIS];

/// A configured database connection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Database {
    /// Unique identifier used by `use-db-id`.
    pub id: String,
    /// PDO-style DSN.
    #[serde(rename = "pdo-dsn")]
    pub dsn: Option<String>,
    /// Host name.
    pub host: Option<String>,
    /// Port number.
    pub port: Option<u32>,
    /// Login name.
    pub username: Option<String>,
    /// Login password.
    pub password: Option<String>,
    /// Marks the entry preferred when no id is requested.
    #[serde(deserialize_with = "coerce::boolean")]
    pub default: bool,
    /// Connection timeout in seconds.
    pub timeout: Option<u64>,
    /// Server version.
    pub version: Option<String>,
    /// Schema name.
    pub name: Option<String>,
    /// Prefix of every table name.
    pub table_prefix: Option<String>,
    /// Database type, matched case-insensitively against
    /// [`AVAILABLE_TYPES`].
    #[serde(rename = "type")]
    pub db_type: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            id: String::new(),
            dsn: None,
            host: None,
            port: None,
            username: None,
            password: None,
            default: false,
            timeout: None,
            version: None,
            name: None,
            table_prefix: None,
            db_type: TYPE_MYSQL.to_owned(),
        }
    }
}

impl Database {
    /// Construct an entry of the default type.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Whether the entry's type is one the loader accepts.
    #[must_use]
    pub fn has_valid_type(&self) -> bool {
        let db_type = self.db_type.to_ascii_lowercase();
        AVAILABLE_TYPES.contains(&db_type.as_str())
    }
}
