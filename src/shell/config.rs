// Runtime configuration, read from the process environment.
//
// `main` loads a `.env` file first when one exists. Lookups go through a
// closure so tests can feed a map instead of mutating the real environment.

use crate::modules::employees::adapters::outbound::employee_store_postgres::{
    EmployeeColumns, InvalidIdentifier, SqlIdentifier, StoreSchema,
};
use crate::shared::auth::identity::TokenSettings;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub schema: StoreSchema,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database: DatabaseSettings,
    pub department_api_url: String,
    pub tokens: TokenSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));
        let identifier = |key: &'static str, default: &str| {
            let raw = optional(key).unwrap_or_else(|| default.to_string());
            SqlIdentifier::parse(&raw).map_err(|InvalidIdentifier(value)| ConfigError::Invalid {
                key,
                reason: format!("{value:?} is not a plain SQL identifier"),
            })
        };

        let bind_addr = optional("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let max_connections = match optional("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().map_err(|e| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?,
            None => 5,
        };

        let list_columns = EmployeeColumns {
            id: identifier("EMPLOYEE_COL_ID", "Empid")?,
            name: identifier("EMPLOYEE_COL_NAME", "Ename")?,
            dept_id: identifier("EMPLOYEE_COL_DEPT_ID", "DeptID")?,
        };
        let get_by_id_columns = EmployeeColumns {
            name: identifier("EMPLOYEE_BY_ID_COL_NAME", list_columns.name.as_str())?,
            ..list_columns.clone()
        };

        let schema = StoreSchema {
            list_routine: identifier("EMPLOYEE_SP_LIST", "getEmp")?,
            get_by_id_routine: identifier("EMPLOYEE_SP_GET_BY_ID", "getEmpById")?,
            insert_routine: identifier("EMPLOYEE_SP_INSERT", "insertEmployee")?,
            update_routine: identifier("EMPLOYEE_SP_UPDATE", "updateEmployee")?,
            delete_routine: identifier("EMPLOYEE_SP_DELETE", "deleteEmployee")?,
            list_columns,
            get_by_id_columns,
        };

        Ok(Self {
            bind_addr,
            database: DatabaseSettings {
                url: required("DATABASE_URL")?,
                max_connections,
                schema,
            },
            department_api_url: required("DEPARTMENT_API_URL")?,
            tokens: TokenSettings {
                secret: required("JWT_SECRET")?,
                issuer: optional("JWT_ISSUER"),
                audience: optional("JWT_AUDIENCE"),
            },
        })
    }
}
