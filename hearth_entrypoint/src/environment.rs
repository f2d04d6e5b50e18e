//! Typed utility for determining what environment we are in at runtime

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Name of the environment variable holding the deployment environment
pub const ENV_VAR: &str = "HEARTH_ENV";

/// The current environment the application is running in
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(strum::EnumIter))]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The server is running on localhost
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum HearthEnvErr {
    /// the env var was missing or not unicode
    #[error("{ENV_VAR} is not set: {0}")]
    VarErr(#[from] std::env::VarError),
    /// the input string value was not recognized as a valid env
    #[error("{0}")]
    InvalidValue(#[from] UnknownValue),
}

/// the input string value was not recognized as a valid env
#[derive(Debug, Error)]
#[error("unknown environment value: {0}")]
pub struct UnknownValue(String);

impl Environment {
    /// Attempt to construct a new version of [Environment] from the environment variables
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, HearthEnvErr> {
        let v = std::env::var(ENV_VAR)?;
        Ok(Self::from_str(&v)?)
    }

    /// attempt to create a new [Environment] falling back to production if we fail to construct
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" | "production" => Ok(Environment::Production),
            "dev" | "develop" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn display_round_trips_through_from_str() {
        for env in Environment::iter() {
            let parsed = Environment::from_str(&env.to_string()).expect("expected to parse");
            assert_eq!(parsed, env);
        }
    }

    #[test]
    fn long_forms_parse() {
        assert_eq!(
            Environment::from_str("production").unwrap(),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str("develop").unwrap(),
            Environment::Develop
        );
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert!(Environment::from_str("staging").is_err());
    }
}
