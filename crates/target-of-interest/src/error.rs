//! Error types surfaced by the target-of-interest task.
//!
//! Configuration problems are detected once, when the task is constructed, and
//! make the task permanently non-activatable. Collaborator failures never
//! leave a tick: the action that hit them simply fails.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskError>;

/// Problems found while reading task parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("required attribute `{field}` is missing")]
    Missing { field: &'static str },

    #[error("attribute `{field}` has invalid value `{value}`: {reason}")]
    Invalid {
        field: String,
        value: String,
        reason: &'static str,
    },

    #[error("failed to parse encounter config: {reason}")]
    Parse { reason: String },

    #[error("failed to read encounter config `{path}`: {reason}")]
    Io { path: String, reason: String },
}

impl ConfigError {
    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Missing { field } => Some(*field),
            ConfigError::Invalid { field, .. } => Some(field.as_str()),
            ConfigError::Parse { .. } | ConfigError::Io { .. } => None,
        }
    }
}

/// Errors returned by the task lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task cannot start: {0}")]
    Configuration(#[from] ConfigError),
}

/// Failure reported by the combat collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("unit {0} cannot be targeted")]
    Untargetable(crate::world::Guid),
}
