//! Entity records as served by the dashboard backend list endpoints.
//!
//! Each record mirrors one `GET <collection>/` item. Fields the backend may
//! omit or send as `null` are `Option`s; records keep raw timestamps and
//! statuses so nothing is lost when a value is unexpected. The [`Record`]
//! impls next to each struct are where those raw values meet the view
//! engine.
//!
//! [`Record`]: crate::view::Record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod execution;
mod result;
mod secteur;
mod user;

pub use execution::{Execution, EXECUTIONS};
pub use result::{ExecutionResult, RESULTS};
pub use secteur::{Secteur, SECTEURS};
pub use user::{SocieteRef, User, USERS};

/// Lifecycle status of an execution or a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statut {
    Pending,
    Running,
    Done,
    Error,
    NonExecuted,
}

impl Statut {
    pub const ALL: [Statut; 5] = [
        Statut::Pending,
        Statut::Running,
        Statut::Done,
        Statut::Error,
        Statut::NonExecuted,
    ];

    /// The wire value (`statut` field).
    pub fn as_str(self) -> &'static str {
        match self {
            Statut::Pending => "pending",
            Statut::Running => "running",
            Statut::Done => "done",
            Statut::Error => "error",
            Statut::NonExecuted => "non_executed",
        }
    }

    /// Human label shown in lists and filter chips.
    pub fn label(self) -> &'static str {
        match self {
            Statut::Pending => "Pending",
            Statut::Running => "Running",
            Statut::Done => "Conclusive",
            Statut::Error => "Inconclusive",
            Statut::NonExecuted => "Not executed",
        }
    }

    /// Label for a raw status string, falling back to the raw value.
    pub fn label_for(raw: &str) -> &str {
        match raw.parse::<Statut>() {
            Ok(statut) => statut.label(),
            Err(_) => raw,
        }
    }
}

impl fmt::Display for Statut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Statut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statut::ALL
            .into_iter()
            .find(|statut| statut.as_str() == s)
            .ok_or_else(|| format!("Unknown status: {}", s))
    }
}

/// `true` for a present, non-blank string.
pub(crate) fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}
