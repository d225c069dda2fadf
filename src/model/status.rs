use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a group.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Archived,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid group status: {0}")]
pub struct ParseStatusError(pub String);

impl Status {
    /// Menu order of the status filter.
    pub const ALL: [Status; 4] = [
        Status::Active,
        Status::Inactive,
        Status::Pending,
        Status::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Archived => "archived",
            Status::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Archived => "Archived",
            Status::Pending => "Pending",
        }
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            "archived" => Ok(Status::Archived),
            "pending" => Ok(Status::Pending),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
