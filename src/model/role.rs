use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a member inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Leader,
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid member role: {0}")]
pub struct ParseRoleError(pub String);

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Leader, Role::Member];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Leader => "leader",
            Role::Member => "member",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Leader => "Leader",
            Role::Member => "Member",
        }
    }

    /// Check if this role has at least the permissions of another role
    pub fn includes(&self, other: &Role) -> bool {
        match self {
            Role::Admin => true,
            Role::Leader => matches!(other, Role::Leader | Role::Member),
            Role::Member => matches!(other, Role::Member),
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "leader" => Ok(Role::Leader),
            "member" => Ok(Role::Member),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_includes_admin() {
        assert!(Role::Admin.includes(&Role::Admin));
        assert!(Role::Admin.includes(&Role::Leader));
        assert!(Role::Admin.includes(&Role::Member));
    }

    #[test]
    fn test_role_includes_leader() {
        assert!(!Role::Leader.includes(&Role::Admin));
        assert!(Role::Leader.includes(&Role::Leader));
        assert!(Role::Leader.includes(&Role::Member));
    }

    #[test]
    fn test_role_includes_member() {
        assert!(!Role::Member.includes(&Role::Admin));
        assert!(!Role::Member.includes(&Role::Leader));
        assert!(Role::Member.includes(&Role::Member));
    }

    #[test]
    fn test_role_parse() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("Admin".parse::<Role>().is_err()); // Case sensitive
        assert!("owner".parse::<Role>().is_err());
    }
}
