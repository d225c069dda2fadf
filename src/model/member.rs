use serde::{Deserialize, Serialize};

use super::{ids::MemberId, role::Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A member that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Member {
    pub fn new(id: &str, name: &str, email: &str, role: Role) -> Self {
        Self {
            id: MemberId::new(id),
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            avatar: None,
        }
    }

    pub fn from_draft(id: MemberId, draft: MemberDraft) -> Self {
        let MemberDraft {
            name,
            email,
            role,
            avatar,
        } = draft;
        Self {
            id,
            name,
            email,
            role,
            avatar,
        }
    }

    pub fn into_leader(self) -> Self {
        Self {
            role: Role::Leader,
            ..self
        }
    }
}

impl MemberDraft {
    pub fn new(name: &str, email: &str, role: Role) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            avatar: None,
        }
    }
}

impl Default for MemberDraft {
    fn default() -> Self {
        Self::new("", "", Role::Member)
    }
}
