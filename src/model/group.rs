use std::collections::HashSet;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{
    ids::{GroupId, MemberId},
    member::Member,
    role::Role,
    status::Status,
};

/// A named set of members. `id` and `created_at` are fixed once the group exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    id: GroupId,
    pub name: String,
    pub description: String,
    pub status: Status,
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub members: Vec<Member>,
    created_at: DateTime<Local>,
}

/// Everything the create dialog collects for a new group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDraft {
    pub name: String,
    pub description: String,
    pub status: Status,
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Group {
    #[allow(clippy::too_many_arguments)]
    pub fn new_all(
        id: GroupId,
        name: &str,
        description: &str,
        status: Status,
        rating: f32,
        image: Option<String>,
        members: Vec<Member>,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            name: name.to_owned(),
            description: description.to_owned(),
            status,
            rating,
            image,
            members,
            created_at,
        }
    }

    /// The creator always ends up as the sole leader, whatever role they had before.
    pub fn from_draft(
        id: GroupId,
        draft: GroupDraft,
        creator: Member,
        created_at: DateTime<Local>,
    ) -> Self {
        let GroupDraft {
            name,
            description,
            status,
            rating,
            image,
        } = draft;
        Self {
            id,
            name,
            description,
            status,
            rating,
            image,
            members: vec![creator.into_leader()],
            created_at,
        }
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Local> {
        &self.created_at
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|member| &member.id == id)
    }

    pub fn leaders(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|member| member.role == Role::Leader)
    }

    pub fn has_leader(&self) -> bool {
        self.leaders().next().is_some()
    }

    /// First member id that shows up twice, if any.
    pub fn duplicate_member(&self) -> Option<&MemberId> {
        let mut seen = HashSet::new();
        self.members
            .iter()
            .map(|member| &member.id)
            .find(|id| !seen.insert(*id))
    }

    /// Carries the immutable identity of `previous` over to this value.
    pub(super) fn keep_identity_of(&mut self, previous: &Group) {
        self.id = previous.id.clone();
        self.created_at = previous.created_at;
    }
}

impl GroupDraft {
    pub fn new(name: &str, description: &str, status: Status) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            status,
            rating: 0.,
            image: None,
        }
    }
}

impl Default for GroupDraft {
    fn default() -> Self {
        Self::new("", "", Status::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_with(members: Vec<Member>) -> Group {
        Group::new_all(
            GroupId::from("g"),
            "Ops",
            "On call",
            Status::Active,
            3.,
            None,
            members,
            Local::now(),
        )
    }

    #[test]
    fn test_from_draft_forces_leader() {
        let creator = Member::new("admin1", "Admin User", "admin@example.com", Role::Admin);
        let group = Group::from_draft(
            GroupId::from("g"),
            GroupDraft::new("Ops", "On call", Status::Pending),
            creator.clone(),
            Local::now(),
        );

        assert_eq!(group.members, vec![creator.into_leader()]);
        assert_eq!(group.members[0].role, Role::Leader);
        assert_eq!(group.status, Status::Pending);
    }

    #[test]
    fn test_duplicate_member() {
        let group = group_with(vec![
            Member::new("a", "A", "a@x.com", Role::Leader),
            Member::new("b", "B", "b@x.com", Role::Member),
            Member::new("a", "C", "c@x.com", Role::Member),
        ]);
        assert_eq!(group.duplicate_member(), Some(&MemberId::from("a")));

        let unique = group_with(vec![Member::new("a", "A", "a@x.com", Role::Member)]);
        assert_eq!(unique.duplicate_member(), None);
    }

    #[test]
    fn test_has_leader() {
        let group = group_with(vec![Member::new("a", "A", "a@x.com", Role::Member)]);
        assert!(!group.has_leader());
        assert!(!group_with(vec![]).has_leader());
        let led = group_with(vec![Member::new("a", "A", "a@x.com", Role::Leader)]);
        assert_eq!(led.leaders().count(), 1);
    }

    #[test]
    fn test_created_at_uses_camel_case() {
        let json = serde_json::to_value(group_with(vec![])).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("image").is_none());
        assert_eq!(json["status"], "active");
    }
}
