use std::collections::HashSet;

use chrono::Local;
use tracing::{debug, warn};

use super::{
    error::GroupsError,
    group::{Group, GroupDraft},
    ids::{GroupId, InitId, MemberId},
    member::{Member, MemberDraft},
    permissions::{authorize, GroupAction},
    seed,
};

/// The group collection owned by the session.
///
/// Every change validates first and mutates second, so a call either applies fully
/// or leaves the collection untouched and returns the reason.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Groups {
    groups: Vec<Group>,
}

/// What [`Groups::apply`] changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Created(GroupId),
    Updated(GroupId),
    Deleted(Group),
    MemberAdded { group: GroupId, member: MemberId },
    MemberDeleted { group: GroupId, member: Member },
    Rated(GroupId),
}

impl Groups {
    /// Takes ownership of `groups` after checking that all ids are unique.
    pub fn new(groups: Vec<Group>) -> Result<Self, GroupsError> {
        let mut seen = HashSet::new();
        for group in &groups {
            if !seen.insert(group.id()) {
                return Err(GroupsError::DuplicateGroupId(group.id().clone()));
            }
            if let Some(member) = group.duplicate_member() {
                return Err(GroupsError::DuplicateMemberId {
                    group: group.id().clone(),
                    member: member.clone(),
                });
            }
        }
        Ok(Self { groups })
    }

    pub fn seeded() -> Self {
        Self {
            groups: seed::initial_groups(),
        }
    }

    pub fn get(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|group| group.id() == id)
    }

    pub fn contains(&self, id: &GroupId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn as_slice(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn position(&self, id: &GroupId) -> Result<usize, GroupsError> {
        self.groups
            .iter()
            .position(|group| group.id() == id)
            .ok_or_else(|| GroupsError::GroupNotFound(id.clone()))
    }

    fn get_mut(&mut self, id: &GroupId) -> Result<&mut Group, GroupsError> {
        self.groups
            .iter_mut()
            .find(|group| group.id() == id)
            .ok_or_else(|| GroupsError::GroupNotFound(id.clone()))
    }

    pub fn create_group(&mut self, draft: GroupDraft, creator: &Member) -> &Group {
        let id = GroupId::fresh(|id| self.contains(id));
        let group = Group::from_draft(id, draft, creator.clone(), Local::now());
        debug!(group = %group.id(), name = %group.name, "created group");

        let index = self.groups.len();
        self.groups.push(group);
        &self.groups[index]
    }

    /// Replaces the group with the same id. The stored id and creation time win over
    /// whatever `updated` carries.
    pub fn update_group(&mut self, mut updated: Group) -> Result<&Group, GroupsError> {
        let index = self.position(updated.id())?;
        if let Some(member) = updated.duplicate_member() {
            return Err(GroupsError::DuplicateMemberId {
                group: updated.id().clone(),
                member: member.clone(),
            });
        }

        updated.keep_identity_of(&self.groups[index]);
        debug!(group = %updated.id(), "updated group");
        self.groups[index] = updated;
        Ok(&self.groups[index])
    }

    pub fn delete_group(&mut self, id: &GroupId) -> Result<Group, GroupsError> {
        let index = self.position(id)?;
        let group = self.groups.remove(index);
        debug!(
            group = %id,
            members = group.members.len(),
            "deleted group"
        );
        Ok(group)
    }

    /// Appends a member with an id that is unused inside the group. No check is made
    /// for people that are already in the group under another id.
    pub fn add_member(
        &mut self,
        group_id: &GroupId,
        draft: MemberDraft,
    ) -> Result<&Member, GroupsError> {
        let group = self.get_mut(group_id)?;
        let id = MemberId::fresh(|id| group.member(id).is_some());
        debug!(group = %group_id, member = %id, "added member");

        let index = group.members.len();
        group.members.push(Member::from_draft(id, draft));
        Ok(&group.members[index])
    }

    /// Removes a member. The last member and the last leader may be removed as well.
    pub fn delete_member(
        &mut self,
        group_id: &GroupId,
        member_id: &MemberId,
    ) -> Result<Member, GroupsError> {
        let group = self.get_mut(group_id)?;
        let index = group
            .members
            .iter()
            .position(|member| &member.id == member_id)
            .ok_or_else(|| GroupsError::MemberNotFound {
                group: group_id.clone(),
                member: member_id.clone(),
            })?;

        let member = group.members.remove(index);
        if !group.has_leader() {
            debug!(group = %group_id, "group has no leader left");
        }
        debug!(group = %group_id, member = %member_id, "deleted member");
        Ok(member)
    }

    /// Overwrites the rating as given; callers keep it within range.
    pub fn update_rating(&mut self, group_id: &GroupId, rating: f32) -> Result<&Group, GroupsError> {
        let group = self.get_mut(group_id)?;
        group.rating = rating;
        debug!(group = %group_id, rating, "updated rating");
        Ok(&*group)
    }

    /// Checks `actor` against the action and applies it.
    pub fn apply(&mut self, actor: &Member, action: GroupAction) -> Result<Applied, GroupsError> {
        if let Err(err) = authorize(actor, &action) {
            warn!(actor = %actor.id, %err, "rejected group action");
            return Err(err);
        }

        let applied = match action {
            GroupAction::Create(draft) => {
                Applied::Created(self.create_group(draft, actor).id().clone())
            }
            GroupAction::Update(group) => Applied::Updated(self.update_group(group)?.id().clone()),
            GroupAction::Delete(id) => Applied::Deleted(self.delete_group(&id)?),
            GroupAction::AddMember(group, draft) => {
                let member = self.add_member(&group, draft)?.id.clone();
                Applied::MemberAdded { group, member }
            }
            GroupAction::DeleteMember(group, member) => {
                let member = self.delete_member(&group, &member)?;
                Applied::MemberDeleted { group, member }
            }
            GroupAction::UpdateRating(group, rating) => {
                self.update_rating(&group, rating)?;
                Applied::Rated(group)
            }
        };
        Ok(applied)
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
