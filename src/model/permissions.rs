//! Role checks for changes to the group collection.
//!
//! The shell asks [`is_allowed`] to decide which controls to draw, and
//! [`Groups::apply`](super::Groups::apply) runs [`authorize`] before every change,
//! so a hidden button is not the only thing standing in the way.

use std::fmt::Display;

use super::{
    error::GroupsError,
    group::{Group, GroupDraft},
    ids::{GroupId, MemberId},
    member::{Member, MemberDraft},
    role::Role,
};

/// A change requested by the user, carrying everything needed to apply it.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupAction {
    Create(GroupDraft),
    Update(Group),
    Delete(GroupId),
    AddMember(GroupId, MemberDraft),
    DeleteMember(GroupId, MemberId),
    UpdateRating(GroupId, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Create,
    Update,
    Delete,
    AddMember,
    DeleteMember,
    Rate,
}

impl GroupAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            GroupAction::Create(_) => ActionKind::Create,
            GroupAction::Update(_) => ActionKind::Update,
            GroupAction::Delete(_) => ActionKind::Delete,
            GroupAction::AddMember(..) => ActionKind::AddMember,
            GroupAction::DeleteMember(..) => ActionKind::DeleteMember,
            GroupAction::UpdateRating(..) => ActionKind::Rate,
        }
    }
}

impl ActionKind {
    pub fn required_role(&self) -> Role {
        match self {
            ActionKind::Create | ActionKind::Rate => Role::Member,
            ActionKind::Update | ActionKind::AddMember | ActionKind::DeleteMember => Role::Leader,
            ActionKind::Delete => Role::Admin,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Create => "create groups",
            ActionKind::Update => "edit groups",
            ActionKind::Delete => "delete groups",
            ActionKind::AddMember => "add members",
            ActionKind::DeleteMember => "remove members",
            ActionKind::Rate => "rate groups",
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_allowed(actor: &Member, kind: ActionKind) -> bool {
    actor.role.includes(&kind.required_role())
}

pub fn authorize(actor: &Member, action: &GroupAction) -> Result<(), GroupsError> {
    let kind = action.kind();
    if is_allowed(actor, kind) {
        Ok(())
    } else {
        Err(GroupsError::Forbidden {
            role: actor.role,
            action: kind,
        })
    }
}
