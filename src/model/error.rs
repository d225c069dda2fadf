use thiserror::Error;

use super::{
    ids::{GroupId, MemberId},
    permissions::ActionKind,
    role::Role,
};

/// Why a change to the group collection was not applied.
///
/// The collection is left exactly as it was whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupsError {
    #[error("group {0} not found")]
    GroupNotFound(GroupId),
    #[error("member {member} not found in group {group}")]
    MemberNotFound { group: GroupId, member: MemberId },
    #[error("group id {0} is already taken")]
    DuplicateGroupId(GroupId),
    #[error("member id {member} appears twice in group {group}")]
    DuplicateMemberId { group: GroupId, member: MemberId },
    #[error("a {role} may not {action}")]
    Forbidden { role: Role, action: ActionKind },
}
