pub mod error;
pub mod group;
pub mod groups;
pub mod ids;
pub mod member;
pub mod nav;
pub mod permissions;
pub mod role;
pub mod seed;
pub mod status;
pub mod view;

pub use error::GroupsError;
pub use group::{Group, GroupDraft};
pub use groups::Groups;
pub use ids::{GroupId, MemberId};
pub use member::{Member, MemberDraft};
pub use permissions::GroupAction;
pub use role::Role;
pub use status::Status;
pub use view::StatusFilter;
