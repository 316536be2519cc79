use crate::domain::specification::{OwnerOrElevatedSpec, Specification};
use crate::domain::user::value_objects::{Role, UserId};

/// Only an elevated principal may delete an account.
pub struct CanDeleteUserSpec {
    actor_role: Role,
}

impl CanDeleteUserSpec {
    pub fn new(actor_role: Role) -> Self {
        Self { actor_role }
    }
}

impl Specification for CanDeleteUserSpec {
    fn is_satisfied(&self) -> bool {
        self.actor_role.is_elevated()
    }
}

/// Granting the elevated role at sign-up requires an elevated requester.
pub struct CanAssignRoleSpec {
    requester_role: Option<Role>,
    requested: Role,
}

impl CanAssignRoleSpec {
    pub fn new(requester_role: Option<Role>, requested: Role) -> Self {
        Self {
            requester_role,
            requested,
        }
    }
}

impl Specification for CanAssignRoleSpec {
    fn is_satisfied(&self) -> bool {
        !self.requested.is_elevated() || self.requester_role.is_some_and(|r| r.is_elevated())
    }
}

/// A profile may be edited by its owner or by an elevated principal.
pub struct CanUpdateUserSpec {
    target: UserId,
    actor_id: UserId,
    actor_role: Role,
}

impl CanUpdateUserSpec {
    pub fn new(target: UserId, actor_id: UserId, actor_role: Role) -> Self {
        Self {
            target,
            actor_id,
            actor_role,
        }
    }
}

impl Specification for CanUpdateUserSpec {
    fn is_satisfied(&self) -> bool {
        OwnerOrElevatedSpec::new(self.target == self.actor_id, self.actor_role.is_elevated())
            .is_satisfied()
    }
}
