use crate::domain::user::{Role, User, UserId};

/// The acting principal, as resolved by the authentication collaborator.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }

    pub fn is_elevated(&self) -> bool {
        self.role.is_elevated()
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.name.clone(), user.role)
    }
}
