/// A yes/no business rule evaluated against already loaded state.
pub trait Specification {
    fn is_satisfied(&self) -> bool;
}

/// The acting principal owns the resource or holds the elevated role.
pub struct OwnerOrElevatedSpec {
    is_owner: bool,
    is_elevated: bool,
}

impl OwnerOrElevatedSpec {
    pub fn new(is_owner: bool, is_elevated: bool) -> Self {
        Self {
            is_owner,
            is_elevated,
        }
    }
}

impl Specification for OwnerOrElevatedSpec {
    fn is_satisfied(&self) -> bool {
        self.is_owner || self.is_elevated
    }
}
