mod id;
mod is_admin;

pub use self::{id::*, is_admin::*};
use crate::{KernelError, PublicMessage};
use error_stack::Report;
use vodca::References;

/// Identity resolved from a request credential.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct Caller {
    id: CallerId,
    is_admin: IsAdmin,
}

impl Caller {
    pub fn new(id: CallerId, is_admin: IsAdmin) -> Self {
        Self { id, is_admin }
    }

    /// The single admin predicate. Every mutating operation on authors and
    /// books takes the returned [`Admin`], so it cannot run without this check.
    pub fn admin(self) -> error_stack::Result<Admin, KernelError> {
        if *self.is_admin.as_ref() {
            Ok(Admin(self.id))
        } else {
            Err(Report::new(KernelError::Unauthorized)
                .attach_printable(PublicMessage::new("Unauthorized access"))
                .attach_printable(format!("caller {:?} is not an admin", self.id)))
        }
    }
}

/// Proof that the caller holds the admin capability.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Admin(CallerId);

impl Admin {
    pub fn id(&self) -> &CallerId {
        &self.0
    }
}
