use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::{KernelError, PublicMessage};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Accepts a name supplied by a client. Absent or blank names are rejected.
    pub fn required(name: Option<String>) -> error_stack::Result<Self, KernelError> {
        match name {
            Some(name) if !name.trim().is_empty() => Ok(Self(name)),
            _ => Err(Report::new(KernelError::Invalid)
                .attach_printable(PublicMessage::missing_field("name"))),
        }
    }
}
