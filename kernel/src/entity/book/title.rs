use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::{KernelError, PublicMessage};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn required(title: Option<String>) -> error_stack::Result<Self, KernelError> {
        match title {
            Some(title) if !title.trim().is_empty() => Ok(Self(title)),
            _ => Err(Report::new(KernelError::Invalid)
                .attach_printable(PublicMessage::missing_field("title"))),
        }
    }
}
