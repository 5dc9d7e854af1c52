use std::fmt::{Display, Formatter};

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Concurrency,
    Timeout,
    Invalid,
    NotFound,
    Unauthorized,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Invalid => write!(f, "Invalid request"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Unauthorized => write!(f, "Unauthorized access"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Text that may be shown to the caller.
///
/// Attached to a report with `attach_printable`; the most recently attached
/// message wins. Anything else carried by a report is diagnostic only.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PublicMessage(String);

impl PublicMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn missing_field(field: &str) -> Self {
        Self(format!("Missing required field {field}"))
    }
}

impl Display for PublicMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PublicMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
