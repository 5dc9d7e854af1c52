use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AuthorBiography(String);

impl AuthorBiography {
    pub fn new(biography: impl Into<String>) -> Self {
        Self(biography.into())
    }
}
