use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct IsAdmin(bool);

impl IsAdmin {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}
