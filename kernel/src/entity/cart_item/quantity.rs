use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::{KernelError, PublicMessage};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CartItemQuantity(i32);

impl CartItemQuantity {
    pub fn new(quantity: impl Into<i32>) -> Self {
        Self(quantity.into())
    }

    pub fn positive(quantity: i32) -> error_stack::Result<Self, KernelError> {
        if quantity < 1 {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable(PublicMessage::new("Quantity must be at least 1")));
        }
        Ok(Self(quantity))
    }
}

impl Default for CartItemQuantity {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod test {
    use super::CartItemQuantity;
    use crate::KernelError;

    #[test]
    fn rejects_non_positive_quantity() {
        assert_eq!(
            CartItemQuantity::positive(3).unwrap(),
            CartItemQuantity::new(3)
        );
        for quantity in [0, -2] {
            let report = CartItemQuantity::positive(quantity).unwrap_err();
            assert!(matches!(report.current_context(), KernelError::Invalid));
        }
    }
}
