mod cart_id;
mod id;
mod quantity;

pub use self::{cart_id::*, id::*, quantity::*};
use crate::entity::BookId;
use destructure::Destructure;
use vodca::References;

/// A line of a cart. The cart and book references are advisory: carts have
/// no table of their own and removing a book leaves its cart items alone.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct CartItem {
    id: CartItemId,
    cart_id: CartId,
    book_id: BookId,
    quantity: CartItemQuantity,
}

impl CartItem {
    pub fn new(
        id: CartItemId,
        cart_id: CartId,
        book_id: BookId,
        quantity: CartItemQuantity,
    ) -> Self {
        Self {
            id,
            cart_id,
            book_id,
            quantity,
        }
    }
}
