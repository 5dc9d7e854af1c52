use uuid::Uuid;

use kernel::prelude::entity::{CartItem, DestructCartItem};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CartItemDto {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub book_id: Uuid,
    pub quantity: i32,
}

impl From<CartItem> for CartItemDto {
    fn from(value: CartItem) -> Self {
        let DestructCartItem {
            id,
            cart_id,
            book_id,
            quantity,
        } = value.into_destruct();
        Self {
            id: id.into(),
            cart_id: cart_id.into(),
            book_id: book_id.into(),
            quantity: quantity.into(),
        }
    }
}

pub struct GetCartItemsDto {
    pub cart_id: Uuid,
}

pub struct AddCartItemDto {
    pub cart_id: Uuid,
    pub book_id: Option<Uuid>,
    pub quantity: Option<i32>,
}

pub struct UpdateCartItemDto {
    pub cart_id: Uuid,
    pub id: Uuid,
    pub quantity: Option<i32>,
}

pub struct RemoveCartItemDto {
    pub cart_id: Uuid,
    pub id: Uuid,
}
