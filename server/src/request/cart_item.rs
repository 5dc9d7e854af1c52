use crate::controller::Intake;
use application::transfer::{
    AddCartItemDto, GetCartItemsDto, RemoveCartItemDto, UpdateCartItemDto,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug)]
pub struct GetCartItemsRequest {
    cart_id: Uuid,
}

impl GetCartItemsRequest {
    pub fn new(cart_id: Uuid) -> Self {
        Self { cart_id }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    book: Option<Uuid>,
    quantity: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartItemRequest {
    quantity: Option<i32>,
}

#[derive(Debug)]
pub struct RemoveCartItemRequest {
    cart_id: Uuid,
    id: Uuid,
}

impl RemoveCartItemRequest {
    pub fn new(cart_id: Uuid, id: Uuid) -> Self {
        Self { cart_id, id }
    }
}

pub struct CartItemTransformer;

impl Intake<GetCartItemsRequest> for CartItemTransformer {
    type To = GetCartItemsDto;
    fn emit(&self, input: GetCartItemsRequest) -> Self::To {
        GetCartItemsDto {
            cart_id: input.cart_id,
        }
    }
}

impl Intake<(Uuid, AddCartItemRequest)> for CartItemTransformer {
    type To = AddCartItemDto;
    fn emit(&self, (cart_id, input): (Uuid, AddCartItemRequest)) -> Self::To {
        AddCartItemDto {
            cart_id,
            book_id: input.book,
            quantity: input.quantity,
        }
    }
}

impl Intake<((Uuid, Uuid), UpdateCartItemRequest)> for CartItemTransformer {
    type To = UpdateCartItemDto;
    fn emit(&self, input: ((Uuid, Uuid), UpdateCartItemRequest)) -> Self::To {
        let ((cart_id, id), input) = input;
        UpdateCartItemDto {
            cart_id,
            id,
            quantity: input.quantity,
        }
    }
}

impl Intake<RemoveCartItemRequest> for CartItemTransformer {
    type To = RemoveCartItemDto;
    fn emit(&self, input: RemoveCartItemRequest) -> Self::To {
        RemoveCartItemDto {
            cart_id: input.cart_id,
            id: input.id,
        }
    }
}
