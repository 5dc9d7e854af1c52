use crate::controller::Exhaust;
use application::transfer::CartItemDto;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    id: Uuid,
    cart: Uuid,
    book: Uuid,
    quantity: i32,
}

impl From<CartItemDto> for CartItemResponse {
    fn from(value: CartItemDto) -> Self {
        Self {
            id: value.id,
            cart: value.cart_id,
            book: value.book_id,
            quantity: value.quantity,
        }
    }
}

pub struct CartItemPresenter;

impl Exhaust<Vec<CartItemDto>> for CartItemPresenter {
    type To = Json<Vec<CartItemResponse>>;
    fn emit(&self, input: Vec<CartItemDto>) -> Self::To {
        Json(input.into_iter().map(CartItemResponse::from).collect())
    }
}

impl Exhaust<CartItemDto> for CartItemPresenter {
    type To = (StatusCode, Json<CartItemResponse>);
    fn emit(&self, input: CartItemDto) -> Self::To {
        (StatusCode::CREATED, Json(CartItemResponse::from(input)))
    }
}

impl Exhaust<()> for CartItemPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

#[cfg(test)]
mod test {
    use application::transfer::CartItemDto;
    use uuid::Uuid;

    use super::CartItemResponse;

    #[test]
    fn cart_item_shape() {
        let dto = CartItemDto {
            id: Uuid::new_v4(),
            cart_id: Uuid::new_v4(),
            book_id: Uuid::new_v4(),
            quantity: 2,
        };
        let expected = serde_json::json!({
            "id": dto.id,
            "cart": dto.cart_id,
            "book": dto.book_id,
            "quantity": 2,
        });
        let response = CartItemResponse::from(dto);
        assert_eq!(serde_json::to_value(&response).unwrap(), expected);
    }
}
