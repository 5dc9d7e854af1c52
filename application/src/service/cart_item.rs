use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, CartItemQuery, DependOnBookQuery, DependOnCartItemQuery};
use kernel::interface::update::{CartItemModifier, DependOnCartItemModifier};
use kernel::prelude::entity::{BookId, CartId, CartItem, CartItemId, CartItemQuantity};
use kernel::{KernelError, PublicMessage};

use crate::transfer::{
    AddCartItemDto, CartItemDto, GetCartItemsDto, RemoveCartItemDto, UpdateCartItemDto,
};

fn item_not_found() -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(PublicMessage::new("Cart item not found"))
}

#[async_trait::async_trait]
pub trait GetCartItemService: 'static + Sync + Send + DependOnCartItemQuery {
    async fn get_cart_items(
        &self,
        dto: GetCartItemsDto,
    ) -> error_stack::Result<Vec<CartItemDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let cart_id = CartId::new(dto.cart_id);
        let items = self
            .cart_item_query()
            .find_by_cart_id(&mut connection, &cart_id)
            .await;
        let items = connection.conclude(items).await?;

        Ok(items.into_iter().map(CartItemDto::from).collect())
    }
}

impl<T> GetCartItemService for T where T: DependOnCartItemQuery {}

#[async_trait::async_trait]
pub trait AddCartItemService:
    'static + Sync + Send + DependOnBookQuery + DependOnCartItemModifier
{
    async fn add_cart_item(
        &self,
        dto: AddCartItemDto,
    ) -> error_stack::Result<CartItemDto, KernelError> {
        let book_id = dto.book_id.map(BookId::new).ok_or_else(|| {
            Report::new(KernelError::Invalid).attach_printable(PublicMessage::missing_field("book"))
        })?;
        let quantity = match dto.quantity {
            Some(quantity) => CartItemQuantity::positive(quantity)?,
            None => CartItemQuantity::default(),
        };
        let item = CartItem::new(
            CartItemId::new(Uuid::new_v4()),
            CartId::new(dto.cart_id),
            book_id,
            quantity,
        );

        let mut connection = self.database_connection().transact().await?;
        let created = async {
            let book = self
                .book_query()
                .find_by_id(&mut connection, item.book_id())
                .await?;
            if book.is_none() {
                return Err(Report::new(KernelError::Invalid)
                    .attach_printable(PublicMessage::new("Book does not exist")));
            }
            self.cart_item_modifier().create(&mut connection, &item).await
        }
        .await;
        connection.conclude(created).await?;

        tracing::debug!(cart_item_id = %item.id().as_ref(), "cart item added");
        Ok(CartItemDto::from(item))
    }
}

impl<T> AddCartItemService for T where T: DependOnBookQuery + DependOnCartItemModifier {}

#[async_trait::async_trait]
pub trait UpdateCartItemService:
    'static + Sync + Send + DependOnCartItemQuery + DependOnCartItemModifier
{
    async fn update_cart_item(
        &self,
        dto: UpdateCartItemDto,
    ) -> error_stack::Result<(), KernelError> {
        let quantity = dto.quantity.ok_or_else(|| {
            Report::new(KernelError::Invalid)
                .attach_printable(PublicMessage::missing_field("quantity"))
        })?;
        let quantity = CartItemQuantity::positive(quantity)?;
        let cart_id = CartId::new(dto.cart_id);
        let id = CartItemId::new(dto.id);

        let mut connection = self.database_connection().transact().await?;
        let updated = async {
            let item = self
                .cart_item_query()
                .find_by_id(&mut connection, &id)
                .await?
                .filter(|item| item.cart_id() == &cart_id)
                .ok_or_else(item_not_found)?;
            let item = item.reconstruct(|item| item.quantity = quantity.clone());
            self.cart_item_modifier().update(&mut connection, &item).await
        }
        .await;
        connection.conclude(updated).await
    }
}

impl<T> UpdateCartItemService for T where T: DependOnCartItemQuery + DependOnCartItemModifier {}

#[async_trait::async_trait]
pub trait RemoveCartItemService:
    'static + Sync + Send + DependOnCartItemQuery + DependOnCartItemModifier
{
    async fn remove_cart_item(
        &self,
        dto: RemoveCartItemDto,
    ) -> error_stack::Result<(), KernelError> {
        let cart_id = CartId::new(dto.cart_id);
        let id = CartItemId::new(dto.id);

        let mut connection = self.database_connection().transact().await?;
        let removed = async {
            let owned = self
                .cart_item_query()
                .find_by_id(&mut connection, &id)
                .await?
                .is_some_and(|item| item.cart_id() == &cart_id);
            if !owned || !self.cart_item_modifier().delete(&mut connection, &id).await? {
                return Err(item_not_found());
            }
            Ok::<_, Report<KernelError>>(())
        }
        .await;
        connection.conclude(removed).await
    }
}

impl<T> RemoveCartItemService for T where T: DependOnCartItemQuery + DependOnCartItemModifier {}
