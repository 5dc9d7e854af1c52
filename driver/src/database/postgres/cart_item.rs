use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{CartItemQuery, DependOnCartItemQuery};
use kernel::interface::update::{CartItemModifier, DependOnCartItemModifier};
use kernel::prelude::entity::{BookId, CartId, CartItem, CartItemId, CartItemQuantity};
use kernel::KernelError;

use crate::database::postgres::{PostgresConnection, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresCartItemRepository;

#[async_trait::async_trait]
impl CartItemQuery for PostgresCartItemRepository {
    type Transaction = PostgresConnection;

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError> {
        PgCartItemInternal::find_by_id(con, id).await
    }

    async fn find_by_cart_id(
        &self,
        con: &mut PostgresConnection,
        cart_id: &CartId,
    ) -> error_stack::Result<Vec<CartItem>, KernelError> {
        PgCartItemInternal::find_by_cart_id(con, cart_id).await
    }
}

#[async_trait::async_trait]
impl CartItemModifier for PostgresCartItemRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError> {
        PgCartItemInternal::create(con, item).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError> {
        PgCartItemInternal::update(con, item).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        item_id: &CartItemId,
    ) -> error_stack::Result<bool, KernelError> {
        PgCartItemInternal::delete(con, item_id).await
    }
}

impl DependOnCartItemQuery for PostgresDatabase {
    type CartItemQuery = PostgresCartItemRepository;
    fn cart_item_query(&self) -> &Self::CartItemQuery {
        &PostgresCartItemRepository
    }
}

impl DependOnCartItemModifier for PostgresDatabase {
    type CartItemModifier = PostgresCartItemRepository;
    fn cart_item_modifier(&self) -> &Self::CartItemModifier {
        &PostgresCartItemRepository
    }
}

#[derive(sqlx::FromRow)]
struct CartItemRow {
    id: Uuid,
    cart_id: Uuid,
    book_id: Uuid,
    quantity: i32,
}

impl From<CartItemRow> for CartItem {
    fn from(value: CartItemRow) -> Self {
        CartItem::new(
            CartItemId::new(value.id),
            CartId::new(value.cart_id),
            BookId::new(value.book_id),
            CartItemQuantity::new(value.quantity),
        )
    }
}

pub(in crate::database) struct PgCartItemInternal;

impl PgCartItemInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError> {
        let row = sqlx::query_as::<_, CartItemRow>(
            // language=postgresql
            r#"
            SELECT id, cart_id, book_id, quantity
            FROM cart_items
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(CartItem::from))
    }

    async fn find_by_cart_id(
        con: &mut PgConnection,
        cart_id: &CartId,
    ) -> error_stack::Result<Vec<CartItem>, KernelError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            // language=postgresql
            r#"
            SELECT id, cart_id, book_id, quantity
            FROM cart_items
            WHERE cart_id = $1
            "#,
        )
        .bind(cart_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(CartItem::from).collect())
    }

    async fn create(con: &mut PgConnection, item: &CartItem) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO cart_items (id, cart_id, book_id, quantity)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id().as_ref())
        .bind(item.cart_id().as_ref())
        .bind(item.book_id().as_ref())
        .bind(item.quantity().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, item: &CartItem) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE cart_items
            SET quantity = $2
            WHERE id = $1
            "#,
        )
        .bind(item.id().as_ref())
        .bind(item.quantity().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        item_id: &CartItemId,
    ) -> error_stack::Result<bool, KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM cart_items
            WHERE id = $1
            "#,
        )
        .bind(item_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }
}
