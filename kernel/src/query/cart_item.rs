use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{CartId, CartItem, CartItemId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartItemQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError>;
    async fn find_by_cart_id(
        &self,
        con: &mut Self::Transaction,
        cart_id: &CartId,
    ) -> error_stack::Result<Vec<CartItem>, KernelError>;
}

pub trait DependOnCartItemQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CartItemQuery: CartItemQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn cart_item_query(&self) -> &Self::CartItemQuery;
}
