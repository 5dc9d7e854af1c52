use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{CartItem, CartItemId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartItemModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError>;
    /// Returns whether a row was removed.
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        item_id: &CartItemId,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnCartItemModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type CartItemModifier: CartItemModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn cart_item_modifier(&self) -> &Self::CartItemModifier;
}
