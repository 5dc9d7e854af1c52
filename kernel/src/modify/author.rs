use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Author, AuthorId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AuthorModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Persists the author row. Embedded book summaries are ignored.
    async fn create(
        &self,
        con: &mut Self::Transaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError>;
    /// Returns whether a row was removed.
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnAuthorModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type AuthorModifier: AuthorModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn author_modifier(&self) -> &Self::AuthorModifier;
}
