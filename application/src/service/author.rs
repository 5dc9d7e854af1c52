use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::interface::update::{
    AuthorModifier, BookModifier, DependOnAuthorModifier, DependOnBookModifier,
};
use kernel::prelude::entity::{Admin, Author, AuthorBiography, AuthorId, AuthorName};
use kernel::{KernelError, PublicMessage};

use crate::transfer::{AuthorDto, CreateAuthorDto, DeleteAuthorDto, GetAuthorDto};

#[async_trait::async_trait]
pub trait GetAuthorService: 'static + Sync + Send + DependOnAuthorQuery {
    /// Every author, unpaginated, with book titles expanded.
    async fn get_all_authors(&self) -> error_stack::Result<Vec<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let authors = self.author_query().find_all(&mut connection).await;
        let authors = connection.conclude(authors).await?;

        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }

    async fn get_author(
        &self,
        dto: GetAuthorDto,
    ) -> error_stack::Result<Option<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let author = self.author_query().find_by_id(&mut connection, &id).await;
        let author = connection.conclude(author).await?;

        Ok(author.map(AuthorDto::from))
    }
}

impl<T> GetAuthorService for T where T: DependOnAuthorQuery {}

#[async_trait::async_trait]
pub trait CreateAuthorService: 'static + Sync + Send + DependOnAuthorModifier {
    async fn create_author(
        &self,
        admin: &Admin,
        dto: CreateAuthorDto,
    ) -> error_stack::Result<AuthorDto, KernelError> {
        let name = AuthorName::required(dto.name)?;
        let author = Author::new(
            AuthorId::new(Uuid::new_v4()),
            name,
            dto.biography.map(AuthorBiography::new),
            Vec::new(),
        );

        let mut connection = self.database_connection().transact().await?;
        let created = self.author_modifier().create(&mut connection, &author).await;
        connection.conclude(created).await?;

        tracing::info!(
            author_id = %author.id().as_ref(),
            admin_id = %admin.id().as_ref(),
            "author created"
        );
        Ok(AuthorDto::from(author))
    }
}

impl<T> CreateAuthorService for T where T: DependOnAuthorModifier {}

#[async_trait::async_trait]
pub trait DeleteAuthorService:
    'static + Sync + Send + DependOnAuthorModifier + DependOnBookModifier
{
    /// Removes the author and every book referencing it in one transaction.
    ///
    /// Not found and failures both roll back, so the store is left exactly as
    /// it was unless the whole cascade commits. Every failure other than not
    /// found, including opening the transaction, surfaces as `Internal`.
    async fn delete_author(
        &self,
        admin: &Admin,
        dto: DeleteAuthorDto,
    ) -> error_stack::Result<(), KernelError> {
        let id = AuthorId::new(dto.id);

        let deleted_books = async {
            let mut connection = self.database_connection().transact().await?;
            let cascade = async {
                if !self.author_modifier().delete(&mut connection, &id).await? {
                    return Err(Report::new(KernelError::NotFound)
                        .attach_printable(PublicMessage::new("Author not found")));
                }
                self.book_modifier()
                    .delete_by_author_id(&mut connection, &id)
                    .await
            }
            .await;
            connection.conclude(cascade).await
        }
        .await
        .map_err(|report| match report.current_context() {
            KernelError::NotFound => report,
            _ => report
                .change_context(KernelError::Internal)
                .attach_printable(PublicMessage::new(
                    "Failed to delete author and related books",
                )),
        })?;

        tracing::info!(
            author_id = %id.as_ref(),
            admin_id = %admin.id().as_ref(),
            deleted_books,
            "author deleted"
        );
        Ok(())
    }
}

impl<T> DeleteAuthorService for T where T: DependOnAuthorModifier + DependOnBookModifier {}
