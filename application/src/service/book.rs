use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Admin, AuthorId, Book, BookId, BookTitle};
use kernel::{KernelError, PublicMessage};

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self.book_query().find_all(&mut connection).await;
        let books = connection.conclude(books).await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await;
        let book = connection.conclude(book).await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnAuthorQuery + DependOnBookModifier
{
    /// The author must exist when the book is written; the check and the
    /// insert share a transaction.
    async fn create_book(
        &self,
        admin: &Admin,
        dto: CreateBookDto,
    ) -> error_stack::Result<BookDto, KernelError> {
        let title = BookTitle::required(dto.title)?;
        let author_id = dto.author_id.map(AuthorId::new).ok_or_else(|| {
            Report::new(KernelError::Invalid).attach_printable(PublicMessage::missing_field("author"))
        })?;
        let book = Book::new(BookId::new(Uuid::new_v4()), title, author_id);

        let mut connection = self.database_connection().transact().await?;
        let created = async {
            let author = self
                .author_query()
                .find_by_id(&mut connection, book.author_id())
                .await?;
            if author.is_none() {
                return Err(Report::new(KernelError::Invalid)
                    .attach_printable(PublicMessage::new("Author does not exist")));
            }
            self.book_modifier().create(&mut connection, &book).await
        }
        .await;
        connection.conclude(created).await?;

        tracing::info!(
            book_id = %book.id().as_ref(),
            admin_id = %admin.id().as_ref(),
            "book created"
        );
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnAuthorQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(
        &self,
        admin: &Admin,
        dto: DeleteBookDto,
    ) -> error_stack::Result<(), KernelError> {
        let id = BookId::new(dto.id);
        let mut connection = self.database_connection().transact().await?;

        let deleted = match self.book_modifier().delete(&mut connection, &id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(Report::new(KernelError::NotFound)
                .attach_printable(PublicMessage::new("Book not found"))),
            Err(report) => Err(report),
        };
        connection.conclude(deleted).await?;

        tracing::info!(
            book_id = %id.as_ref(),
            admin_id = %admin.id().as_ref(),
            "book deleted"
        );
        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}
