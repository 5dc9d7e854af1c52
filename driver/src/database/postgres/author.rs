use futures_util::TryStreamExt;
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{
    Author, AuthorBiography, AuthorId, AuthorName, BookId, BookSummary, BookTitle,
};
use kernel::KernelError;

use crate::database::postgres::{PostgresConnection, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for PostgresAuthorRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl AuthorModifier for PostgresAuthorRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::create(con, author).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError> {
        PgAuthorInternal::delete(con, author_id).await
    }
}

impl DependOnAuthorQuery for PostgresDatabase {
    type AuthorQuery = PostgresAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &PostgresAuthorRepository
    }
}

impl DependOnAuthorModifier for PostgresDatabase {
    type AuthorModifier = PostgresAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &PostgresAuthorRepository
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    name: String,
    biography: Option<String>,
    books: Json<Vec<BookSummaryRow>>,
}

#[derive(Deserialize)]
struct BookSummaryRow {
    id: Uuid,
    title: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        let books = row
            .books
            .0
            .into_iter()
            .map(|book| BookSummary::new(BookId::new(book.id), BookTitle::new(book.title)))
            .collect();
        Author::new(
            AuthorId::new(row.id),
            AuthorName::new(row.name),
            row.biography.map(AuthorBiography::new),
            books,
        )
    }
}

pub(in crate::database) struct PgAuthorInternal;

impl PgAuthorInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Author>, KernelError> {
        let mut rows = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT
                authors.id,
                authors.name,
                authors.biography,
                COALESCE(
                    json_agg(json_build_object('id', books.id, 'title', books.title))
                        FILTER (WHERE books.id IS NOT NULL),
                    '[]'
                ) AS books
            FROM authors
            LEFT JOIN books ON books.author_id = authors.id
            GROUP BY authors.id
            "#,
        )
        .fetch(con);

        let mut authors = Vec::new();
        while let Some(row) = rows.try_next().await.convert_error()? {
            authors.push(Author::from(row));
        }
        Ok(authors)
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT
                authors.id,
                authors.name,
                authors.biography,
                COALESCE(
                    json_agg(json_build_object('id', books.id, 'title', books.title))
                        FILTER (WHERE books.id IS NOT NULL),
                    '[]'
                ) AS books
            FROM authors
            LEFT JOIN books ON books.author_id = authors.id
            WHERE authors.id = $1
            GROUP BY authors.id
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Author::from))
    }

    async fn create(con: &mut PgConnection, author: &Author) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO authors (id, name, biography)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(author.id().as_ref())
        .bind(author.name().as_ref())
        .bind(author.biography().clone().map(String::from))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM authors
            WHERE id = $1
            "#,
        )
        .bind(author_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }
}
