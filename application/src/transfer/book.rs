use uuid::Uuid;

use kernel::prelude::entity::{Book, BookSummary, DestructBook, DestructBookSummary};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author_id,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author_id: author_id.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookSummaryDto {
    pub id: Uuid,
    pub title: String,
}

impl From<BookSummary> for BookSummaryDto {
    fn from(value: BookSummary) -> Self {
        let DestructBookSummary { id, title } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: Uuid,
}

pub struct CreateBookDto {
    pub title: Option<String>,
    pub author_id: Option<Uuid>,
}

pub struct DeleteBookDto {
    pub id: Uuid,
}
