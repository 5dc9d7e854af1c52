use uuid::Uuid;

use kernel::prelude::entity::{Author, DestructAuthor};

use crate::transfer::BookSummaryDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub biography: Option<String>,
    pub books: Vec<BookSummaryDto>,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let DestructAuthor {
            id,
            name,
            biography,
            books,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            biography: biography.map(Into::into),
            books: books.into_iter().map(BookSummaryDto::from).collect(),
        }
    }
}

pub struct GetAuthorDto {
    pub id: Uuid,
}

pub struct CreateAuthorDto {
    pub name: Option<String>,
    pub biography: Option<String>,
}

pub struct DeleteAuthorDto {
    pub id: Uuid,
}
