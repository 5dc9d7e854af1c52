mod id;
mod title;

pub use self::{id::*, title::*};
use crate::entity::AuthorId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author_id: AuthorId,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author_id: AuthorId) -> Self {
        Self {
            id,
            title,
            author_id,
        }
    }
}

/// The part of a book embedded in its author's record.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookSummary {
    id: BookId,
    title: BookTitle,
}

impl BookSummary {
    pub fn new(id: BookId, title: BookTitle) -> Self {
        Self { id, title }
    }
}

impl From<Book> for BookSummary {
    fn from(value: Book) -> Self {
        let DestructBook { id, title, .. } = value.into_destruct();
        Self { id, title }
    }
}
