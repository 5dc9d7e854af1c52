mod biography;
mod id;
mod name;

pub use self::{biography::*, id::*, name::*};
use crate::entity::BookSummary;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    biography: Option<AuthorBiography>,
    books: Vec<BookSummary>,
}

impl Author {
    pub fn new(
        id: AuthorId,
        name: AuthorName,
        biography: Option<AuthorBiography>,
        books: Vec<BookSummary>,
    ) -> Self {
        Self {
            id,
            name,
            biography,
            books,
        }
    }
}
