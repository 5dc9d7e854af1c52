//! In-memory store used by the service tests.
//!
//! A transaction works on a private copy of the committed snapshot and
//! publishes it on commit, so roll back and drop both discard its writes.

use std::sync::{Arc, Mutex};

use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    AuthorQuery, BookQuery, CartItemQuery, DependOnAuthorQuery, DependOnBookQuery,
    DependOnCartItemQuery,
};
use kernel::interface::update::{
    AuthorModifier, BookModifier, CartItemModifier, DependOnAuthorModifier,
    DependOnBookModifier, DependOnCartItemModifier,
};
use kernel::prelude::entity::{
    Author, AuthorId, Book, BookId, BookSummary, CartId, CartItem, CartItemId, DestructAuthor,
};
use kernel::KernelError;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Snapshot {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub cart_items: Vec<CartItem>,
}

#[derive(Default)]
pub struct MemoryDatabase {
    committed: Arc<Mutex<Snapshot>>,
    cascade_failure: Option<fn() -> KernelError>,
    transact_failure: Option<fn() -> KernelError>,
}

impl MemoryDatabase {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            committed: Arc::new(Mutex::new(snapshot)),
            cascade_failure: None,
            transact_failure: None,
        }
    }

    /// Every `delete_by_author_id` fails after the author row is gone.
    pub fn failing_cascade(snapshot: Snapshot) -> Self {
        Self::failing_cascade_with(snapshot, || KernelError::Internal)
    }

    pub fn failing_cascade_with(snapshot: Snapshot, kind: fn() -> KernelError) -> Self {
        Self {
            cascade_failure: Some(kind),
            ..Self::new(snapshot)
        }
    }

    /// No transaction can be opened.
    pub fn unavailable(snapshot: Snapshot, kind: fn() -> KernelError) -> Self {
        Self {
            transact_failure: Some(kind),
            ..Self::new(snapshot)
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.committed.lock().unwrap().clone()
    }
}

pub struct MemoryTransaction {
    committed: Arc<Mutex<Snapshot>>,
    working: Snapshot,
    cascade_failure: Option<fn() -> KernelError>,
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Transaction = MemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        if let Some(kind) = self.transact_failure {
            return Err(Report::new(kind()).attach_printable("injected failure"));
        }
        Ok(MemoryTransaction {
            committed: Arc::clone(&self.committed),
            working: self.snapshot(),
            cascade_failure: self.cascade_failure,
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        *self.committed.lock().unwrap() = self.working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

pub struct MemoryRepository;

fn with_books(author: &Author, books: &[Book]) -> Author {
    let DestructAuthor {
        id,
        name,
        biography,
        ..
    } = author.clone().into_destruct();
    let books = books
        .iter()
        .filter(|book| book.author_id() == &id)
        .cloned()
        .map(BookSummary::from)
        .collect();
    Author::new(id, name, biography, books)
}

#[async_trait::async_trait]
impl AuthorQuery for MemoryRepository {
    type Transaction = MemoryTransaction;

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        let state = &con.working;
        Ok(state
            .authors
            .iter()
            .map(|author| with_books(author, &state.books))
            .collect())
    }

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let state = &con.working;
        Ok(state
            .authors
            .iter()
            .find(|author| author.id() == id)
            .map(|author| with_books(author, &state.books)))
    }
}

#[async_trait::async_trait]
impl AuthorModifier for MemoryRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        let stored = author.clone().reconstruct(|author| author.books.clear());
        con.working.authors.push(stored);
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError> {
        let before = con.working.authors.len();
        con.working.authors.retain(|author| author.id() != author_id);
        Ok(con.working.authors.len() != before)
    }
}

#[async_trait::async_trait]
impl BookQuery for MemoryRepository {
    type Transaction = MemoryTransaction;

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con.working.books.clone())
    }

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.working.books.iter().find(|book| book.id() == id).cloned())
    }
}

#[async_trait::async_trait]
impl BookModifier for MemoryRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        con.working.books.push(book.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<bool, KernelError> {
        let before = con.working.books.len();
        con.working.books.retain(|book| book.id() != book_id);
        Ok(con.working.books.len() != before)
    }

    async fn delete_by_author_id(
        &self,
        con: &mut MemoryTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<u64, KernelError> {
        if let Some(kind) = con.cascade_failure {
            return Err(Report::new(kind()).attach_printable("injected failure"));
        }
        let before = con.working.books.len();
        con.working.books.retain(|book| book.author_id() != author_id);
        Ok((before - con.working.books.len()) as u64)
    }
}

#[async_trait::async_trait]
impl CartItemQuery for MemoryRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError> {
        Ok(con
            .working
            .cart_items
            .iter()
            .find(|item| item.id() == id)
            .cloned())
    }

    async fn find_by_cart_id(
        &self,
        con: &mut MemoryTransaction,
        cart_id: &CartId,
    ) -> error_stack::Result<Vec<CartItem>, KernelError> {
        Ok(con
            .working
            .cart_items
            .iter()
            .filter(|item| item.cart_id() == cart_id)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl CartItemModifier for MemoryRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError> {
        con.working.cart_items.push(item.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError> {
        if let Some(stored) = con
            .working
            .cart_items
            .iter_mut()
            .find(|stored| stored.id() == item.id())
        {
            *stored = item.clone();
        }
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        item_id: &CartItemId,
    ) -> error_stack::Result<bool, KernelError> {
        let before = con.working.cart_items.len();
        con.working.cart_items.retain(|item| item.id() != item_id);
        Ok(con.working.cart_items.len() != before)
    }
}

impl DependOnAuthorQuery for MemoryDatabase {
    type AuthorQuery = MemoryRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &MemoryRepository
    }
}

impl DependOnAuthorModifier for MemoryDatabase {
    type AuthorModifier = MemoryRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &MemoryRepository
    }
}

impl DependOnBookQuery for MemoryDatabase {
    type BookQuery = MemoryRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MemoryRepository
    }
}

impl DependOnBookModifier for MemoryDatabase {
    type BookModifier = MemoryRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &MemoryRepository
    }
}

impl DependOnCartItemQuery for MemoryDatabase {
    type CartItemQuery = MemoryRepository;
    fn cart_item_query(&self) -> &Self::CartItemQuery {
        &MemoryRepository
    }
}

impl DependOnCartItemModifier for MemoryDatabase {
    type CartItemModifier = MemoryRepository;
    fn cart_item_modifier(&self) -> &Self::CartItemModifier {
        &MemoryRepository
    }
}
