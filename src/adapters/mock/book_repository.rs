use crate::domain::{Book, BookFields, BookId};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    last_id: i64,
    books: BTreeMap<BookId, Book>,
}

/// BookRepositoryのインメモリ実装
///
/// IDは1から順に採番し、再利用しない。
#[derive(Default)]
pub struct BookRepository {
    state: Mutex<State>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn list(&self) -> Result<Vec<Book>> {
        let state = self.state.lock().map_err(|_| "book store lock poisoned")?;
        Ok(state.books.values().cloned().collect())
    }

    async fn insert(&self, fields: BookFields) -> Result<Book> {
        let mut state = self.state.lock().map_err(|_| "book store lock poisoned")?;
        state.last_id += 1;
        let book = Book::from_fields(BookId::from_i64(state.last_id), fields);
        state.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn get(&self, book_id: BookId) -> Result<Option<Book>> {
        let state = self.state.lock().map_err(|_| "book store lock poisoned")?;
        Ok(state.books.get(&book_id).cloned())
    }

    async fn update(&self, book_id: BookId, fields: BookFields) -> Result<Option<Book>> {
        let mut state = self.state.lock().map_err(|_| "book store lock poisoned")?;
        Ok(state.books.get_mut(&book_id).map(|book| {
            book.replace(fields);
            book.clone()
        }))
    }

    async fn delete(&self, book_id: BookId) -> Result<bool> {
        let mut state = self.state.lock().map_err(|_| "book store lock poisoned")?;
        Ok(state.books.remove(&book_id).is_some())
    }
}
