use kernel::interface::port::BookPort;
use kernel::prelude::entity::{Book, BookId, BookTitle};
use kernel::KernelError;
use tracing::info;

const SENTINEL: &str = "test";

/// Stand-in adapter that never touches a store.
///
/// Saved books are emitted as log events and handed back unchanged; lookups
/// always yield the same `test`/`test` book whatever id is asked for.
#[derive(Debug, Default, Clone)]
pub struct EchoBookRepository;

#[async_trait::async_trait]
impl BookPort for EchoBookRepository {
    async fn save(&self, book: Book) -> error_stack::Result<Book, KernelError> {
        info!(?book, "echo save");
        Ok(book)
    }

    async fn find(&self, _id: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(Some(Book::new(
            BookId::new(SENTINEL),
            BookTitle::new(SENTINEL),
        )))
    }
}
