use crate::entity::{Book, BookId};
use crate::KernelError;

/// Persistence capability for [`Book`] records.
///
/// Exactly one implementation is wired into the application at startup.
#[async_trait::async_trait]
pub trait BookPort: 'static + Sync + Send {
    /// Stores the book, overwriting any record with the same id.
    async fn save(&self, book: Book) -> error_stack::Result<Book, KernelError>;
    /// Looks a book up by its id. `None` means no record exists.
    async fn find(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError>;
}

pub trait DependOnBookPort: 'static + Sync + Send {
    type BookPort: BookPort;
    fn book_port(&self) -> &Self::BookPort;
}
