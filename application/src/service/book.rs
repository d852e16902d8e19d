use kernel::interface::port::{BookPort, DependOnBookPort};
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::transfer::{BookDto, GetBookDto};

/// Book operations exposed to the interface layer.
///
/// Every method delegates straight to the injected [`BookPort`].
#[async_trait::async_trait]
pub trait BooksUseCase: 'static + Sync + Send + DependOnBookPort {
    async fn save(&self, dto: BookDto) -> error_stack::Result<BookDto, KernelError> {
        let book = self.book_port().save(Book::from(dto)).await?;
        Ok(BookDto::from(book))
    }

    async fn get(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let id = BookId::new(dto.id);
        let book = self.book_port().find(&id).await?;
        Ok(book.map(BookDto::from))
    }
}

impl<T> BooksUseCase for T where T: DependOnBookPort {}
