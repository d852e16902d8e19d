use kernel::prelude::entity::{Book, BookId, BookTitle, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: String,
    pub title: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook { id, title } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl From<BookDto> for Book {
    fn from(value: BookDto) -> Self {
        Book::new(BookId::new(value.id), BookTitle::new(value.title))
    }
}

#[derive(Debug, Clone)]
pub struct GetBookDto {
    pub id: String,
}
