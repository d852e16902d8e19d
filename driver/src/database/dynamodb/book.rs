use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use error_stack::Report;
use kernel::interface::port::BookPort;
use kernel::prelude::entity::{Book, BookId, BookTitle};
use kernel::KernelError;
use tracing::debug;

use crate::database::dynamodb::{DynamoDbConfig, DynamoDbDatabase};
use crate::error::ConvertError;

const BOOK_ID: &str = "bookId";
const TITLE: &str = "title";

pub struct DynamoDbBookRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbBookRepository {
    pub fn new(db: &DynamoDbDatabase, config: &DynamoDbConfig) -> Self {
        Self {
            client: db.client().clone(),
            table_name: config.table_name().to_string(),
        }
    }
}

#[async_trait::async_trait]
impl BookPort for DynamoDbBookRepository {
    #[tracing::instrument(skip(self))]
    async fn save(&self, book: Book) -> error_stack::Result<Book, KernelError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(BookItem::from(&book).0))
            .send()
            .await
            .convert_error()?;
        debug!("book stored");
        Ok(book)
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(BOOK_ID, AttributeValue::S(id.as_ref().clone()))
            .send()
            .await
            .convert_error()?;
        let found = output
            .item()
            .map(|item| Book::try_from(BookItem(item.clone())))
            .transpose()?;
        debug!(found = found.is_some(), "book looked up");
        Ok(found)
    }
}

/// Attribute map of a single row in the books table.
struct BookItem(HashMap<String, AttributeValue>);

impl From<&Book> for BookItem {
    fn from(value: &Book) -> Self {
        let item = HashMap::from([
            (
                BOOK_ID.to_string(),
                AttributeValue::S(value.id().as_ref().clone()),
            ),
            (
                TITLE.to_string(),
                AttributeValue::S(value.title().as_ref().clone()),
            ),
        ]);
        Self(item)
    }
}

impl TryFrom<BookItem> for Book {
    type Error = Report<KernelError>;
    fn try_from(value: BookItem) -> Result<Self, Self::Error> {
        let mut item = value.0;
        let mut take = |name: &str| match item.remove(name) {
            Some(AttributeValue::S(value)) => Ok(value),
            Some(other) => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("attribute `{name}` is not a string: {other:?}"))),
            None => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("attribute `{name}` is missing"))),
        };
        let id = take(BOOK_ID)?;
        let title = take(TITLE)?;
        Ok(Book::new(BookId::new(id), BookTitle::new(title)))
    }
}
