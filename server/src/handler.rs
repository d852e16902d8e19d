use driver::database::{DynamoDbBookRepository, DynamoDbConfig, DynamoDbDatabase};
use kernel::interface::port::{BookPort, DependOnBookPort};
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;

pub struct AppModule<P>(Arc<Handler<P>>);

impl<P: BookPort> AppModule<P> {
    pub fn new(book_port: P) -> Self {
        Self(Arc::new(Handler::new(book_port)))
    }
}

impl AppModule<DynamoDbBookRepository> {
    /// Reads the table configuration and connects the DynamoDB adapter.
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let config = DynamoDbConfig::from_env()?;
        tracing::info!(table = config.table_name(), "using dynamodb table");
        let db = DynamoDbDatabase::new(&config).await;

        Ok(Self::new(DynamoDbBookRepository::new(&db, &config)))
    }
}

impl<P> Clone for AppModule<P> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<P> Deref for AppModule<P> {
    type Target = Handler<P>;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler<P> {
    book_port: P,
}

impl<P: BookPort> Handler<P> {
    pub fn new(book_port: P) -> Self {
        Self { book_port }
    }
}

impl<P: BookPort> DependOnBookPort for Handler<P> {
    type BookPort = P;
    fn book_port(&self) -> &Self::BookPort {
        &self.book_port
    }
}
