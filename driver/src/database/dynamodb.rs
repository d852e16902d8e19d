use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use kernel::KernelError;

use crate::{env, env_opt};

pub use self::book::*;

mod book;

const BOOKS_TABLE: &str = "BOOKS_TABLE";
const DYNAMODB_ENDPOINT: &str = "DYNAMODB_ENDPOINT";

/// Settings for the DynamoDB backed adapter, read once at startup.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DynamoDbConfig {
    table_name: String,
    endpoint: Option<String>,
}

impl DynamoDbConfig {
    pub fn new(table_name: impl Into<String>, endpoint: Option<String>) -> Self {
        Self {
            table_name: table_name.into(),
            endpoint,
        }
    }

    /// Fails when `BOOKS_TABLE` is unset.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_keys(BOOKS_TABLE, DYNAMODB_ENDPOINT)
    }

    fn from_keys(table_key: &str, endpoint_key: &str) -> error_stack::Result<Self, KernelError> {
        let table_name = env(table_key)?;
        let endpoint = env_opt(endpoint_key)?;
        Ok(Self::new(table_name, endpoint))
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[derive(Clone)]
pub struct DynamoDbDatabase {
    client: Client,
}

impl DynamoDbDatabase {
    /// Region and credentials come from the standard AWS provider chain.
    pub async fn new(config: &DynamoDbConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint) = config.endpoint() {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        Self {
            client: Client::new(&sdk_config),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::database::dynamodb::DynamoDbConfig;

    #[test]
    fn missing_table_is_configuration_error() {
        let report = DynamoDbConfig::from_keys(
            "BOOKS_TABLE_UNSET_FOR_TEST",
            "DYNAMODB_ENDPOINT_UNSET_FOR_TEST",
        )
        .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Configuration
        ));
    }

    #[test]
    fn endpoint_is_optional() {
        std::env::set_var("BOOKS_TABLE_SET_FOR_TEST", "books");
        let config = DynamoDbConfig::from_keys(
            "BOOKS_TABLE_SET_FOR_TEST",
            "DYNAMODB_ENDPOINT_ABSENT_FOR_TEST",
        )
        .unwrap();
        assert_eq!(config, DynamoDbConfig::new("books", None));
    }

    #[test]
    fn endpoint_is_read_when_present() {
        std::env::set_var("BOOKS_TABLE_WITH_ENDPOINT_FOR_TEST", "books");
        std::env::set_var("DYNAMODB_ENDPOINT_SET_FOR_TEST", "http://localhost:8000");
        let config = DynamoDbConfig::from_keys(
            "BOOKS_TABLE_WITH_ENDPOINT_FOR_TEST",
            "DYNAMODB_ENDPOINT_SET_FOR_TEST",
        )
        .unwrap();
        assert_eq!(config.table_name(), "books");
        assert_eq!(config.endpoint(), Some("http://localhost:8000"));
    }
}
