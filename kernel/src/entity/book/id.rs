use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Partition key of a book record.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
