//! Document store abstraction
//!
//! Boards, users, tags and activity entries are JSON documents grouped into
//! collections. A document is read whole. Writes either create a document,
//! merge top-level fields into it, or delete it. There are no transactions:
//! two writers updating the same field race and the last one wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Top-level fields of a document
pub type Fields = Map<String, Value>;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Document collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Boards,
    Users,
    Tags,
    Activity,
}

impl Collection {
    pub const ALL: [Collection; 4] = [Self::Boards, Self::Users, Self::Tags, Self::Activity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boards => "boards",
            Self::Users => "users",
            Self::Tags => "tags",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store-layer failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document {collection}/{id} does not exist")]
    Missing { collection: Collection, id: String },

    #[error("document {collection}/{id} already exists")]
    AlreadyExists { collection: Collection, id: String },

    #[error("invalid document id {id:?} in {collection}")]
    InvalidId { collection: Collection, id: String },

    #[error("document {collection}/{id} is not a JSON object")]
    Malformed { collection: Collection, id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A stored document. The id lives beside the fields, not inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Deserialize into a typed record, putting the id back in as `id`
    pub fn into_typed<T: DeserializeOwned>(self) -> serde_json::Result<T> {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        serde_json::from_value(Value::Object(fields))
    }
}

/// Serialize a typed record into document fields, without its `id` and
/// without absent values
pub fn to_fields<T: Serialize>(record: &T) -> serde_json::Result<Fields> {
    let mut fields = match strip_absent(serde_json::to_value(record)?) {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    };
    fields.remove("id");
    Ok(fields)
}

/// Remove `null` members from every object, recursively. The store has no
/// notion of an absent value, so an absent value is simply not written.
pub fn strip_absent(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_absent(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_absent).collect()),
        other => other,
    }
}

/// Persistence seam between the engine and whatever holds the documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a whole document
    async fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>>;

    /// Every document in a collection, sorted by id
    async fn list(&self, collection: Collection) -> StoreResult<Vec<Document>>;

    /// Create a document; fails if the id is taken
    async fn create(&self, collection: Collection, id: &str, fields: Fields) -> StoreResult<()>;

    /// Overwrite the named top-level fields, leaving the others alone
    async fn update(&self, collection: Collection, id: &str, fields: Fields) -> StoreResult<()>;

    /// Delete a document. Deleting a missing document is not an error.
    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_absent_recursive() {
        let value = json!({
            "a": null,
            "b": {"c": null, "d": 1},
            "e": [{"f": null, "g": 2}]
        });
        assert_eq!(
            strip_absent(value),
            json!({"b": {"d": 1}, "e": [{"g": 2}]})
        );
    }

    #[test]
    fn test_document_round_trip_keeps_id_outside_fields() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Rec {
            id: String,
            name: String,
            note: Option<String>,
        }

        let rec = Rec {
            id: "r1".into(),
            name: "n".into(),
            note: None,
        };
        let fields = to_fields(&rec).unwrap();
        assert!(!fields.contains_key("id"));
        assert!(!fields.contains_key("note"));

        let back: Rec = Document::new("r1", fields).into_typed().unwrap();
        assert_eq!(back, rec);
    }
}
