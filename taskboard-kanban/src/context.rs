//! KanbanContext - typed I/O primitives over the document store
//!
//! The context gives commands access to storage and to the current session.
//! It holds no business logic; commands do all the work.

use crate::error::{KanbanError, Result};
use crate::session::Session;
use crate::store::{
    strip_absent, to_fields, Collection, Document, DocumentStore, Fields, MemoryStore, StoreError,
};
use crate::types::{Board, BoardId, Column, Tag, TagId, User, UserId};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use taskboard_operations::LogEntry;

/// Context passed to every command - provides access, not logic
#[derive(Clone)]
pub struct KanbanContext {
    store: Arc<dyn DocumentStore>,
    session: Option<Session>,
}

impl KanbanContext {
    /// Create a context over any document store
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self::from_arc(Arc::new(store))
    }

    /// Create a context sharing an existing store
    pub fn from_arc(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Context over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Same store, acting as the given user
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The session, or `NoSession` when nobody is signed in
    pub fn require_session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(KanbanError::NoSession)
    }

    /// Email of the signed-in user, if any
    pub fn session_email(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.email.clone())
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    // =========================================================================
    // Board I/O
    // =========================================================================

    /// Read a board document
    pub async fn read_board(&self, id: &BoardId) -> Result<Board> {
        let doc = self
            .store
            .get(Collection::Boards, id.as_str())
            .await?
            .ok_or_else(|| KanbanError::board_not_found(id))?;
        Ok(doc.into_typed()?)
    }

    /// Read every board document, regardless of visibility
    pub async fn read_all_boards(&self) -> Result<Vec<Board>> {
        read_all(self.store.as_ref(), Collection::Boards).await
    }

    pub async fn create_board(&self, board: &Board) -> Result<()> {
        self.store
            .create(Collection::Boards, board.id.as_str(), to_fields(board)?)
            .await?;
        Ok(())
    }

    /// Merge fields into a board document
    pub async fn update_board_fields(&self, id: &BoardId, fields: Fields) -> Result<()> {
        self.store
            .update(Collection::Boards, id.as_str(), fields)
            .await
            .map_err(|e| match e {
                StoreError::Missing { .. } => KanbanError::board_not_found(id),
                other => other.into(),
            })
    }

    /// Write the whole column array back along with a fresh `updatedAt`.
    /// Every other board field is left as stored, and any column or task that
    /// reads back equal to what is stored keeps its stored JSON verbatim.
    pub async fn write_columns(
        &self,
        id: &BoardId,
        columns: &[Column],
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        let stored = self
            .store
            .get(Collection::Boards, id.as_str())
            .await?
            .ok_or_else(|| KanbanError::board_not_found(id))?;
        let stored_columns = stored
            .fields
            .get("columns")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let merged = columns
            .iter()
            .map(|column| merge_column(stored_columns, column))
            .collect::<Result<Vec<_>>>()?;

        let mut fields = Fields::new();
        fields.insert("columns".to_string(), Value::Array(merged));
        fields.insert("updatedAt".to_string(), serde_json::to_value(updated_at)?);
        self.update_board_fields(id, fields).await
    }

    pub async fn delete_board(&self, id: &BoardId) -> Result<()> {
        self.store.delete(Collection::Boards, id.as_str()).await?;
        Ok(())
    }

    // =========================================================================
    // User I/O
    // =========================================================================

    pub async fn read_user(&self, id: &UserId) -> Result<User> {
        let doc = self
            .store
            .get(Collection::Users, id.as_str())
            .await?
            .ok_or_else(|| KanbanError::UserNotFound { id: id.to_string() })?;
        Ok(doc.into_typed()?)
    }

    pub async fn read_all_users(&self) -> Result<Vec<User>> {
        read_all(self.store.as_ref(), Collection::Users).await
    }

    /// First user whose email matches
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .read_all_users()
            .await?
            .into_iter()
            .find(|u| u.email == email))
    }

    pub async fn create_user(&self, user: &User) -> Result<()> {
        self.store
            .create(Collection::Users, user.id.as_str(), to_fields(user)?)
            .await?;
        Ok(())
    }

    pub async fn update_user_fields(&self, id: &UserId, fields: Fields) -> Result<()> {
        self.store
            .update(Collection::Users, id.as_str(), fields)
            .await
            .map_err(|e| match e {
                StoreError::Missing { .. } => KanbanError::UserNotFound { id: id.to_string() },
                other => other.into(),
            })
    }

    // =========================================================================
    // Tag I/O
    // =========================================================================

    pub async fn read_tag(&self, id: &TagId) -> Result<Tag> {
        let doc = self
            .store
            .get(Collection::Tags, id.as_str())
            .await?
            .ok_or_else(|| KanbanError::TagNotFound { id: id.to_string() })?;
        Ok(doc.into_typed()?)
    }

    pub async fn read_all_tags(&self) -> Result<Vec<Tag>> {
        read_all(self.store.as_ref(), Collection::Tags).await
    }

    pub async fn create_tag(&self, tag: &Tag) -> Result<()> {
        self.store
            .create(Collection::Tags, tag.id.as_str(), to_fields(tag)?)
            .await?;
        Ok(())
    }

    pub async fn update_tag_fields(&self, id: &TagId, fields: Fields) -> Result<()> {
        self.store
            .update(Collection::Tags, id.as_str(), fields)
            .await
            .map_err(|e| match e {
                StoreError::Missing { .. } => KanbanError::TagNotFound { id: id.to_string() },
                other => other.into(),
            })
    }

    pub async fn delete_tag(&self, id: &TagId) -> Result<()> {
        self.store.delete(Collection::Tags, id.as_str()).await?;
        Ok(())
    }

    // =========================================================================
    // Activity log
    // =========================================================================

    /// Append an entry to the activity log
    pub async fn append_activity(&self, entry: &LogEntry) -> Result<()> {
        self.store
            .create(Collection::Activity, &entry.id, to_fields(entry)?)
            .await?;
        Ok(())
    }

    /// Activity entries, newest first, optionally limited
    pub async fn read_activity(&self, limit: Option<usize>) -> Result<Vec<LogEntry>> {
        let mut entries: Vec<LogEntry> = read_all(self.store.as_ref(), Collection::Activity).await?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id)));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }
}

async fn read_all<T: serde::de::DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: Collection,
) -> Result<Vec<T>> {
    store
        .list(collection)
        .await?
        .into_iter()
        .map(|doc: Document| doc.into_typed::<T>().map_err(KanbanError::from))
        .collect()
}

/// Serialize a column, reusing stored JSON where nothing changed
fn merge_column(stored: &[Value], column: &Column) -> Result<Value> {
    let previous = stored
        .iter()
        .find(|raw| raw.get("id").and_then(Value::as_str) == Some(column.id.as_str()));
    let Some(previous) = previous else {
        return Ok(strip_absent(serde_json::to_value(column)?));
    };
    if reads_as(previous, column) {
        return Ok(previous.clone());
    }

    let mut value = strip_absent(serde_json::to_value(column)?);
    let previous_tasks = previous
        .get("tasks")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    if let Some(tasks) = value.get_mut("tasks").and_then(Value::as_array_mut) {
        for (raw, task) in tasks.iter_mut().zip(&column.tasks) {
            if let Some(old) = previous_tasks.iter().find(|old| {
                old.get("id").and_then(Value::as_str) == Some(task.id.as_str()) && reads_as(old, task)
            }) {
                *raw = old.clone();
            }
        }
    }
    Ok(value)
}

/// Whether stored JSON deserializes to exactly `current`
fn reads_as<T: serde::de::DeserializeOwned + PartialEq>(raw: &Value, current: &T) -> bool {
    serde_json::from_value::<T>(raw.clone()).is_ok_and(|old| &old == current)
}

/// Build a `Fields` map from `(name, value)` pairs, skipping absent values
pub(crate) fn fields_from<I>(pairs: I) -> Fields
where
    I: IntoIterator<Item = (&'static str, Option<Value>)>,
{
    pairs
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k.to_string(), strip_absent(v))))
        .filter(|(_, v)| !v.is_null())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Task;

    #[tokio::test]
    async fn test_board_round_trip() {
        let ctx = KanbanContext::in_memory();
        let board = Board::new("Roadmap", "ada@example.com").with_columns(Board::default_columns());
        ctx.create_board(&board).await.unwrap();

        let read = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(read, board);
    }

    #[tokio::test]
    async fn test_read_missing_board() {
        let ctx = KanbanContext::in_memory();
        let err = ctx.read_board(&BoardId::from("nope")).await.unwrap_err();
        assert!(matches!(err, KanbanError::BoardNotFound { .. }));
    }

    #[tokio::test]
    async fn test_write_columns_leaves_name_alone() {
        let ctx = KanbanContext::in_memory();
        let board = Board::new("Roadmap", "ada@example.com").with_columns(Board::default_columns());
        ctx.create_board(&board).await.unwrap();

        let mut columns = board.columns.clone();
        columns[0].tasks.push(Task::new("t", "To Do").with_order(0));
        let now = Utc::now();
        ctx.write_columns(&board.id, &columns, now).await.unwrap();

        let read = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(read.name, "Roadmap");
        assert_eq!(read.columns[0].tasks.len(), 1);
        assert_eq!(read.updated_at, now);
    }

    #[tokio::test]
    async fn test_write_columns_missing_board() {
        let ctx = KanbanContext::in_memory();
        let err = ctx
            .write_columns(&BoardId::from("gone"), &[], Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, KanbanError::BoardNotFound { .. }));
    }

    #[test]
    fn test_require_session() {
        let ctx = KanbanContext::in_memory();
        assert!(matches!(ctx.require_session(), Err(KanbanError::NoSession)));

        let ctx = ctx.with_session(Session::new("ada@example.com"));
        assert_eq!(ctx.require_session().unwrap().email, "ada@example.com");
    }

    #[test]
    fn test_fields_from_skips_absent() {
        let fields = fields_from([
            ("name", Some(Value::String("A".into()))),
            ("description", None),
            ("color", Some(Value::Null)),
        ]);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["name"], "A");
    }

    #[tokio::test]
    async fn test_write_columns_keeps_untouched_json_verbatim() {
        let store = MemoryStore::new();
        let raw = serde_json::json!({
            "name": "Legacy",
            "ownerId": "ada@example.com",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z",
            "columns": [
                {"id": "a", "name": "A", "tasks": [
                    {"id": "t1", "title": "x", "status": "A", "order": 0,
                     "createdAt": "2024-01-01T00:00:00.000Z",
                     "updatedAt": "2024-01-01T00:00:00.000Z"}
                ]},
                {"id": "c", "name": "C", "color": "red", "tasks": [
                    {"id": "keep", "title": "y", "status": "C", "order": 0, "priority": "high",
                     "createdAt": "2024-01-01T00:00:00.000Z",
                     "updatedAt": "2024-01-01T00:00:00.000Z"}
                ]}
            ]
        });
        let untouched = raw["columns"][1].clone();
        store
            .create(Collection::Boards, "b1", raw.as_object().cloned().unwrap())
            .await
            .unwrap();
        let ctx = KanbanContext::new(store);

        let mut board = ctx.read_board(&BoardId::from("b1")).await.unwrap();
        board.columns[0].name = "Renamed".into();
        ctx.write_columns(&board.id, &board.columns, Utc::now())
            .await
            .unwrap();

        let doc = ctx.store().get(Collection::Boards, "b1").await.unwrap().unwrap();
        assert_eq!(doc.fields["columns"][1], untouched);
        assert_eq!(doc.fields["columns"][0]["name"], "Renamed");
        assert_eq!(
            doc.fields["columns"][0]["tasks"][0]["createdAt"],
            "2024-01-01T00:00:00.000Z"
        );
    }
}
