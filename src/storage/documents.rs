use rusqlite::{OptionalExtension, params};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::database::Database;
use crate::error::StorageError;

/// One stored document: an id plus a JSON object body.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub body: Value,
}

/// Document collection store. Collections are addressed by their full
/// namespace-scoped path string; snapshots return the full member set.
pub struct DocumentStore {
    db: Database,
}

impl DocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn create(&self, path: &str, id: &str, body: &Value) -> Result<(), StorageError> {
        self.db.connection().execute(
            "INSERT INTO documents (path, id, body) VALUES (?1, ?2, ?3)",
            params![path, id, body.to_string()],
        )?;
        Ok(())
    }

    pub fn delete(&self, path: &str, id: &str) -> Result<(), StorageError> {
        self.db.connection().execute(
            "DELETE FROM documents WHERE path = ?1 AND id = ?2",
            params![path, id],
        )?;
        Ok(())
    }

    /// Merge-write: only the supplied fields are altered, every other
    /// stored field survives. Creates the document when absent.
    pub fn merge(&self, path: &str, id: &str, fields: &Value) -> Result<(), StorageError> {
        let conn = self.db.connection();
        let existing: Option<String> = conn
            .query_row(
                "SELECT body FROM documents WHERE path = ?1 AND id = ?2",
                params![path, id],
                |row| row.get(0),
            )
            .optional()?;

        let mut body = match existing {
            Some(raw) => serde_json::from_str::<Value>(&raw)?,
            None => Value::Object(serde_json::Map::new()),
        };
        if let (Some(target), Some(updates)) = (body.as_object_mut(), fields.as_object()) {
            for (key, value) in updates {
                target.insert(key.clone(), value.clone());
            }
        }

        conn.execute(
            "INSERT OR REPLACE INTO documents (path, id, body) VALUES (?1, ?2, ?3)",
            params![path, id, body.to_string()],
        )?;
        Ok(())
    }

    /// Full current member set of a collection, in insertion order.
    pub fn snapshot(&self, path: &str) -> Result<Vec<Document>, StorageError> {
        let conn = self.db.connection();
        let mut stmt =
            conn.prepare("SELECT id, body FROM documents WHERE path = ?1 ORDER BY rowid")?;
        let docs = stmt
            .query_map(params![path], |row| {
                let id: String = row.get(0)?;
                let raw: String = row.get(1)?;
                Ok((id, raw))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = Vec::with_capacity(docs.len());
        for (id, raw) in docs {
            out.push(Document {
                id,
                body: serde_json::from_str(&raw)?,
            });
        }
        Ok(out)
    }
}

/// Decode a document into a typed record, injecting the document id.
pub fn decode<T: DeserializeOwned>(mut doc: Document) -> Result<T, StorageError> {
    if let Some(obj) = doc.body.as_object_mut() {
        obj.insert("id".to_string(), Value::String(doc.id.clone()));
    }
    Ok(serde_json::from_value(doc.body)?)
}
