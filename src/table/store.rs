//! The table store: six validated operations over one key-value entry per table

use serde_json::Value;

use crate::kv::{KvError, KvStore};
use crate::schema::{Schema, SchemaValidator};

use super::errors::{TableError, TableResult};

/// Schema-validated table store over a key-value backend
///
/// One instance serves all tables of one record type. The schema is fixed at
/// construction; the table name is chosen per call. The backend is injected
/// and owned by the store.
pub struct TableStore<S> {
    validator: SchemaValidator,
    store: S,
}

impl<S: KvStore> TableStore<S> {
    /// Create a store for the given record schema and backend
    pub fn new(schema: Schema, store: S) -> Self {
        Self {
            validator: SchemaValidator::new(schema),
            store,
        }
    }

    /// The schema all records of this store must satisfy
    pub fn schema(&self) -> &Schema {
        self.validator.schema()
    }

    /// The underlying backend
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns every record in `table`, in insertion order.
    ///
    /// An absent storage entry is an empty table. Read-only.
    ///
    /// # Errors
    ///
    /// `Parse` if the stored value is not valid JSON, `Validation` if it is
    /// not an array of schema-conforming records, `Io` if the backend read
    /// fails.
    pub async fn read_all(&self, table: &str) -> TableResult<Vec<Value>> {
        let raw = match self.store.get(table).await? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        let parsed: Value = serde_json::from_str(&raw).map_err(|source| TableError::Parse {
            table: table.to_string(),
            source,
        })?;

        Ok(self.validator.validate_records(&parsed)?)
    }

    /// Returns the records in `table` matching `predicate`, order preserved.
    ///
    /// The predicate is pure and never runs if the read failed.
    pub async fn read_where<P>(&self, table: &str, predicate: P) -> TableResult<Vec<Value>>
    where
        P: Fn(&Value) -> bool,
    {
        let records = self.read_all(table).await?;
        Ok(records.into_iter().filter(|r| predicate(r)).collect())
    }

    /// Appends one record to `table` and echoes it back.
    ///
    /// The record is validated before any storage access; a validation
    /// failure leaves the table untouched. The persist step is all-or-nothing
    /// per key, so prior content survives a failed write.
    pub async fn write(&self, table: &str, record: Value) -> TableResult<Value> {
        self.validator.validate_record(&record)?;

        let mut records = self.read_all(table).await?;
        records.push(record.clone());
        self.persist(table, &records).await?;

        Ok(record)
    }

    /// Appends a batch of records to `table` and returns it unchanged.
    ///
    /// Every batch item is validated exactly like `write` validates a single
    /// record, before any storage access.
    pub async fn write_all(&self, table: &str, records: Vec<Value>) -> TableResult<Vec<Value>> {
        let records = self.validator.validate_records(&Value::Array(records))?;

        let mut all = self.read_all(table).await?;
        all.extend(records.iter().cloned());
        self.persist(table, &all).await?;

        Ok(records)
    }

    /// Transforms every record in `table` through `transform` and replaces
    /// the table content with the result.
    ///
    /// This is a two-phase replace: read + map, then `delete_all` followed by
    /// `write_all`. The backend offers no atomic swap, so a failure after the
    /// delete succeeds but before the write persists leaves the table
    /// observably empty. The transform is pure and must not change
    /// cardinality.
    pub async fn update<F>(&self, table: &str, transform: F) -> TableResult<Vec<Value>>
    where
        F: FnMut(Value) -> Value,
    {
        let records = self.read_all(table).await?;
        let mapped: Vec<Value> = records.into_iter().map(transform).collect();

        self.delete_all(table).await?;
        self.write_all(table, mapped).await
    }

    /// Removes the storage entry for `table` entirely.
    ///
    /// Deleting an absent table succeeds.
    pub async fn delete_all(&self, table: &str) -> TableResult<()> {
        Ok(self.store.remove(table).await?)
    }

    /// Serializes `records` and writes them as the table's single entry
    async fn persist(&self, table: &str, records: &[Value]) -> TableResult<()> {
        let serialized = serde_json::to_string(records).map_err(|e| {
            // a Value slice always serializes; if it ever does not, it is a write failure
            KvError::Write {
                key: table.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            }
        })?;

        Ok(self.store.set(table, serialized).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::schema::FieldDef;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn user_store() -> TableStore<MemoryStore> {
        let mut fields = BTreeMap::new();
        fields.insert("age".into(), FieldDef::required_int_range(0, 120));
        fields.insert("link".into(), FieldDef::optional_url());
        TableStore::new(Schema::new("user", fields), MemoryStore::new())
    }

    #[tokio::test]
    async fn test_read_all_on_absent_table_is_empty() {
        let store = user_store();
        assert!(store.read_all("users").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_echoes_record_back() {
        let store = user_store();
        let record = json!({ "age": 25, "link": "https://example.com" });
        let written = store.write("users", record.clone()).await.unwrap();
        assert_eq!(written, record);
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected_before_storage() {
        let store = user_store();
        let err = store.write("users", json!({ "age": -1 })).await.unwrap_err();
        assert!(err.is_validation());
        assert!(store.store().is_empty());
    }

    #[tokio::test]
    async fn test_operations_are_deferred_until_awaited() {
        let store = user_store();
        // Constructing the future performs no storage access
        let pending = store.write("users", json!({ "age": 25 }));
        assert!(store.store().is_empty());
        pending.await.unwrap();
        assert_eq!(store.store().len(), 1);
    }

    #[tokio::test]
    async fn test_update_on_empty_table_yields_empty() {
        let store = user_store();
        let result = store.update("users", |r| r).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_delete_all_removes_entry() {
        let store = user_store();
        store.write("users", json!({ "age": 25 })).await.unwrap();
        store.delete_all("users").await.unwrap();
        assert!(store.store().is_empty());
        assert!(store.read_all("users").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tables_are_independent_entries() {
        let store = user_store();
        store.write("users", json!({ "age": 25 })).await.unwrap();
        store.write("admins", json!({ "age": 50 })).await.unwrap();

        assert_eq!(store.read_all("users").await.unwrap().len(), 1);
        assert_eq!(store.read_all("admins").await.unwrap().len(), 1);

        store.delete_all("users").await.unwrap();
        assert_eq!(store.read_all("admins").await.unwrap().len(), 1);
    }
}
