//! Storage boundary for CRS field records.
//!
//! Records are keyed by name and persisted in their JSON form, so any store
//! that can hold strings by key can back [`FieldStore`].

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::allow_list::AllowList;
use crate::error::CrsResult;
use crate::field::CrsField;

/// Key-value storage for field records.
pub trait FieldStore: Send + Sync {
    /// Returns a human-readable name for this store.
    fn store_name(&self) -> &'static str;

    /// Saves `field`, replacing any record with the same name.
    fn save(&self, field: &CrsField) -> CrsResult<()>;

    /// Loads the record named `name`.
    fn find(&self, name: &str) -> CrsResult<Option<CrsField>>;

    /// Deletes the record named `name`. Returns `true` if it existed.
    fn delete(&self, name: &str) -> CrsResult<bool>;

    /// Loads all records, ordered by name.
    fn all(&self) -> CrsResult<Vec<CrsField>>;

    /// Saves every record in `fields`.
    fn save_all<'a, I>(&self, fields: I) -> CrsResult<usize>
    where
        I: IntoIterator<Item = &'a CrsField>,
        Self: Sized,
    {
        let mut saved = 0;
        for field in fields {
            self.save(field)?;
            saved += 1;
        }
        Ok(saved)
    }
}

/// In-memory [`FieldStore`] holding records as JSON strings.
#[derive(Debug)]
pub struct MemoryFieldStore {
    allow_list: AllowList,
    records: RwLock<BTreeMap<String, String>>,
}

impl MemoryFieldStore {
    /// Creates an empty store validating records against the CRS allow-list.
    pub fn new() -> Self {
        Self::with_allow_list(AllowList::crs().clone())
    }

    /// Creates an empty store validating records against `allow_list`.
    pub fn with_allow_list(allow_list: AllowList) -> Self {
        Self {
            allow_list,
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for MemoryFieldStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldStore for MemoryFieldStore {
    fn store_name(&self) -> &'static str {
        "memory"
    }

    fn save(&self, field: &CrsField) -> CrsResult<()> {
        debug!(name = field.name(), "Saving CRS field");
        self.records
            .write()
            .insert(field.name().to_string(), field.to_json());
        Ok(())
    }

    fn find(&self, name: &str) -> CrsResult<Option<CrsField>> {
        let records = self.records.read();
        records
            .get(name)
            .map(|json| CrsField::with_json(json, &self.allow_list))
            .transpose()
    }

    fn delete(&self, name: &str) -> CrsResult<bool> {
        Ok(self.records.write().remove(name).is_some())
    }

    fn all(&self) -> CrsResult<Vec<CrsField>> {
        let records = self.records.read();
        records
            .values()
            .map(|json| CrsField::with_json(json, &self.allow_list))
            .collect()
    }
}
