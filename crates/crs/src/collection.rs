//! Ordered collection of CRS field records.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::field::CrsField;
use crate::value::FieldValue;

/// An ordered set of [`CrsField`] records keyed by name.
///
/// Names are unique. Inserting a name that already exists replaces the value
/// and keeps the record at its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldCollection {
    fields: Vec<CrsField>,
}

impl FieldCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the record named `name`.
    pub fn find(&self, name: &str) -> Option<&CrsField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the record named `name` for metadata attachment.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut CrsField> {
        self.fields.iter_mut().find(|field| field.name() == name)
    }

    /// Returns `true` if a record named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Inserts `field`, replacing the value of an existing record with the same name.
    pub fn push(&mut self, field: CrsField) {
        match self.find_mut(field.name()) {
            Some(existing) => existing.set_value(field.value().clone()),
            None => self.fields.push(field),
        }
    }

    /// Removes the record named `name` and returns it.
    pub fn forget(&mut self, name: &str) -> Option<CrsField> {
        let index = self.fields.iter().position(|field| field.name() == name)?;
        Some(self.fields.remove(index))
    }

    /// Returns the value stored under `name`.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.find(name).map(CrsField::value)
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CrsField> {
        self.fields.iter()
    }

    /// Iterates over the record names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(CrsField::name)
    }

    /// Returns the ordered name to value map.
    pub fn to_map(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|field| (field.name().to_string(), field.value().to_json_value()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FieldCollection {
    type Item = &'a CrsField;
    type IntoIter = std::slice::Iter<'a, CrsField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<CrsField> for FieldCollection {
    fn from_iter<I: IntoIterator<Item = CrsField>>(iter: I) -> Self {
        let mut collection = FieldCollection::new();
        for field in iter {
            collection.push(field);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, value: &str) -> CrsField {
        CrsField::new(name, FieldValue::text(value))
    }

    #[test]
    fn test_push_and_find() {
        let mut fields = FieldCollection::new();
        fields.push(field("epc", "2"));
        fields.push(field("lang", "sl"));

        assert_eq!(fields.len(), 2);
        assert!(fields.contains("epc"));
        assert_eq!(fields.value("lang"), Some(&FieldValue::text("sl")));
        assert!(fields.find("tdc").is_none());
    }

    #[test]
    fn test_push_replaces_in_place() {
        let mut fields = FieldCollection::new();
        fields.push(field("epc", "2"));
        fields.push(field("lang", "sl"));
        fields.push(field("epc", "3"));

        let names: Vec<_> = fields.names().collect();
        assert_eq!(names, vec!["epc", "lang"]);
        assert_eq!(fields.value("epc"), Some(&FieldValue::text("3")));
    }

    #[test]
    fn test_forget() {
        let mut fields: FieldCollection = [field("epc", "2"), field("lang", "sl")]
            .into_iter()
            .collect();

        let removed = fields.forget("epc").unwrap();
        assert_eq!(removed.name(), "epc");
        assert!(!fields.contains("epc"));
        assert!(fields.forget("epc").is_none());
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_to_map_keeps_order() {
        let fields: FieldCollection = [field("tmin", "1"), field("epc", "2")]
            .into_iter()
            .collect();
        let keys: Vec<_> = fields.to_map().keys().cloned().collect();
        assert_eq!(keys, vec!["tmin", "epc"]);
    }
}
