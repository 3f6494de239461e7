//! The CRS field handler interface.
//!
//! Custom field handlers implement [`CrsFieldSource`]; [`SmartSearchParameters`]
//! is the default implementation. Travel party counts are provided methods
//! built on the lookups.
//!
//! [`SmartSearchParameters`]: crate::SmartSearchParameters

use serde_json::{Map, Value};

use crate::collection::FieldCollection;
use crate::field::CrsField;

/// Default upper bound (exclusive) on an infant's age.
pub const DEFAULT_INFANT_AGE: u32 = 2;

/// Child age fields, in order.
pub const CHILD_AGE_FIELDS: [&str; 5] = ["ka1", "ka2", "ka3", "ka4", "ka5"];

/// Accessors over a set of CRS fields.
pub trait CrsFieldSource {
    /// Returns the field named `name`.
    fn find(&self, name: &str) -> Option<&CrsField>;

    /// Returns all fields.
    fn all(&self) -> &FieldCollection;

    /// Removes the field named `name`. Does nothing if it is absent.
    fn forget(&mut self, name: &str);

    /// Returns `true` if the field exists.
    fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns `true` if the field is absent, null or an empty string.
    fn is_empty(&self, name: &str) -> bool {
        self.find(name).is_none_or(CrsField::is_empty)
    }

    /// Returns the name to value map of all fields.
    fn to_map(&self) -> Map<String, Value> {
        self.all().to_map()
    }

    /// Returns the JSON representation of all fields.
    fn to_json(&self) -> String {
        Value::Object(self.to_map()).to_string()
    }

    /// Returns the number of adults (`epc`), 0 when absent.
    fn adults(&self) -> i64 {
        self.find("epc").map_or(0, |field| field.value().to_int())
    }

    /// Returns the number of children, infants included.
    ///
    /// A child counts when its age field holds a value above zero. `ka4` and
    /// `ka5` are additionally guarded by an emptiness check.
    fn children(&self) -> usize {
        let mut count = 0;
        for name in &CHILD_AGE_FIELDS[..3] {
            if self.has(name) && child_age(self, name) > 0.0 {
                count += 1;
            }
        }
        for name in &CHILD_AGE_FIELDS[3..] {
            if !self.is_empty(name) && child_age(self, name) > 0.0 {
                count += 1;
            }
        }
        count
    }

    /// Returns the number of infants: children whose age is below `max_age`.
    fn infants(&self, max_age: u32) -> usize {
        let max_age = f64::from(max_age);
        CHILD_AGE_FIELDS
            .iter()
            .filter(|name| self.has(name))
            .map(|name| child_age(self, name))
            .filter(|age| *age > 0.0 && *age < max_age)
            .count()
    }
}

/// Reads a child age; lists and null read as zero.
fn child_age<S: CrsFieldSource + ?Sized>(source: &S, name: &str) -> f64 {
    source
        .find(name)
        .and_then(|field| field.value().to_number())
        .unwrap_or(0.0)
}
