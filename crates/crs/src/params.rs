//! Search parameter normalization.
//!
//! [`SmartSearchParameters`] takes the parameters a user submits with a
//! search form and keeps only those the CRS search API understands.
//!
//! # Normalization
//!
//! Each raw key is handled in input order:
//!
//! 1. A key of the form `<tag>_<suffix>` whose `<tag>_*` entry is allowed
//!    appends `<suffix>` to the list stored under `<tag>`.
//! 2. Otherwise a key that is itself allowed is copied verbatim.
//! 3. Anything else is dropped.
//!
//! Afterwards `tdc` is derived from `tmin`/`tmax` when missing, and `ka1`,
//! `ka2` and `ka3` are always present.
//!
//! # Example
//!
//! ```
//! use ors_crs::{CrsFieldSource, FieldValue, SmartSearchParameters};
//!
//! let params = SmartSearchParameters::from_pairs([
//!     ("epc", "2"),
//!     ("fct_air", "1"),
//!     ("fct_wifi", "1"),
//!     ("color", "red"),
//! ]);
//!
//! assert_eq!(params.adults(), 2);
//! assert!(!params.has("color"));
//! assert_eq!(
//!     params.find("fct").unwrap().value(),
//!     &FieldValue::List(vec!["air".into(), "wifi".into()])
//! );
//! ```

use std::fmt;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::allow_list::{AllowList, HEADER_FIELDS};
use crate::collection::FieldCollection;
use crate::error::CrsResult;
use crate::field::CrsField;
use crate::flags::{FlagLatch, SearchFlags};
use crate::input::SearchInput;
use crate::source::CrsFieldSource;
use crate::value::FieldValue;

/// Fields that are always present after normalization.
const ALWAYS_PRESENT: [&str; 3] = ["ka1", "ka2", "ka3"];

/// Normalized CRS search parameters.
#[derive(Debug, Clone)]
pub struct SmartSearchParameters {
    fields: FieldCollection,
    flags: SearchFlags,
}

impl SmartSearchParameters {
    /// Normalizes `input` against the default CRS allow-list.
    ///
    /// # Errors
    ///
    /// Returns [`CrsError::InvalidInputFormat`](crate::CrsError::InvalidInputFormat)
    /// for malformed JSON input.
    pub fn new(input: SearchInput) -> CrsResult<Self> {
        Self::with_allow_list(input, AllowList::crs())
    }

    /// Normalizes `input` against `allow_list`.
    pub fn with_allow_list(input: SearchInput, allow_list: &AllowList) -> CrsResult<Self> {
        let pairs = input.into_pairs()?;
        Ok(Self::normalize(&pairs, allow_list, FlagLatch::global()))
    }

    /// Normalizes ordered key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let pairs: Vec<(String, FieldValue)> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::normalize(&pairs, AllowList::crs(), FlagLatch::global())
    }

    /// Normalizes a URL-encoded query string.
    pub fn from_query(query: &str) -> Self {
        let pairs = SearchInput::Query(query.to_string())
            .into_pairs()
            .unwrap_or_default();
        Self::normalize(&pairs, AllowList::crs(), FlagLatch::global())
    }

    /// Normalizes a serialized JSON object.
    pub fn from_json(json: &str) -> CrsResult<Self> {
        Self::new(SearchInput::Json(json.to_string()))
    }

    /// Normalizes a serialized JSON object, treating malformed input as empty.
    pub fn from_json_or_empty(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            debug!(error = %err, "Discarding malformed search input");
            Self::normalize(&[], AllowList::crs(), FlagLatch::global())
        })
    }

    /// Filters `raw` against `allow_list` and latches the search flags on
    /// `latch`.
    pub fn normalize(
        raw: &[(String, FieldValue)],
        allow_list: &AllowList,
        latch: &FlagLatch,
    ) -> Self {
        let mut fields = FieldCollection::new();

        for (key, value) in raw {
            match allow_list.split_key(key) {
                Some(tagged) if allow_list.is_group(tagged.tag) => {
                    append_to_group(&mut fields, tagged.tag, tagged.suffix);
                }
                _ if allow_list.contains(key) => {
                    fields.push(CrsField::new(key.as_str(), value.clone()));
                }
                _ => trace!(key = %key, "Dropping unrecognized search parameter"),
            }
        }

        derive_tdc(&mut fields);
        for name in ALWAYS_PRESENT {
            if fields.value(name).is_none_or(FieldValue::is_blank) {
                fields.push(CrsField::new(name, FieldValue::text("")));
            }
        }

        let flags = latch
            .latch_with(|| SearchFlags::from_pairs(raw.iter().map(|(k, v)| (k.as_str(), v))))
            .clone();

        debug!(
            received = raw.len(),
            kept = fields.len(),
            "Normalized search parameters"
        );

        Self { fields, flags }
    }

    /// Returns one empty-valued record per allow-list entry.
    ///
    /// Group patterns are included under their literal `prefix_*` name.
    pub fn defaults(allow_list: &AllowList) -> FieldCollection {
        allow_list
            .entries()
            .map(|name| CrsField::new(name, FieldValue::text("")))
            .collect()
    }

    /// Returns the header fields present, in header order.
    pub fn header(&self) -> Vec<&CrsField> {
        HEADER_FIELDS
            .iter()
            .filter_map(|name| self.fields.find(name))
            .collect()
    }

    /// Returns the header fields as a name to value map.
    pub fn header_map(&self) -> Map<String, Value> {
        self.header()
            .into_iter()
            .map(|field| (field.name().to_string(), field.value().to_json_value()))
            .collect()
    }

    /// Returns the normalized parameters as a name to value map.
    pub fn params(&self) -> Map<String, Value> {
        self.fields.to_map()
    }

    /// Returns the flags latched by the first normalization in the process.
    pub fn flags(&self) -> &SearchFlags {
        &self.flags
    }

    /// Returns the record named `name` for metadata attachment.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut CrsField> {
        self.fields.find_mut(name)
    }

    /// Flattens the parameters back into raw pairs.
    ///
    /// Lists held by a group of `allow_list` are re-expanded into
    /// `name_item = "1"` pairs. Every other value is passed through as is, so
    /// feeding the result back into normalization yields the same fields.
    pub fn flatten(&self, allow_list: &AllowList) -> Vec<(String, FieldValue)> {
        let mut pairs = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            match field.value() {
                FieldValue::List(items) if allow_list.is_group(field.name()) => {
                    for item in items {
                        pairs.push((format!("{}_{}", field.name(), item), FieldValue::text("1")));
                    }
                }
                value => pairs.push((field.name().to_string(), value.clone())),
            }
        }
        pairs
    }
}

impl CrsFieldSource for SmartSearchParameters {
    fn find(&self, name: &str) -> Option<&CrsField> {
        self.fields.find(name)
    }

    fn all(&self) -> &FieldCollection {
        &self.fields
    }

    fn forget(&mut self, name: &str) {
        self.fields.forget(name);
    }
}

impl fmt::Display for SmartSearchParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

fn append_to_group(fields: &mut FieldCollection, tag: &str, suffix: &str) {
    match fields.find_mut(tag) {
        Some(field) => {
            let mut items = match field.value() {
                FieldValue::List(items) => items.clone(),
                FieldValue::Null => Vec::new(),
                other => vec![other.to_text()],
            };
            items.push(suffix.to_string());
            field.set_value(FieldValue::List(items));
        }
        None => fields.push(CrsField::new(tag, FieldValue::List(vec![suffix.to_string()]))),
    }
}

/// Derives `tdc` as `"<tmin>-<tmax>"` when it is missing.
fn derive_tdc(fields: &mut FieldCollection) {
    if fields.value("tdc").is_some_and(|tdc| !tdc.is_blank()) {
        return;
    }
    let (Some(tmin), Some(tmax)) = (fields.value("tmin"), fields.value("tmax")) else {
        return;
    };
    if tmin.is_blank() || tmax.is_blank() {
        return;
    }
    let tdc = format!("{}-{}", tmin.to_int(), tmax.to_int());
    fields.push(CrsField::new("tdc", FieldValue::Text(tdc)));
}
