//! # ors-crs - CRS search fields for ORS
//!
//! This crate turns the raw parameters of an ORS search request into the set
//! of fields the CRS (central reservation system) search API understands.
//!
//! ## Overview
//!
//! - [`AllowList`] - The table of recognized field names and `prefix_*`
//!   group patterns
//! - [`SmartSearchParameters`] - Normalizes raw input against the allow-list
//! - [`CrsField`] / [`FieldCollection`] - The surviving field records
//! - [`CrsFieldSource`] - Lookup interface plus travel party counts
//! - [`FlagLatch`] - Debug/test switches captured once per process
//! - [`FieldStore`] - Storage boundary for field records
//!
//! ## Example
//!
//! ```
//! use ors_crs::{CrsFieldSource, SmartSearchParameters};
//!
//! let params = SmartSearchParameters::from_query("epc=2&ka1=5&tmin=100&tmax=300&utm=x");
//!
//! assert_eq!(params.adults(), 2);
//! assert_eq!(params.children(), 1);
//! assert_eq!(params.find("tdc").unwrap().value().to_text(), "100-300");
//! assert!(!params.has("utm"));
//! ```
//!
//! ## Errors
//!
//! Normalization never fails. Only decoding serialized input can, with
//! [`CrsError::InvalidInputFormat`]; use
//! [`SmartSearchParameters::from_json_or_empty`] to treat such input as empty.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod allow_list;
pub mod collection;
pub mod error;
pub mod field;
pub mod flags;
pub mod input;
pub mod params;
pub mod source;
pub mod store;
pub mod value;

pub use allow_list::{AllowList, CRS_FIELDS, HEADER_FIELDS};
pub use collection::FieldCollection;
pub use error::{CrsError, CrsResult};
pub use field::CrsField;
pub use flags::{FlagLatch, SearchFlags};
pub use input::SearchInput;
pub use params::SmartSearchParameters;
pub use source::{CHILD_AGE_FIELDS, CrsFieldSource, DEFAULT_INFANT_AGE};
pub use store::{FieldStore, MemoryFieldStore};
pub use value::FieldValue;
