//! Common helpers for CRS search parameter tests.

#![allow(dead_code)]

use ors_crs::{AllowList, FieldValue, FlagLatch, SmartSearchParameters};

/// Builds owned raw pairs from string slices.
pub fn raw(pairs: &[(&str, &str)]) -> Vec<(String, FieldValue)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), FieldValue::text(*v)))
        .collect()
}

/// Normalizes `pairs` against the CRS allow-list with a private latch.
pub fn normalize(pairs: &[(&str, &str)]) -> SmartSearchParameters {
    SmartSearchParameters::normalize(&raw(pairs), AllowList::crs(), &FlagLatch::new())
}

/// A typical hotel search as submitted by the search form.
pub fn hotel_search() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ibeid", "12"),
        ("ctype_id", "pauschal"),
        ("tab", "hotel"),
        ("uniqid", "5f1c2a"),
        ("epc", "2"),
        ("ka1", "7"),
        ("ka2", "1"),
        ("vnd", "2026-07-01"),
        ("bsd", "2026-07-15"),
        ("tmin", "7"),
        ("tmax", "14"),
        ("fct_air", "1"),
        ("fct_wifi", "1"),
        ("sub_ai", "1"),
        ("utm_source", "newsletter"),
        ("_token", "abc123"),
    ]
}
