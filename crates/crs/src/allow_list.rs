//! The table of recognized CRS search fields.
//!
//! Entries are either literal field names (`epc`, `ibeid`) or group patterns
//! of the form `prefix_*`. A pattern matches any request key
//! `prefix_<suffix>` and collects the suffixes into a list stored under
//! `prefix`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// All valid CRS search fields.
pub const CRS_FIELDS: &[&str] = &[
    // header (ibeid, ctype_id, tab, uniqid, debug, test, debug_opts, test_url)
    "header_*",
    // subaccount id
    "ibeid",
    "agid",
    // mask attributes
    "ctype_id",
    "tab",
    "uniqid",
    // basic search
    "epc",
    "ka1",
    "ka2",
    "ka3",
    "ka4",
    "ka5",
    "vnd",
    "bsd",
    "tmin",
    "tmax",
    "tdc",
    "rgcs",
    "htn",
    "gid",
    "stc",
    "hon",
    "zhc",
    "toc",
    "ahc",
    "zac",
    "vpc",
    "ctyiso",
    "htc",
    "lang",
    "hsc",
    "sid",
    "old_ppc",
    // debug
    "debug",
    "test",
    "debug_opts",
    "test_url",
    // facts
    "fct_*",
    "fct",
    // subs (stypes)
    "sub_*",
    "sub",
    "filter",
    "sort",
    "offset",
    "toffset",
    "extras",
];

/// Administrative fields extracted into the header projection, in order.
pub const HEADER_FIELDS: &[&str] = &[
    "ibeid",
    "ctype_id",
    "tab",
    "uniqid",
    "debug",
    "test",
    "debug_opts",
    "test_url",
];

/// Splits a key into `<tag>_<suffix>`. Unanchored and case-insensitive.
const TAG_PATTERN: &str = r"(?i)([a-z]+)_(.+)";

/// Suffix marking a group pattern entry.
const GROUP_SUFFIX: &str = "_*";

/// How a request key splits against the tag pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedKey<'a> {
    /// The letters before the first underscore of the match.
    pub tag: &'a str,
    /// Everything after that underscore.
    pub suffix: &'a str,
}

/// A read-only set of recognized field names and group patterns.
#[derive(Debug, Clone)]
pub struct AllowList {
    entries: Vec<String>,
    literal: HashSet<String>,
    groups: HashSet<String>,
    tag_pattern: Regex,
}

impl AllowList {
    /// Builds an allow-list from its entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let literal = entries.iter().cloned().collect();
        let groups = entries
            .iter()
            .filter_map(|entry| entry.strip_suffix(GROUP_SUFFIX))
            .map(String::from)
            .collect();

        Self {
            entries,
            literal,
            groups,
            tag_pattern: Regex::new(TAG_PATTERN).expect("tag pattern is a valid regex"),
        }
    }

    /// Returns the process-wide default table built from [`CRS_FIELDS`].
    pub fn crs() -> &'static AllowList {
        static DEFAULT: OnceLock<AllowList> = OnceLock::new();
        DEFAULT.get_or_init(|| AllowList::new(CRS_FIELDS.iter().copied()))
    }

    /// Returns the entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns `true` if `key` is a literal entry of the table.
    ///
    /// Pattern entries are literal entries too: `contains("fct_*")` holds.
    pub fn contains(&self, key: &str) -> bool {
        self.literal.contains(key)
    }

    /// Returns `true` if `prefix_*` is in the table.
    pub fn is_group(&self, prefix: &str) -> bool {
        self.groups.contains(prefix)
    }

    /// Returns `true` if a record named `name` may exist.
    pub fn recognizes(&self, name: &str) -> bool {
        self.contains(name) || self.is_group(name)
    }

    /// Splits a request key against the tag pattern.
    pub fn split_key<'a>(&self, key: &'a str) -> Option<TaggedKey<'a>> {
        let captures = self.tag_pattern.captures(key)?;
        let tag = captures.get(1)?.as_str();
        let suffix = captures.get(2)?.as_str();
        Some(TaggedKey { tag, suffix })
    }
}

impl Default for AllowList {
    fn default() -> Self {
        AllowList::crs().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_and_group_entries() {
        let list = AllowList::crs();
        assert!(list.contains("epc"));
        assert!(list.contains("fct_*"));
        assert!(list.is_group("fct"));
        assert!(list.is_group("header"));
        assert!(!list.is_group("epc"));
        assert!(!list.contains("color"));
    }

    #[test]
    fn test_recognizes_group_prefix() {
        let list = AllowList::crs();
        assert!(list.recognizes("header"));
        assert!(list.recognizes("sub"));
        assert!(!list.recognizes("unknown"));
    }

    #[test]
    fn test_split_key() {
        let list = AllowList::crs();
        let split = list.split_key("fct_air").unwrap();
        assert_eq!(split.tag, "fct");
        assert_eq!(split.suffix, "air");

        let split = list.split_key("fct_air_con").unwrap();
        assert_eq!(split.suffix, "air_con");

        assert!(list.split_key("epc").is_none());
        assert!(list.split_key("fct_").is_none());
    }

    #[test]
    fn test_split_key_is_unanchored() {
        let list = AllowList::crs();
        let split = list.split_key("9fct_air").unwrap();
        assert_eq!(split.tag, "fct");
        assert_eq!(split.suffix, "air");
    }

    #[test]
    fn test_split_key_case_insensitive() {
        let list = AllowList::crs();
        let split = list.split_key("FCT_air").unwrap();
        assert_eq!(split.tag, "FCT");
        assert!(!list.is_group(split.tag));
    }

    #[test]
    fn test_entries_keep_order() {
        let list = AllowList::new(["b", "a_*", "c"]);
        let entries: Vec<_> = list.entries().collect();
        assert_eq!(entries, vec!["b", "a_*", "c"]);
    }
}
