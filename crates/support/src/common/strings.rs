//! String helpers.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::error::SupportError;

static OBJECT_CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\d\*+").expect("category pattern is a valid regex"));

/// How [`contains_keywords`] combines its keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordOperator {
    /// At least one keyword must occur.
    #[default]
    Or,
    /// Every keyword must occur.
    And,
}

impl FromStr for KeywordOperator {
    type Err = SupportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OR" => Ok(KeywordOperator::Or),
            "AND" => Ok(KeywordOperator::And),
            other => Err(SupportError::invalid_format(format!(
                "unknown keyword operator '{other}'"
            ))),
        }
    }
}

/// Returns `true` if `haystack` contains the keywords, ignoring case.
///
/// Keywords are trimmed before matching.
pub fn contains_keywords<S: AsRef<str>>(
    haystack: &str,
    keywords: &[S],
    operator: KeywordOperator,
) -> bool {
    let haystack = haystack.to_lowercase();
    let mut found = keywords
        .iter()
        .map(|keyword| haystack.contains(&keyword.as_ref().trim().to_lowercase()));

    match operator {
        KeywordOperator::Or => found.any(|hit| hit),
        KeywordOperator::And => found.all(|hit| hit),
    }
}

/// Like [`contains_keywords`], with the keywords given as one
/// `delimiter`-separated string.
pub fn contains_keywords_str(
    haystack: &str,
    keywords: &str,
    delimiter: &str,
    operator: KeywordOperator,
) -> bool {
    let keywords: Vec<&str> = keywords.trim().split(delimiter).collect();
    contains_keywords(haystack, &keywords, operator)
}

/// Splits `text` on `delimiter` and trims every part.
///
/// Blank parts and parts equal to `"0"` are dropped.
///
/// ```
/// use ors_support::common::extrim;
///
/// assert_eq!(extrim(" air, wifi ,, 0,pool ", ","), vec!["air", "wifi", "pool"]);
/// ```
pub fn extrim(text: &str, delimiter: &str) -> Vec<String> {
    if text.is_empty() || text == "0" {
        return Vec::new();
    }
    text.split(delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty() && *part != "0")
        .map(str::to_string)
        .collect()
}

/// Strips the star category from an accommodation name (`"Hotel Slon 4*"`
/// becomes `"Hotel Slon"`).
pub fn remove_object_category(name: &str) -> String {
    OBJECT_CATEGORY.replace_all(name, "").into_owned()
}

/// Returns a random 32 character lowercase hex string.
pub fn make_unique_hash() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_keywords_or() {
        assert!(contains_keywords(
            "Hotel Slon Ljubljana",
            &["bled", "SLON"],
            KeywordOperator::Or
        ));
        assert!(!contains_keywords(
            "Hotel Slon Ljubljana",
            &["bled", "piran"],
            KeywordOperator::Or
        ));
    }

    #[test]
    fn test_contains_keywords_and() {
        assert!(contains_keywords(
            "Hotel Slon Ljubljana",
            &["hotel ", " ljubljana"],
            KeywordOperator::And
        ));
        assert!(!contains_keywords(
            "Hotel Slon Ljubljana",
            &["hotel", "bled"],
            KeywordOperator::And
        ));
    }

    #[test]
    fn test_contains_keywords_unicode_case() {
        assert!(contains_keywords("Šmarješke Toplice", &["šmarje"], KeywordOperator::Or));
    }

    #[test]
    fn test_contains_keywords_str() {
        assert!(contains_keywords_str(
            "Apartma Bohinj",
            " bohinj apartma ",
            " ",
            KeywordOperator::And
        ));
        assert!(contains_keywords_str(
            "Apartma Bohinj",
            "bled;bohinj",
            ";",
            KeywordOperator::Or
        ));
    }

    #[test]
    fn test_keyword_operator_from_str() {
        assert_eq!("or".parse::<KeywordOperator>().unwrap(), KeywordOperator::Or);
        assert_eq!("AND".parse::<KeywordOperator>().unwrap(), KeywordOperator::And);
        assert!("xor".parse::<KeywordOperator>().is_err());
    }

    #[test]
    fn test_extrim() {
        assert_eq!(extrim("a, b ,c", ","), vec!["a", "b", "c"]);
        assert_eq!(extrim("a|0| |b", "|"), vec!["a", "b"]);
        assert!(extrim("", ",").is_empty());
        assert!(extrim("0", ",").is_empty());
    }

    #[test]
    fn test_remove_object_category() {
        assert_eq!(remove_object_category("Hotel Slon 4*"), "Hotel Slon");
        assert_eq!(remove_object_category("Hotel Lev 5*** Superior"), "Hotel Lev Superior");
        assert_eq!(remove_object_category("Vila 22"), "Vila 22");
    }

    #[test]
    fn test_make_unique_hash() {
        let a = make_unique_hash();
        let b = make_unique_hash();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
