//! Debug and test switches captured from the first search request.
//!
//! The first normalization in a process latches four values from the raw
//! request: `debug`, `debug_opts`, `test` and `test_url`. They stay fixed for
//! the rest of the process, whatever later requests carry.

use std::sync::OnceLock;

use serde::Serialize;
use tracing::info;

use crate::value::FieldValue;

/// The latched debug/test switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFlags {
    /// Debug mode is on.
    pub debug: bool,
    /// Debug options.
    pub debug_opts: String,
    /// Test mode is on.
    pub test: bool,
    /// Test URL.
    pub test_url: String,
}

impl SearchFlags {
    /// Reads the switches from raw request pairs.
    ///
    /// Booleans are on when the value is not blank. Strings take the text of
    /// a non-blank value and are empty otherwise.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a FieldValue)>,
    {
        let mut flags = SearchFlags::default();
        for (key, value) in pairs {
            match key {
                "debug" => flags.debug = !value.is_blank(),
                "test" => flags.test = !value.is_blank(),
                "debug_opts" => flags.debug_opts = text_or_empty(value),
                "test_url" => flags.test_url = text_or_empty(value),
                _ => {}
            }
        }
        flags
    }
}

fn text_or_empty(value: &FieldValue) -> String {
    if value.is_blank() {
        String::new()
    } else {
        value.to_text()
    }
}

/// A set-once holder for [`SearchFlags`].
///
/// Concurrent first calls latch exactly once and every reader observes the
/// same values.
#[derive(Debug, Default)]
pub struct FlagLatch {
    cell: OnceLock<SearchFlags>,
}

impl FlagLatch {
    /// Creates an unset latch.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the process-wide latch used by search normalization.
    pub fn global() -> &'static FlagLatch {
        static GLOBAL: FlagLatch = FlagLatch::new();
        &GLOBAL
    }

    /// Latches the flags produced by `init` unless already set, and returns
    /// the latched flags.
    pub fn latch_with(&self, init: impl FnOnce() -> SearchFlags) -> &SearchFlags {
        self.cell.get_or_init(|| {
            let flags = init();
            info!(
                debug = flags.debug,
                test = flags.test,
                debug_opts = %flags.debug_opts,
                test_url = %flags.test_url,
                "Search flags latched"
            );
            flags
        })
    }

    /// Returns the latched flags, if any.
    pub fn get(&self) -> Option<&SearchFlags> {
        self.cell.get()
    }

    /// Returns `true` if debug mode was latched on.
    pub fn is_debug(&self) -> bool {
        self.get().is_some_and(|flags| flags.debug)
    }

    /// Returns `true` if test mode was latched on.
    pub fn is_test(&self) -> bool {
        self.get().is_some_and(|flags| flags.test)
    }
}
