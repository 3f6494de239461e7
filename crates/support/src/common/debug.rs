//! HTML debug dumps.
//!
//! The `*_debug` variants only produce output when the search request that
//! latched [`FlagLatch::global`] asked for debugging.

use std::backtrace::Backtrace;
use std::fmt::Debug;

use ors_crs::FlagLatch;

fn divider() -> String {
    format!("{}\n", "=".repeat(80))
}

/// Renders `data` inside a `<pre>` block framed by divider lines.
///
/// A non-empty `title` is printed as `[title]:` above the data. With
/// `trace`, a backtrace of the caller precedes the title.
///
/// ```
/// use ors_support::common::pre;
///
/// let html = pre(&vec![1, 2], "ids", false);
/// assert!(html.starts_with("<pre>===="));
/// assert!(html.contains("[ids]:\n"));
/// ```
pub fn pre<T: Debug + ?Sized>(data: &T, title: &str, trace: bool) -> String {
    let title = if title.is_empty() {
        String::new()
    } else {
        format!("[{title}]:\n")
    };
    let trace = if trace {
        format!("{}\n", Backtrace::force_capture())
    } else {
        String::new()
    };
    let divider = divider();
    format!("<pre>{divider}{trace}{title}{data:#?}\n{divider}</pre>")
}

/// Prints [`pre`] to standard output.
pub fn ppre<T: Debug + ?Sized>(data: &T, title: &str, trace: bool) {
    print!("{}", pre(data, title, trace));
}

/// Like [`pre`] with a backtrace, but only when debugging is latched on.
/// Returns an empty string otherwise.
pub fn pre_debug<T: Debug + ?Sized>(data: &T, title: &str) -> String {
    pre_debug_with(FlagLatch::global(), data, title)
}

/// [`pre_debug`] against an explicit latch.
pub fn pre_debug_with<T: Debug + ?Sized>(latch: &FlagLatch, data: &T, title: &str) -> String {
    if latch.is_debug() {
        pre(data, title, true)
    } else {
        String::new()
    }
}

/// Prints [`pre_debug`] to standard output.
pub fn ppre_debug<T: Debug + ?Sized>(data: &T, title: &str) {
    let out = pre_debug(data, title);
    if !out.is_empty() {
        print!("{out}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ors_crs::SearchFlags;

    #[test]
    fn test_pre_layout() {
        let html = pre("hello", "", false);
        let divider = "=".repeat(80);
        assert_eq!(html, format!("<pre>{divider}\n\"hello\"\n{divider}\n</pre>"));
    }

    #[test]
    fn test_pre_title() {
        let html = pre(&42, "answer", false);
        assert!(html.contains("[answer]:\n42\n"));
    }

    #[test]
    fn test_pre_debug_off() {
        let latch = FlagLatch::new();
        latch.latch_with(SearchFlags::default);
        assert_eq!(pre_debug_with(&latch, "secret", "title"), "");
    }

    #[test]
    fn test_pre_debug_on() {
        let latch = FlagLatch::new();
        latch.latch_with(|| SearchFlags {
            debug: true,
            ..Default::default()
        });
        let html = pre_debug_with(&latch, "visible", "title");
        assert!(html.contains("[title]:\n\"visible\""));
    }

    #[test]
    fn test_pre_debug_unlatched() {
        let latch = FlagLatch::new();
        assert_eq!(pre_debug_with(&latch, "x", ""), "");
    }
}
