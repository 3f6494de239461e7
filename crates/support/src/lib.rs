//! # ors-support - Support helpers for ORS search pages
//!
//! This crate bundles the helpers the ORS search front end leans on next to
//! the CRS field normalization in [`ors_crs`]:
//!
//! - [`common`] - Formatting and parsing utilities (prices, dates, keywords,
//!   JSON cleanup, debug dumps, fact icons)
//! - [`autocomplete`] - Item lists for autocomplete widgets
//! - [`tab`] - Search page tab descriptors
//! - [`transport`] - Blocking HTTP POST to CRS endpoints
//! - [`SupportConfig`] - Environment driven configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use ors_support::common::{KeywordOperator, contains_keywords, price};
//! use ors_support::tab::SmartTab;
//!
//! assert_eq!(price(1234.5, 2, "."), "1234.50");
//! assert!(contains_keywords("Hotel Slon Ljubljana", &["slon"], KeywordOperator::Or));
//!
//! let tab = SmartTab::new("hotel", "Hotels").icon("fa fa-bed");
//! assert_eq!(tab.to_value()["color_class"], "bg-primary light");
//! ```
//!
//! ## Logging
//!
//! All modules emit [`tracing`] events. Call [`init_logging`] once at startup
//! to install a formatting subscriber; `RUST_LOG` overrides the level.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod autocomplete;
pub mod common;
pub mod config;
pub mod error;
pub mod tab;
pub mod transport;

pub use autocomplete::{
    AutocompleteDisplay, AutocompleteEntry, AutocompleteItem, SmartAutocomplete,
    SmartAutocompleteTab,
};
pub use config::SupportConfig;
pub use error::{SupportError, SupportResult, TransportError};
pub use tab::SmartTab;
pub use transport::HttpPoster;

pub use ors_crs;

/// Initializes the tracing subscriber for logging.
///
/// # Arguments
///
/// * `level` - The log level (e.g., "info", "debug", "trace")
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ors_support={level},ors_crs={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
