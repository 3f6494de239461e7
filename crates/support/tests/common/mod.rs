//! Common fixtures for support integration tests.

#![allow(dead_code)]

use ors_support::AutocompleteDisplay;
use ors_support::HttpPoster;
use serde_json::Value;

/// An accommodation as listed by the search page.
pub struct Hotel {
    pub id: u64,
    pub name: &'static str,
    pub city: &'static str,
}

impl AutocompleteDisplay for Hotel {
    fn autocomplete_key(&self) -> Value {
        Value::from(self.id)
    }

    fn autocomplete_title(&self) -> String {
        format!("{} ({})", self.name, self.city)
    }

    fn autocomplete_tab_title(&self) -> Option<String> {
        Some(self.name.to_string())
    }

    fn autocomplete_icon(&self) -> String {
        "fa fa-bed".to_string()
    }
}

pub fn hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: 101,
            name: "Hotel Slon",
            city: "Ljubljana",
        },
        Hotel {
            id: 102,
            name: "Grand Hotel Toplice",
            city: "Bled",
        },
    ]
}

/// A poster that verifies certificates, as the local test server is plain HTTP.
pub fn poster() -> HttpPoster {
    HttpPoster::new(true)
}
