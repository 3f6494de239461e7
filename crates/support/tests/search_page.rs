//! Search page assembly: normalized parameters feeding helpers, tabs and
//! autocomplete lists.

mod common;

use ors_support::common::{
    KeywordOperator, array_only, contains_keywords_str, extrim, fact_icon, inc_date, map_prefixed,
};
use ors_support::ors_crs::{
    AllowList, CrsFieldSource, FieldValue, FlagLatch, SmartSearchParameters,
};
use ors_support::{
    AutocompleteItem, SmartAutocomplete, SmartAutocompleteTab, SmartTab, SupportConfig,
};
use serde_json::json;

use common::hotels;

fn normalize(pairs: &[(&str, &str)]) -> SmartSearchParameters {
    let raw: Vec<_> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), FieldValue::text(*v)))
        .collect();
    SmartSearchParameters::normalize(&raw, AllowList::crs(), &FlagLatch::new())
}

// ============================================================================
// Parameters and helpers
// ============================================================================

#[test]
fn test_fact_icons_for_normalized_facts() {
    let params = normalize(&[("fct_air", "1"), ("fct_wifi", "1"), ("fct_sauna", "1")]);
    let facts = params.find("fct").unwrap().value().as_list().unwrap().to_vec();
    let icons: Vec<_> = facts.iter().filter_map(|code| fact_icon(code)).collect();
    assert_eq!(icons.len(), 2);
    assert_eq!(icons[0].icon, "glyphicons glyphicons-snowflake");
}

#[test]
fn test_travel_dates_formatting() {
    let config = SupportConfig::default();
    let params = normalize(&[("vnd", "010726"), ("bsd", "15.07.2026")]);

    let from = params.find("vnd").unwrap().value().to_text();
    let to = params.find("bsd").unwrap().value().to_text();
    assert_eq!(config.format_date(&from), "01.07.2026");
    assert_eq!(inc_date(&to, 7, 0, 0, &config.date_format), "22.07.2026");
}

#[test]
fn test_infants_use_configured_age() {
    let params = normalize(&[("epc", "2"), ("ka1", "1"), ("ka2", "3"), ("ka4", "2")]);
    assert_eq!(SupportConfig::default().infants(&params), 1);

    let config = SupportConfig {
        infant_age: 4,
        ..Default::default()
    };
    assert_eq!(config.infants(&params), 3);
}

#[test]
fn test_params_map_helpers() {
    let params = normalize(&[("epc", "2"), ("sub_ai", "1"), ("ka1", "5")]);
    let map = params.to_map();

    let only = array_only(&map, &["epc", "ka1"]);
    assert_eq!(serde_json::Value::Object(only), json!({"epc": "2", "ka1": "5"}));

    let counts = map_prefixed(&map, "ka");
    assert_eq!(counts.get("1"), Some(&json!("5")));
}

#[test]
fn test_keyword_filtering_of_region_list() {
    let regions = extrim("Bled, Bohinj, 0, Piran ,", ",");
    assert_eq!(regions, vec!["Bled", "Bohinj", "Piran"]);
    assert!(contains_keywords_str(
        "Počitnice na Bledu in v Bohinju",
        "bled bohinj",
        " ",
        KeywordOperator::And
    ));
}

// ============================================================================
// Autocomplete and tabs
// ============================================================================

#[test]
fn test_autocomplete_from_hotels() {
    let hotels = hotels();
    let ac = SmartAutocomplete::from_models(&hotels);
    assert_eq!(
        ac.to_value(),
        json!([
            {"value": 101, "label": "Hotel Slon (Ljubljana)", "icon": "fa fa-bed", "tab": "Hotel Slon"},
            {"value": 102, "label": "Grand Hotel Toplice (Bled)", "icon": "fa fa-bed", "tab": "Grand Hotel Toplice"}
        ])
    );
}

#[test]
fn test_autocomplete_filtered_to_nothing() {
    let hotels = hotels();
    let ac = SmartAutocomplete::from_callback(
        hotels.iter().filter(|h| h.city == "Piran"),
        |h| AutocompleteItem::new(h.id, h.name, "", h.name),
    );
    assert!(ac.is_empty());
    assert_eq!(
        ac.to_string(),
        r#"[{"value":null,"error":true,"label":"N results","icon":"fa fa-warning","tab":null}]"#
    );
}

#[test]
fn test_default_tags_from_hotels() {
    let tabs = SmartAutocompleteTab::tabs_from_models(&hotels());
    let json: Vec<_> = tabs.iter().map(SmartAutocompleteTab::to_value).collect();
    assert_eq!(
        json[1],
        json!({
            "value": 102,
            "label": "Grand Hotel Toplice (Bled)",
            "tab": "Grand Hotel Toplice"
        })
    );
}

#[test]
fn test_tab_carries_search_header() {
    let params = normalize(&[
        ("ctype_id", "hotel"),
        ("tab", "hotel"),
        ("uniqid", "a1"),
        ("epc", "2"),
    ]);
    let header = params.header_map();

    let mut tab = SmartTab::new("hotel", "Hotels").icon("fa fa-bed");
    for (name, value) in header {
        tab = tab.with(name, value);
    }
    let restored = SmartTab::with_json(&tab.to_json()).unwrap();
    assert_eq!(restored.extra_param("uniqid"), Some(&json!("a1")));
    assert_eq!(restored.extra_param("epc"), None);
}
