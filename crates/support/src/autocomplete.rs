//! Item lists for jQuery autocomplete widgets.
//!
//! A [`SmartAutocomplete`] collects [`AutocompleteItem`]s either from models
//! implementing [`AutocompleteDisplay`] or from a callback that maps arbitrary
//! items. Serialized, the list is what the front end's `SmartAutocomplete`
//! script expects:
//!
//! ```json
//! [{"value": 12, "label": "Hotel Slon", "icon": "fa fa-bed", "tab": "Slon"}]
//! ```
//!
//! # Example
//!
//! ```
//! use ors_support::autocomplete::{AutocompleteItem, SmartAutocomplete};
//!
//! let cities = ["Ljubljana", "Bled"];
//! let ac = SmartAutocomplete::from_callback(cities, |name| {
//!     AutocompleteItem::new(name, name, "fa fa-map-marker", name)
//! });
//! assert_eq!(ac.len(), 2);
//!
//! let empty = SmartAutocomplete::new();
//! assert_eq!(empty.to_list()[0].label, "N results");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::error::{SupportError, SupportResult};

/// Label of the error item shown for an empty list.
pub const NO_RESULTS_LABEL: &str = "N results";

/// Icon of the error item.
pub const ERROR_ICON: &str = "fa fa-warning";

/// Display attributes of a model shown in autocomplete lists.
pub trait AutocompleteDisplay {
    /// The value submitted when the item is chosen.
    fn autocomplete_key(&self) -> Value;

    /// The text shown in the list.
    fn autocomplete_title(&self) -> String;

    /// The text shown on the tag/tab once chosen. Falls back to
    /// [`autocomplete_title`](Self::autocomplete_title) when `None` or empty.
    fn autocomplete_tab_title(&self) -> Option<String> {
        None
    }

    /// CSS class of the icon shown in front of the item. May be empty.
    fn autocomplete_icon(&self) -> String {
        String::new()
    }
}

fn tab_title(model: &(impl AutocompleteDisplay + ?Sized)) -> String {
    model
        .autocomplete_tab_title()
        .filter(|tab| !tab.is_empty())
        .unwrap_or_else(|| model.autocomplete_title())
}

/// One entry of an autocomplete list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteItem {
    /// Submitted value; `null` for the error item.
    pub value: Value,
    /// Marks the "no results" item.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
    /// Text shown in the list.
    pub label: String,
    /// Icon CSS class.
    #[serde(default)]
    pub icon: String,
    /// Tag/tab text; `null` for the error item.
    #[serde(default)]
    pub tab: Option<String>,
}

impl AutocompleteItem {
    /// Creates a regular item.
    pub fn new(
        value: impl Into<Value>,
        label: impl Into<String>,
        icon: impl Into<String>,
        tab: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            error: false,
            label: label.into(),
            icon: icon.into(),
            tab: Some(tab.into()),
        }
    }

    /// Creates the item displayed when there is nothing to choose from.
    pub fn error(label: impl Into<String>) -> Self {
        Self {
            value: Value::Null,
            error: true,
            label: label.into(),
            icon: ERROR_ICON.to_string(),
            tab: None,
        }
    }

    /// Creates an item from a model's display attributes.
    pub fn from_model(model: &(impl AutocompleteDisplay + ?Sized)) -> Self {
        Self {
            value: model.autocomplete_key(),
            error: false,
            label: model.autocomplete_title(),
            icon: model.autocomplete_icon(),
            tab: Some(tab_title(model)),
        }
    }

    /// Returns the item as a JSON object.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("value".to_string(), self.value.clone());
        if self.error {
            map.insert("error".to_string(), Value::Bool(true));
        }
        map.insert("label".to_string(), Value::String(self.label.clone()));
        map.insert("icon".to_string(), Value::String(self.icon.clone()));
        map.insert(
            "tab".to_string(),
            self.tab.clone().map(Value::String).unwrap_or(Value::Null),
        );
        Value::Object(map)
    }
}

/// Something that can be pushed onto a [`SmartAutocomplete`].
pub enum AutocompleteEntry<'a> {
    /// A ready-made item.
    Record(AutocompleteItem),
    /// A model whose display attributes become the item.
    Model(&'a dyn AutocompleteDisplay),
}

impl AutocompleteEntry<'_> {
    /// Resolves the entry into an item.
    pub fn into_item(self) -> AutocompleteItem {
        match self {
            AutocompleteEntry::Record(item) => item,
            AutocompleteEntry::Model(model) => AutocompleteItem::from_model(model),
        }
    }
}

impl From<AutocompleteItem> for AutocompleteEntry<'_> {
    fn from(item: AutocompleteItem) -> Self {
        AutocompleteEntry::Record(item)
    }
}

impl<'a> From<&'a dyn AutocompleteDisplay> for AutocompleteEntry<'a> {
    fn from(model: &'a dyn AutocompleteDisplay) -> Self {
        AutocompleteEntry::Model(model)
    }
}

impl fmt::Debug for AutocompleteEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutocompleteEntry::Record(item) => f.debug_tuple("Record").field(item).finish(),
            AutocompleteEntry::Model(model) => f
                .debug_tuple("Model")
                .field(&model.autocomplete_key())
                .finish(),
        }
    }
}

/// An autocomplete list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmartAutocomplete {
    list: Vec<AutocompleteItem>,
}

impl SmartAutocomplete {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from models.
    pub fn from_models<'a, I, M>(models: I) -> Self
    where
        I: IntoIterator<Item = &'a M>,
        M: AutocompleteDisplay + 'a,
    {
        let mut ac = Self::new();
        ac.add_models(models);
        ac
    }

    /// Creates a list by mapping each of `items` with `callback`.
    pub fn from_callback<I, F>(items: I, callback: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> AutocompleteItem,
    {
        let list: Vec<_> = items.into_iter().map(callback).collect();
        debug!(items = list.len(), "Autocomplete list built from callback");
        Self { list }
    }

    /// Creates a list holding only an error item labelled `error`.
    pub fn with_no_results(error: impl Into<String>) -> Self {
        Self {
            list: vec![AutocompleteItem::error(error)],
        }
    }

    /// Appends an item or model.
    pub fn push<'a>(&mut self, entry: impl Into<AutocompleteEntry<'a>>) {
        self.list.push(entry.into().into_item());
    }

    /// Appends models to the end of the list.
    pub fn add_models<'a, I, M>(&mut self, models: I)
    where
        I: IntoIterator<Item = &'a M>,
        M: AutocompleteDisplay + 'a,
    {
        self.list
            .extend(models.into_iter().map(AutocompleteItem::from_model));
    }

    /// Returns the number of items pushed so far.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the items, or a single "N results" error item when empty.
    pub fn to_list(&self) -> Vec<AutocompleteItem> {
        if self.list.is_empty() {
            vec![AutocompleteItem::error(NO_RESULTS_LABEL)]
        } else {
            self.list.clone()
        }
    }

    /// Returns [`to_list`](Self::to_list) as a JSON array.
    pub fn to_value(&self) -> Value {
        Value::Array(self.to_list().iter().map(AutocompleteItem::to_value).collect())
    }

    /// Returns [`to_list`](Self::to_list) as a JSON string.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl fmt::Display for SmartAutocomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// A preselected tag of an autocomplete widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartAutocompleteTab {
    /// Submitted value.
    pub value: Value,
    /// Text shown in the list.
    pub label: String,
    /// Tag text.
    #[serde(default)]
    pub tab: String,
}

impl SmartAutocompleteTab {
    /// Creates a tab.
    pub fn new(value: impl Into<Value>, label: impl Into<String>, tab: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            tab: tab.into(),
        }
    }

    /// Creates a tab from a model's display attributes.
    pub fn with_model(model: &(impl AutocompleteDisplay + ?Sized)) -> Self {
        Self {
            value: model.autocomplete_key(),
            label: model.autocomplete_title(),
            tab: tab_title(model),
        }
    }

    /// Creates a tab from a JSON object with `value`, `label` and an optional
    /// `tab`.
    pub fn with_value(value: &Value) -> SupportResult<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| SupportError::invalid_format("autocomplete tab must be an object"))?;
        let tab_value = map
            .get("value")
            .cloned()
            .ok_or_else(|| SupportError::invalid_format("autocomplete tab is missing 'value'"))?;
        let label = map
            .get("label")
            .map(scalar_text)
            .ok_or_else(|| SupportError::invalid_format("autocomplete tab is missing 'label'"))?;
        let tab = map.get("tab").map(scalar_text).unwrap_or_default();
        Ok(Self::new(tab_value, label, tab))
    }

    /// Parses a tab from JSON text. See [`with_value`](Self::with_value).
    pub fn with_json(json: &str) -> SupportResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::with_value(&value)
    }

    /// Creates one tab per model.
    pub fn tabs_from_models<'a, I, M>(models: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a M>,
        M: AutocompleteDisplay + 'a,
    {
        models.into_iter().map(Self::with_model).collect()
    }

    /// Creates one tab per item with `callback`.
    pub fn tabs_with_callback<I, F>(items: I, callback: F) -> Vec<Self>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Self,
    {
        items.into_iter().map(callback).collect()
    }

    /// Returns the tab as a JSON object.
    pub fn to_value(&self) -> Value {
        json!({
            "value": self.value,
            "label": self.label,
            "tab": self.tab,
        })
    }

    /// Returns the tab as a JSON string.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl fmt::Display for SmartAutocompleteTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct City {
        id: u32,
        name: &'static str,
        short: Option<&'static str>,
    }

    impl AutocompleteDisplay for City {
        fn autocomplete_key(&self) -> Value {
            Value::from(self.id)
        }

        fn autocomplete_title(&self) -> String {
            self.name.to_string()
        }

        fn autocomplete_tab_title(&self) -> Option<String> {
            self.short.map(str::to_string)
        }

        fn autocomplete_icon(&self) -> String {
            "fa fa-map-marker".to_string()
        }
    }

    fn cities() -> Vec<City> {
        vec![
            City {
                id: 1,
                name: "Ljubljana",
                short: Some("LJU"),
            },
            City {
                id: 2,
                name: "Bled",
                short: Some(""),
            },
        ]
    }

    #[test]
    fn test_from_models() {
        let ac = SmartAutocomplete::from_models(&cities());
        let list = ac.to_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].value, json!(1));
        assert_eq!(list[0].tab.as_deref(), Some("LJU"));
        assert_eq!(list[1].tab.as_deref(), Some("Bled"));
    }

    #[test]
    fn test_json_shape() {
        let ac = SmartAutocomplete::from_models(&cities()[..1]);
        assert_eq!(
            ac.to_json(),
            r#"[{"value":1,"label":"Ljubljana","icon":"fa fa-map-marker","tab":"LJU"}]"#
        );
    }

    #[test]
    fn test_empty_list_yields_error_item() {
        let ac = SmartAutocomplete::new();
        assert!(ac.is_empty());
        assert_eq!(
            ac.to_value(),
            json!([{
                "value": null,
                "error": true,
                "label": "N results",
                "icon": "fa fa-warning",
                "tab": null
            }])
        );
    }

    #[test]
    fn test_with_no_results() {
        let ac = SmartAutocomplete::with_no_results("No hotels found");
        assert!(!ac.is_empty());
        let list = ac.to_list();
        assert!(list[0].error);
        assert_eq!(list[0].label, "No hotels found");
    }

    #[test]
    fn test_push_record_and_model() {
        let cities = cities();
        let mut ac = SmartAutocomplete::new();
        ac.push(AutocompleteItem::new("x", "X", "", "X"));
        ac.push(&cities[0] as &dyn AutocompleteDisplay);
        assert_eq!(ac.len(), 2);
        assert_eq!(ac.to_list()[1].label, "Ljubljana");
    }

    #[test]
    fn test_add_models_appends() {
        let cities = cities();
        let mut ac = SmartAutocomplete::from_callback([7], |id| {
            AutocompleteItem::new(id, format!("#{id}"), "", "")
        });
        ac.add_models(&cities);
        let labels: Vec<_> = ac.to_list().into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["#7", "Ljubljana", "Bled"]);
    }

    #[test]
    fn test_item_deserialize() {
        let item: AutocompleteItem =
            serde_json::from_str(r#"{"value":3,"label":"Piran","icon":"","tab":"Piran"}"#)
                .unwrap();
        assert!(!item.error);
        assert_eq!(item.to_value()["label"], "Piran");
    }

    #[test]
    fn test_tab_with_model() {
        let cities = cities();
        let tab = SmartAutocompleteTab::with_model(&cities[1]);
        assert_eq!(tab.to_json(), r#"{"value":2,"label":"Bled","tab":"Bled"}"#);
    }

    #[test]
    fn test_tab_with_json() {
        let tab = SmartAutocompleteTab::with_json(r#"{"value": "12", "label": "Slon"}"#).unwrap();
        assert_eq!(tab, SmartAutocompleteTab::new("12", "Slon", ""));

        let err = SmartAutocompleteTab::with_json(r#"{"label": "Slon"}"#).unwrap_err();
        assert!(matches!(err, SupportError::InvalidFormat { .. }));
        assert!(SmartAutocompleteTab::with_json("[1]").is_err());
        assert!(matches!(
            SmartAutocompleteTab::with_json("{").unwrap_err(),
            SupportError::Json(_)
        ));
    }

    #[test]
    fn test_tabs_helpers() {
        let tabs = SmartAutocompleteTab::tabs_from_models(&cities());
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].tab, "LJU");

        let tabs = SmartAutocompleteTab::tabs_with_callback(["a", "b"], |s| {
            SmartAutocompleteTab::new(s, s.to_uppercase(), "")
        });
        assert_eq!(tabs[1].label, "B");
    }
}
