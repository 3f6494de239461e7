//! Tabs of the ORS smart search page.
//!
//! Each tab carries its own id (usually a content type id), a title, an icon,
//! a bootstrap color class, the id of a saved search it restores, free-form
//! extra parameters and the route the front end opens with it.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{SupportError, SupportResult};

/// Color class used when none is given.
pub const DEFAULT_COLOR_CLASS: &str = "bg-primary light";

/// A search page tab.
///
/// ```
/// use ors_support::tab::SmartTab;
/// use serde_json::json;
///
/// let tab = SmartTab::new("hotel", "Hotels")
///     .icon("fa fa-bed")
///     .search_id("41")
///     .with("country", json!("SI"));
///
/// assert_eq!(tab.to_value()["extra_params"], json!({"country": "SI"}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartTab {
    id: String,
    title: String,
    color_class: String,
    icon: String,
    search_id: String,
    extra_params: Map<String, Value>,
    action: Option<String>,
}

impl SmartTab {
    /// Creates a tab with default color and no icon.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color_class: DEFAULT_COLOR_CLASS.to_string(),
            icon: String::new(),
            search_id: String::new(),
            extra_params: Map::new(),
            action: None,
        }
    }

    /// Creates a tab from a JSON object.
    ///
    /// `id` is required and `title` defaults to empty. The optional keys
    /// (`color_class`, `icon`, `search_id`, `action`, `extra_params`) are
    /// only taken when not blank.
    pub fn with_value(value: &Value) -> SupportResult<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| SupportError::invalid_format("smart tab must be an object"))?;

        let id = map
            .get("id")
            .filter(|id| !id.is_null())
            .map(scalar_text)
            .ok_or_else(|| SupportError::invalid_format("smart tab is missing 'id'"))?;
        let title = map.get("title").map(scalar_text).unwrap_or_default();

        let mut tab = Self::new(id, title);
        if let Some(color_class) = non_blank_text(map, "color_class") {
            tab.color_class = color_class;
        }
        if let Some(icon) = non_blank_text(map, "icon") {
            tab.icon = icon;
        }
        if let Some(search_id) = non_blank_text(map, "search_id") {
            tab.search_id = search_id;
        }
        if let Some(action) = non_blank_text(map, "action") {
            tab.action = Some(action);
        }
        if let Some(Value::Object(extra)) = map.get("extra_params") {
            tab.extra_params = extra.clone();
        }
        Ok(tab)
    }

    /// Parses a tab from JSON text. See [`with_value`](Self::with_value).
    pub fn with_json(json: &str) -> SupportResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::with_value(&value)
    }

    /// Replaces the id.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Sets the icon CSS class.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the bootstrap color class.
    pub fn color_class(mut self, color_class: impl Into<String>) -> Self {
        self.color_class = color_class.into();
        self
    }

    /// Sets the id of the saved search this tab restores.
    pub fn search_id(mut self, search_id: impl Into<String>) -> Self {
        self.search_id = search_id.into();
        self
    }

    /// Sets the route opened together with the tab.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Adds or replaces an extra parameter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_params.insert(name.into(), value.into());
        self
    }

    /// Returns the id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the extra parameter `name`.
    pub fn extra_param(&self, name: &str) -> Option<&Value> {
        self.extra_params.get(name)
    }

    /// Returns the tab as a JSON object.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(self.id.clone()));
        map.insert("title".to_string(), Value::String(self.title.clone()));
        map.insert(
            "color_class".to_string(),
            Value::String(self.color_class.clone()),
        );
        map.insert("icon".to_string(), Value::String(self.icon.clone()));
        map.insert(
            "search_id".to_string(),
            Value::String(self.search_id.clone()),
        );
        map.insert(
            "extra_params".to_string(),
            Value::Object(self.extra_params.clone()),
        );
        map.insert(
            "action".to_string(),
            self.action.clone().map(Value::String).unwrap_or(Value::Null),
        );
        Value::Object(map)
    }

    /// Returns the tab as a JSON string.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl fmt::Display for SmartTab {
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

fn non_blank_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .map(scalar_text)
        .filter(|text| !text.is_empty() && text != "0" && text != "false")
}
