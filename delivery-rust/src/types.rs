use crate::{DeliveryError, DeliveryResult};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

const PROVIDER: &str = "kontent";

/// Response of the `items` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ItemsResponse {
    pub items: Vec<ContentItem>,
    /// Linked items referenced from `items`, keyed by codename.
    #[serde(default)]
    pub modular_content: HashMap<String, ContentItem>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next_page: String,
}

/// One language variant of a content item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub system: ContentItemSystem,
    #[serde(default)]
    pub elements: HashMap<String, Element>,
}

impl ContentItem {
    pub fn element(&self, codename: &str) -> Option<&Element> {
        self.elements.get(codename)
    }
}

/// System properties of a content item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContentItemSystem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub codename: String,
    /// The language the variant was actually returned in. This can differ
    /// from the requested language when the API applies language fallbacks.
    pub language: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Text,
    RichText,
    Number,
    DateTime,
    Asset,
    ModularContent,
    MultipleChoice,
    Taxonomy,
    UrlSlug,
    Custom,
    #[serde(other)]
    Unknown,
}

/// A single element of a content item. The shape of `value` depends on
/// `element_type`; use the typed accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl Element {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            element_type: ElementType::Text,
            name: String::new(),
            value: Value::String(value.into()),
        }
    }

    pub fn rich_text(value: impl Into<String>) -> Self {
        Self {
            element_type: ElementType::RichText,
            name: String::new(),
            value: Value::String(value.into()),
        }
    }

    pub fn date_time(value: Option<&str>) -> Self {
        Self {
            element_type: ElementType::DateTime,
            name: String::new(),
            value: value.map_or(Value::Null, |value| Value::String(value.to_string())),
        }
    }

    pub fn custom(value: Option<&str>) -> Self {
        Self {
            element_type: ElementType::Custom,
            name: String::new(),
            value: value.map_or(Value::Null, |value| Value::String(value.to_string())),
        }
    }

    pub fn assets(assets: &[Asset]) -> Self {
        Self {
            element_type: ElementType::Asset,
            name: String::new(),
            value: serde_json::to_value(assets).unwrap_or(Value::Array(vec![])),
        }
    }

    pub fn multiple_choice(options: &[MultipleChoiceOption]) -> Self {
        Self {
            element_type: ElementType::MultipleChoice,
            name: String::new(),
            value: serde_json::to_value(options).unwrap_or(Value::Array(vec![])),
        }
    }

    /// Value of a text element. `None` for `null` or non-string values.
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Raw HTML of a rich text element.
    pub fn as_rich_text(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// ISO 8601 value of a date & time element; `None` when not filled in.
    pub fn as_date_time(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Value of a custom element. Custom elements always store a string.
    pub fn as_custom(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn as_assets(&self) -> DeliveryResult<Vec<Asset>> {
        self.as_list("asset")
    }

    pub fn as_options(&self) -> DeliveryResult<Vec<MultipleChoiceOption>> {
        self.as_list("multiple choice")
    }

    fn as_list<T: DeserializeOwned>(&self, kind: &str) -> DeliveryResult<Vec<T>> {
        match &self.value {
            Value::Null => Ok(vec![]),
            value => serde_json::from_value(value.clone()).map_err(|e| {
                DeliveryError::Invariant(
                    PROVIDER,
                    format!("Element '{}' is not a valid {kind} value: {e}", self.name),
                )
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Asset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MultipleChoiceOption {
    pub name: String,
    pub codename: String,
}
