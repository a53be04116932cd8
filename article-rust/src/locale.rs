use serde::{Deserialize, Serialize};
use std::fmt;

/// A language/region tag such as `en-US`, kept exactly as the API spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }

    /// The primary language subtag (`es` for `es-ES`).
    pub fn language(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or_default()
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Identifies one article across all of its language variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleIdentifier(String);

impl ArticleIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleIdentifier {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ArticleIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}
