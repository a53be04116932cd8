/// A filter on a system or element property, rendered as
/// `<property>[<operator>]=<value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFilter {
    Equals { property: String, value: String },
    In { property: String, values: Vec<String> },
}

impl QueryFilter {
    fn to_pair(&self) -> (String, String) {
        match self {
            Self::Equals { property, value } => (format!("{property}[eq]"), value.clone()),
            Self::In { property, values } => (format!("{property}[in]"), values.join(",")),
        }
    }
}

/// Query for the `items` endpoint. Built with chained calls in the order the
/// parameters should appear on the wire.
///
/// ```
/// use content_delivery::ItemsQuery;
///
/// let query = ItemsQuery::new()
///     .content_type("article")
///     .equals_filter("system.id", "f4b3fc05")
///     .elements_parameter(["title", "body_copy"])
///     .language_parameter("es-ES");
///
/// assert_eq!(query.language(), Some("es-ES"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsQuery {
    content_type: Option<String>,
    filters: Vec<QueryFilter>,
    elements: Vec<String>,
    language: Option<String>,
    limit: Option<u32>,
}

impl ItemsQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the result to items of one content type.
    #[must_use]
    pub fn content_type(mut self, codename: impl Into<String>) -> Self {
        self.content_type = Some(codename.into());
        self
    }

    #[must_use]
    pub fn equals_filter(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(QueryFilter::Equals {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn in_filter<I, S>(mut self, property: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.push(QueryFilter::In {
            property: property.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Project the response onto the given element codenames. Elements not
    /// listed are omitted from every returned item.
    #[must_use]
    pub fn elements_parameter<I, S>(mut self, codenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements = codenames.into_iter().map(Into::into).collect();
        self
    }

    /// Ask for a language variant. The API may still answer with a fallback
    /// language; check `system.language` on the returned items.
    #[must_use]
    pub fn language_parameter(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn type_codename(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn filters(&self) -> &[QueryFilter] {
        &self.filters
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// The `(key, value)` pairs of the query string, in wire order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(content_type) = &self.content_type {
            pairs.push(("system.type".to_string(), content_type.clone()));
        }
        pairs.extend(self.filters.iter().map(QueryFilter::to_pair));
        if !self.elements.is_empty() {
            pairs.push(("elements".to_string(), self.elements.join(",")));
        }
        if let Some(language) = &self.language {
            pairs.push(("language".to_string(), language.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }

    /// Human readable form used in logs and span attributes. Not URL encoded.
    pub fn describe(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
