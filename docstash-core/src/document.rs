//! Document and author value types.
//!
//! A [`Document`] is a plain value: the store keeps its own copy of every document it is
//! given, so changing a document after saving it has no effect on stored data until it is
//! saved again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, from_value, to_value};

use crate::error::DocumentStoreResult;

/// The author of a document, embedded by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A stored document.
///
/// The `id` is `None` until the document is saved for the first time, at which point the
/// store assigns a generated identifier. The `created` timestamp is supplied by the caller
/// and is never modified by the store.
///
/// # Example
///
/// ```ignore
/// use docstash::document::{Author, Document};
///
/// let doc = Document::builder()
///     .title("Alpha Report")
///     .content("quarterly results")
///     .author(Author::new("a1", "Alice"))
///     .build();
///
/// assert!(doc.id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl Document {
    /// Creates a new builder for fluent construction.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Returns the identifier, if one has been assigned.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns a copy of this document with the given identifier.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    /// Returns a copy of this document with the given title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    /// Returns a copy of this document with the given content.
    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }

    /// Returns a copy of this document with the given author.
    pub fn with_author(self, author: Author) -> Self {
        Self { author, ..self }
    }

    /// Returns a copy of this document with the given creation timestamp.
    pub fn with_created(self, created: DateTime<Utc>) -> Self {
        Self { created, ..self }
    }
}

/// Builder for [`Document`].
///
/// Unset text fields default to empty strings, the author defaults to [`Author::default`]
/// and `created` defaults to the time [`DocumentBuilder::build`] is called.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    id: Option<String>,
    title: String,
    content: String,
    author: Author,
    created: Option<DateTime<Utc>>,
}

impl DocumentBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn build(self) -> Document {
        Document {
            id: self.id,
            title: self.title,
            content: self.content,
            author: self.author,
            created: self.created.unwrap_or_else(Utc::now),
        }
    }
}

/// JSON conversion helpers.
///
/// Implemented for every serde-compatible type, so both [`Document`] and
/// [`SearchRequest`](crate::query::SearchRequest) can be exchanged as JSON values.
pub trait JsonExt: Sized {
    /// Converts this value to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> DocumentStoreResult<Value>;

    /// Creates a value from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or a required field is missing.
    fn from_json(value: Value) -> DocumentStoreResult<Self>;
}

impl<T: Serialize + DeserializeOwned> JsonExt for T {
    fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentStoreError;
    use chrono::TimeZone;
    use serde_json::json;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn builder_leaves_id_unset() {
        let doc = Document::builder()
            .title("Alpha Report")
            .author(Author::new("a1", "Alice"))
            .created(created())
            .build();

        assert_eq!(doc.id(), None);
        assert_eq!(doc.title, "Alpha Report");
        assert_eq!(doc.content, "");
        assert_eq!(doc.author.id, "a1");
        assert_eq!(doc.created, created());
    }

    #[test]
    fn with_methods_only_touch_one_field() {
        let doc = Document::builder()
            .title("Draft")
            .content("body")
            .created(created())
            .build();
        let renamed = doc.clone().with_title("Final").with_id("abc");

        assert_eq!(renamed.title, "Final");
        assert_eq!(renamed.id(), Some("abc"));
        assert_eq!(renamed.content, doc.content);
        assert_eq!(renamed.created, doc.created);
    }

    #[test]
    fn json_uses_camel_case_and_skips_missing_id() {
        let doc = Document::builder()
            .title("Alpha Report")
            .content("quarterly results")
            .author(Author::new("a1", "Alice"))
            .created(created())
            .build();

        let value = doc.to_json().unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["author"]["id"], "a1");
        assert_eq!(value["created"], "2024-03-01T12:00:00Z");

        let back = Document::from_json(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn from_json_rejects_missing_fields() {
        let err = Document::from_json(json!({ "title": "no author" })).unwrap_err();

        assert!(matches!(err, DocumentStoreError::Serialization(_)));
    }
}
