//! Search requests and the criteria they are lowered into.
//!
//! A [`SearchRequest`] carries up to five optional constraints. Before evaluation it is
//! lowered into a list of [`Criterion`] values with [`SearchRequest::criteria`]: every
//! constrained field becomes one criterion, unconstrained fields disappear. A document
//! matches a request when it satisfies every criterion; within a multi-value criterion
//! any single value is enough.
//!
//! # Example
//!
//! ```ignore
//! use docstash::query::SearchRequest;
//!
//! let request = SearchRequest::builder()
//!     .title_prefix("Alpha")
//!     .author_ids(["a1", "a2"])
//!     .created_from(yesterday)
//!     .build();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A filter over stored documents. Every field is optional; an unset or empty field does
/// not constrain the result.
///
/// Both timestamp bounds are exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_empty")]
    pub title_prefixes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_empty")]
    pub contains_contents: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_empty")]
    pub author_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates an empty request, which matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new request builder for fluent construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::new()
    }

    /// Returns `true` if no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.title_prefixes.is_empty()
            && self.contains_contents.is_empty()
            && self.author_ids.is_empty()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }

    /// Lowers this request into the criteria a document must all satisfy.
    pub fn criteria(&self) -> Vec<Criterion> {
        let mut criteria = Vec::with_capacity(5);

        if !self.title_prefixes.is_empty() {
            criteria.push(Criterion::TitlePrefix(self.title_prefixes.clone()));
        }
        if !self.contains_contents.is_empty() {
            criteria.push(Criterion::ContainsContent(self.contains_contents.clone()));
        }
        if !self.author_ids.is_empty() {
            criteria.push(Criterion::AuthorIn(self.author_ids.clone()));
        }
        if let Some(from) = self.created_from {
            criteria.push(Criterion::CreatedAfter(from));
        }
        if let Some(to) = self.created_to {
            criteria.push(Criterion::CreatedBefore(to));
        }

        criteria
    }
}

// Explicit `null` reads the same as an omitted field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single constraint derived from a [`SearchRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// The title starts with at least one of the prefixes (case-sensitive).
    TitlePrefix(Vec<String>),
    /// The content contains at least one of the substrings.
    ContainsContent(Vec<String>),
    /// The author id equals one of the ids.
    AuthorIn(Vec<String>),
    /// The creation timestamp is strictly after the bound.
    CreatedAfter(DateTime<Utc>),
    /// The creation timestamp is strictly before the bound.
    CreatedBefore(DateTime<Utc>),
}

#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Creates a new builder with no constraints.
    pub fn new() -> Self {
        SearchRequestBuilder {
            request: SearchRequest::default(),
        }
    }

    /// Adds one accepted title prefix.
    pub fn title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.request.title_prefixes.push(prefix.into());
        self
    }

    /// Adds several accepted title prefixes.
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .title_prefixes
            .extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Adds one accepted content substring.
    pub fn contains_content(mut self, needle: impl Into<String>) -> Self {
        self.request.contains_contents.push(needle.into());
        self
    }

    /// Adds several accepted content substrings.
    pub fn contains_contents<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .contains_contents
            .extend(needles.into_iter().map(Into::into));
        self
    }

    /// Adds one accepted author id.
    pub fn author_id(mut self, id: impl Into<String>) -> Self {
        self.request.author_ids.push(id.into());
        self
    }

    /// Adds several accepted author ids.
    pub fn author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .author_ids
            .extend(ids.into_iter().map(Into::into));
        self
    }

    /// Sets the exclusive lower bound on the creation timestamp.
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    /// Sets the exclusive upper bound on the creation timestamp.
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// Walks the criteria of a request.
///
/// Backends implement this to decide, for their own representation of a document, whether
/// each criterion holds.
pub trait CriterionVisitor {
    type Output;

    fn visit_title_prefix(&mut self, prefixes: &[String]) -> Self::Output;
    fn visit_contains_content(&mut self, needles: &[String]) -> Self::Output;
    fn visit_author_in(&mut self, author_ids: &[String]) -> Self::Output;
    fn visit_created_after(&mut self, bound: &DateTime<Utc>) -> Self::Output;
    fn visit_created_before(&mut self, bound: &DateTime<Utc>) -> Self::Output;

    fn visit_criterion(&mut self, criterion: &Criterion) -> Self::Output {
        match criterion {
            Criterion::TitlePrefix(prefixes) => self.visit_title_prefix(prefixes),
            Criterion::ContainsContent(needles) => self.visit_contains_content(needles),
            Criterion::AuthorIn(author_ids) => self.visit_author_in(author_ids),
            Criterion::CreatedAfter(bound) => self.visit_created_after(bound),
            Criterion::CreatedBefore(bound) => self.visit_created_before(bound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::JsonExt;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn empty_request_has_no_criteria() {
        let request = SearchRequest::new();

        assert!(request.is_unconstrained());
        assert!(request.criteria().is_empty());
    }

    #[test]
    fn criteria_follow_field_order() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let request = SearchRequest::builder()
            .created_from(from)
            .author_id("a1")
            .title_prefixes(["Foo", "Bar"])
            .build();

        assert_eq!(
            request.criteria(),
            vec![
                Criterion::TitlePrefix(vec!["Foo".into(), "Bar".into()]),
                Criterion::AuthorIn(vec!["a1".into()]),
                Criterion::CreatedAfter(from),
            ]
        );
    }

    #[test]
    fn deserializes_partial_json() {
        let request = SearchRequest::from_json(json!({
            "authorIds": ["a1"],
            "createdTo": "2024-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(request.author_ids, vec!["a1".to_string()]);
        assert_eq!(request.created_to, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert!(request.title_prefixes.is_empty());
        assert!(request.created_from.is_none());
    }

    #[test]
    fn null_fields_are_unconstrained() {
        let request = SearchRequest::from_json(json!({
            "titlePrefixes": null,
            "containsContents": null,
            "authorIds": null,
            "createdFrom": null,
            "createdTo": null,
        }))
        .unwrap();

        assert!(request.is_unconstrained());
    }

    #[test]
    fn serializes_only_constrained_fields() {
        let value = SearchRequest::builder()
            .contains_content("results")
            .build()
            .to_json()
            .unwrap();

        assert_eq!(value, json!({ "containsContents": ["results"] }));
    }
}
