//! Search request evaluation for in-memory documents.

use chrono::{DateTime, Utc};

use docstash_core::{
    document::Document,
    query::{Criterion, CriterionVisitor, SearchRequest},
};

/// Decides whether a single document satisfies a search request.
pub struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Returns `true` if the document satisfies every criterion.
    pub fn evaluate(&mut self, criteria: &[Criterion]) -> bool {
        criteria
            .iter()
            .all(|criterion| self.visit_criterion(criterion))
    }

    /// Returns `true` if the document satisfies `request`.
    pub fn matches(&mut self, request: &SearchRequest) -> bool {
        self.evaluate(&request.criteria())
    }

    /// Clones the documents satisfying `request`, keeping their order.
    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        request: &SearchRequest,
    ) -> Vec<Document> {
        let criteria = request.criteria();

        documents
            .into_iter()
            .filter(|doc| DocumentEvaluator::new(doc).evaluate(&criteria))
            .cloned()
            .collect::<Vec<_>>()
    }
}

impl<'a> CriterionVisitor for DocumentEvaluator<'a> {
    type Output = bool;

    fn visit_title_prefix(&mut self, prefixes: &[String]) -> bool {
        prefixes
            .iter()
            .any(|prefix| self.document.title.starts_with(prefix.as_str()))
    }

    fn visit_contains_content(&mut self, needles: &[String]) -> bool {
        needles
            .iter()
            .any(|needle| self.document.content.contains(needle.as_str()))
    }

    fn visit_author_in(&mut self, author_ids: &[String]) -> bool {
        author_ids
            .iter()
            .any(|id| *id == self.document.author.id)
    }

    fn visit_created_after(&mut self, bound: &DateTime<Utc>) -> bool {
        self.document.created > *bound
    }

    fn visit_created_before(&mut self, bound: &DateTime<Utc>) -> bool {
        self.document.created < *bound
    }
}
