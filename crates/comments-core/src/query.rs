//! Query parameters for listing comments

use crate::comment::{CommentExpandOptions, CommentList, CommentSortOrder};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in query values (RFC 3986 unreserved set)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Options for a comment listing request. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentQuery {
    /// Maximum number of comments per page
    pub top: Option<u32>,
    /// Opaque cursor from a previous page
    pub continuation_token: Option<String>,
    pub include_deleted: Option<bool>,
    pub expand: Option<CommentExpandOptions>,
    pub order: Option<CommentSortOrder>,
}

impl CommentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn continuation_token(mut self, token: impl Into<String>) -> Self {
        self.continuation_token = Some(token.into());
        self
    }

    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = Some(include);
        self
    }

    pub fn expand(mut self, expand: CommentExpandOptions) -> Self {
        self.expand = Some(expand);
        self
    }

    pub fn order(mut self, order: CommentSortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Query for the page after `page`, or `None` on the last page.
    ///
    /// The continuation token is forwarded untouched.
    pub fn next_page(&self, page: &CommentList) -> Option<Self> {
        let token = page.continuation_token.as_ref()?;
        Some(Self {
            continuation_token: Some(token.clone()),
            ..self.clone()
        })
    }

    /// Name/value pairs with enums rendered as their numeric codes
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        if let Some(token) = &self.continuation_token {
            pairs.push(("continuationToken", token.clone()));
        }
        if let Some(include) = self.include_deleted {
            pairs.push(("includeDeleted", include.to_string()));
        }
        if let Some(expand) = self.expand {
            pairs.push(("$expand", expand.bits().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.code().to_string()));
        }
        pairs
    }

    /// Query string without the leading `?`; values are percent-encoded
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(name, value)| format!("{}={}", name, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
