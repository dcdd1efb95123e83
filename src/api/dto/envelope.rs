//! Response envelopes shared by every resource type.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::api::hateoas::{CollectionLinks, DeletedLinks, LinkBuilder, ResourceKind};
use crate::domain::listing::{ListQuery, Page};

/// Pagination block of a collection response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total: i64,
    pub last_page: u32,
}

impl<T> From<&Page<T>> for PageMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            current_page: page.current_page,
            per_page: page.per_page,
            total: page.total,
            last_page: page.last_page(),
        }
    }
}

/// Echo of the effective ordering, present only when `sort` was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortMeta {
    pub field: String,
    pub direction: &'static str,
}

/// One page of a collection.
///
/// ```json
/// {
///   "sort": { "field": "name", "direction": "desc" },
///   "page": { "current_page": 1, "per_page": 10, "total": 42, "last_page": 5 },
///   "_embedded": { "projects": [ ... ] },
///   "_links": { "self": ..., "create": ..., "next": ..., "prev": ..., "last": ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CollectionEnvelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortMeta>,
    pub page: PageMeta,
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<&'static str, Vec<T>>,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
}

impl<T> CollectionEnvelope<T> {
    /// Wraps a page of already-serialized resources.
    pub fn new(
        kind: ResourceKind,
        page: Page<T>,
        query: &ListQuery,
        links: &LinkBuilder,
    ) -> Self {
        let meta = PageMeta::from(&page);
        let sort = query.sort();

        Self {
            sort: sort.map(|s| SortMeta {
                field: s.field.clone(),
                direction: s.direction.as_str(),
            }),
            links: links.collection_links(kind, &meta, sort),
            page: meta,
            embedded: BTreeMap::from([(kind.collection, page.items)]),
        }
    }
}

/// Confirmation returned by `DELETE`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
    #[serde(rename = "_links")]
    pub links: DeletedLinks,
}

impl DeletedResponse {
    pub fn new(kind: ResourceKind, links: &LinkBuilder) -> Self {
        Self {
            message: format!("{} deleted successfully", kind.name),
            links: links.deleted_links(kind),
        }
    }
}
