//! Hypermedia link generation.
//!
//! Every response carries a `_links` object mapping relation names to
//! `{ "method"?, "href" }` pairs. `method` is omitted for plain `GET`
//! navigation. All hrefs are absolute and built from the configured base URL:
//!
//! ```text
//! resource:    self, update (PUT), delete (DELETE), list
//! collection:  self, create (POST), next, prev, last
//! deletion:    list, create (POST)
//! ```
//!
//! `next` and `prev` serialize as `null` when the neighbouring page is out of
//! range.

use serde::Serialize;
use url::Url;

use crate::api::dto::envelope::PageMeta;
use crate::domain::listing::Sort;

/// HTTP method advertised on a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Post,
    Put,
    Delete,
}

/// A single hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,
    pub href: String,
}

impl Link {
    fn get(url: Url) -> Self {
        Self {
            method: None,
            href: url.into(),
        }
    }

    fn with_method(method: Method, url: Url) -> Self {
        Self {
            method: Some(method),
            href: url.into(),
        }
    }
}

/// Links attached to a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_: Link,
    pub update: Link,
    pub delete: Link,
    pub list: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Link>,
}

/// Links attached to a page of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_: Link,
    pub create: Link,
    pub next: Option<Link>,
    pub prev: Option<Link>,
    pub last: Link,
}

/// Links returned after a resource has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedLinks {
    pub list: Link,
    pub create: Link,
}

/// A resource type exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// Human-readable singular name, e.g. `Project`.
    pub name: &'static str,
    /// Collection path segment and `_embedded` key, e.g. `projects`.
    pub collection: &'static str,
}

pub const CUSTOMERS: ResourceKind = ResourceKind {
    name: "Customer",
    collection: "customers",
};

pub const PROJECTS: ResourceKind = ResourceKind {
    name: "Project",
    collection: "projects",
};

/// Reasons a base URL cannot be used to build links.
#[derive(Debug, thiserror::Error)]
pub enum BaseUrlError {
    #[error("invalid base URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("base URL must use http or https, got '{0}'")]
    Scheme(String),
    #[error("base URL must not carry a query string or fragment")]
    Suffix,
}

/// Builds absolute hrefs under a fixed base URL.
///
/// The base may include a path prefix (`https://api.example.com/v1`); resource
/// paths are appended below it.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: Url,
}

impl LinkBuilder {
    /// Parses and checks a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`BaseUrlError`] if the URL does not parse, is not http(s), or
    /// carries a query string or fragment.
    pub fn parse(base: &str) -> Result<Self, BaseUrlError> {
        let base = Url::parse(base)?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(BaseUrlError::Scheme(base.scheme().to_string()));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(BaseUrlError::Suffix);
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // http(s) URLs always have a path, so this cannot fail.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn collection_url(&self, kind: ResourceKind) -> Url {
        self.url(&[kind.collection])
    }

    fn resource_url(&self, kind: ResourceKind, id: i64) -> Url {
        self.url(&[kind.collection, &id.to_string()])
    }

    /// URL of one page of a collection.
    ///
    /// Carries `page` and `per_page`, plus `sort` and `direction` when the
    /// listing is sorted.
    pub fn page_url(
        &self,
        kind: ResourceKind,
        page: u32,
        per_page: u32,
        sort: Option<&Sort>,
    ) -> Url {
        let mut url = self.collection_url(kind);
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("page", &page.to_string())
                .append_pair("per_page", &per_page.to_string());
            if let Some(sort) = sort {
                query
                    .append_pair("sort", &sort.field)
                    .append_pair("direction", sort.direction.as_str());
            }
        }
        url
    }

    /// Links for a single resource.
    pub fn resource_links(&self, kind: ResourceKind, id: i64) -> ResourceLinks {
        ResourceLinks {
            self_: Link::get(self.resource_url(kind, id)),
            update: Link::with_method(Method::Put, self.resource_url(kind, id)),
            delete: Link::with_method(Method::Delete, self.resource_url(kind, id)),
            list: Link::get(self.collection_url(kind)),
            customer: None,
        }
    }

    /// Links for a single project, including its customer when assigned.
    pub fn project_links(&self, id: i64, customer_id: Option<i64>) -> ResourceLinks {
        ResourceLinks {
            customer: customer_id.map(|cid| Link::get(self.resource_url(CUSTOMERS, cid))),
            ..self.resource_links(PROJECTS, id)
        }
    }

    /// Links for one page of a collection.
    pub fn collection_links(
        &self,
        kind: ResourceKind,
        page: &PageMeta,
        sort: Option<&Sort>,
    ) -> CollectionLinks {
        let next = (page.current_page < page.last_page)
            .then(|| Link::get(self.page_url(kind, page.current_page + 1, page.per_page, sort)));
        let prev = (page.current_page > 1)
            .then(|| Link::get(self.page_url(kind, page.current_page - 1, page.per_page, sort)));

        CollectionLinks {
            self_: Link::get(self.collection_url(kind)),
            create: Link::with_method(Method::Post, self.collection_url(kind)),
            next,
            prev,
            last: Link::get(self.page_url(kind, page.last_page.max(1), page.per_page, sort)),
        }
    }

    /// Links returned after deleting a resource.
    pub fn deleted_links(&self, kind: ResourceKind) -> DeletedLinks {
        DeletedLinks {
            list: Link::get(self.collection_url(kind)),
            create: Link::with_method(Method::Post, self.collection_url(kind)),
        }
    }
}
