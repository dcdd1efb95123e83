//! Pagination and sorting model shared by every collection endpoint.
//!
//! A [`ListQuery`] is always well-formed: page and page size are clamped on
//! construction, so storage code never sees a zero or oversized page. The sort
//! field is carried as-is; resolving it against real columns is left to the
//! repository.

/// Page returned when the client does not ask for one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Largest page size a client may request.
pub const MAX_PER_PAGE: u32 = 100;

/// Sort direction for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses a raw `direction` parameter.
    ///
    /// Only the exact strings `asc` and `desc` are recognised. Anything else,
    /// including a missing value, yields [`SortDirection::Asc`].
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Requested ordering of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// A bounded page request with optional ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    per_page: u32,
    sort: Option<Sort>,
}

impl ListQuery {
    /// Builds a query, clamping `page` to at least 1 and `per_page` to
    /// `1..=MAX_PER_PAGE`.
    pub fn new(page: u32, per_page: u32, sort: Option<Sort>) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            sort,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Number of rows to skip for SQL `OFFSET`.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page)
    }

    /// Number of rows to fetch for SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE, None)
    }
}

/// One page of a listing together with the numbers needed to navigate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub per_page: u32,
    pub total: i64,
}

impl<T> Page<T> {
    /// Wraps fetched rows with the query that produced them.
    pub fn new(items: Vec<T>, query: &ListQuery, total: i64) -> Self {
        Self {
            items,
            current_page: query.page(),
            per_page: query.per_page(),
            total,
        }
    }

    /// `ceil(total / per_page)`; zero when there are no rows.
    pub fn last_page(&self) -> u32 {
        let total = u64::try_from(self.total).unwrap_or(0);
        let pages = total.div_ceil(u64::from(self.per_page.max(1)));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}
