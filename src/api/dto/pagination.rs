//! Listing query parameters.

use crate::domain::listing::{DEFAULT_PAGE, DEFAULT_PER_PAGE, ListQuery, Sort, SortDirection};

/// Raw `?page=&per_page=&sort=&direction=` parameters.
///
/// Every field is kept as a string so that bad values are coerced to their
/// defaults instead of rejecting the request. Extracted straight from the
/// request URI, see [`crate::api::extract`].
#[derive(Debug, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ListParams {
    /// Reads the listing parameters out of a raw query string.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_query_str(query: &str) -> Self {
        let mut params = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "page" => &mut params.page,
                "per_page" => &mut params.per_page,
                "sort" => &mut params.sort,
                "direction" => &mut params.direction,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }

    /// Converts the raw parameters into a bounded [`ListQuery`].
    ///
    /// # Defaults
    ///
    /// - `page`: 1 (also for non-numeric or `< 1` values)
    /// - `per_page`: 10 (also for non-numeric or `< 1` values), capped at 100
    /// - `direction`: `asc` unless exactly `desc`
    /// - `sort`: none; an empty value counts as absent
    pub fn into_query(self) -> ListQuery {
        let page = positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let per_page = positive(self.per_page.as_deref()).unwrap_or(DEFAULT_PER_PAGE);

        let sort = self.sort.filter(|field| !field.is_empty()).map(|field| {
            Sort::new(
                field,
                SortDirection::from_param(self.direction.as_deref()),
            )
        });

        ListQuery::new(page, per_page, sort)
    }
}

fn positive(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}
