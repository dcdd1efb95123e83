//! SQL fragments shared by the PostgreSQL repositories.

use crate::domain::listing::{ListQuery, SortDirection};
use sqlx::{Postgres, QueryBuilder};

/// Quotes an identifier so it can be spliced into SQL verbatim.
///
/// The value is not checked against the table's columns: an unknown name is
/// rejected by PostgreSQL when the statement runs.
pub fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Appends `ORDER BY ... LIMIT ... OFFSET ...` for a listing.
///
/// `id` is always the final tie-breaker so pages are stable.
pub fn push_page(builder: &mut QueryBuilder<'_, Postgres>, query: &ListQuery) {
    builder.push(" ORDER BY ");

    if let Some(sort) = query.sort() {
        builder.push(quote_identifier(&sort.field));
        builder.push(match sort.direction {
            SortDirection::Asc => " ASC, ",
            SortDirection::Desc => " DESC, ",
        });
    }

    builder.push("id ASC LIMIT ");
    builder.push_bind(query.limit());
    builder.push(" OFFSET ");
    builder.push_bind(query.offset());
}
