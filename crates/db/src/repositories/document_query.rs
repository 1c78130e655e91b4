//! Shared paginated, filtered listing for document entities.
//!
//! Every document table carries the same workflow columns, so the list query
//! differs between entities only in table and column names. Entity
//! repositories delegate here instead of each rebuilding the filter SQL.

use oia_core::pagination::{Page, PageParams};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::models::filter::ListFilter;

/// Append `WHERE` clauses for the optional filters.
fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &ListFilter) {
    qb.push(" WHERE TRUE");
    if let Some(status) = &filter.status {
        qb.push(" AND status = ").push_bind(status.clone());
    }
    if let Some(owner_id) = filter.owner_id {
        qb.push(" AND created_by = ").push_bind(owner_id);
    }
    if let Some(from) = filter.created_from {
        qb.push(" AND created_at >= ").push_bind(from);
    }
    if let Some(to) = filter.created_to {
        qb.push(" AND created_at <= ").push_bind(to);
    }
}

/// Fetch one page of `table` rows matching `filter`, newest first, along with
/// the total match count.
pub(crate) async fn list_page<T>(
    pool: &PgPool,
    table: &'static str,
    columns: &'static str,
    filter: &ListFilter,
    page: &PageParams,
) -> Result<Page<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut count_query = QueryBuilder::new(format!("SELECT COUNT(*) FROM {table}"));
    push_filters(&mut count_query, filter);
    let total: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

    let mut query = QueryBuilder::new(format!("SELECT {columns} FROM {table}"));
    push_filters(&mut query, filter);
    query
        .push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(page.limit())
        .push(" OFFSET ")
        .push_bind(page.offset());
    let items = query.build_query_as::<T>().fetch_all(pool).await?;

    Ok(Page { items, total })
}
