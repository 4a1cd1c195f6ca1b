use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{OptionalExtension, params};

use super::connection::DbConn;
use super::models::{DbShow, ShowFilter, SortColumn, SortOrder};

pub fn upsert_show(
    conn: &mut DbConn,
    id: &str,
    title: &str,
    rating: Option<f64>,
    votes: Option<i64>,
    season_count: i64,
    fetched_at: NaiveDateTime,
) -> Result<DbShow> {
    let sql = "INSERT INTO shows (id, title, rating, votes, season_count, fetched_at) \
               VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
               ON CONFLICT(id) DO UPDATE SET \
                 title = excluded.title, \
                 rating = excluded.rating, \
                 votes = excluded.votes, \
                 season_count = excluded.season_count, \
                 fetched_at = excluded.fetched_at \
               RETURNING id, title, rating, votes, season_count, fetched_at";

    conn.query_row(
        sql,
        params![id, title, rating, votes, season_count, fetched_at],
        parse_show_row,
    )
    .context("Failed to upsert show")
}

pub fn get_show(conn: &mut DbConn, id: &str) -> Result<Option<DbShow>> {
    let sql = "SELECT id, title, rating, votes, season_count, fetched_at FROM shows WHERE id = ?1";

    conn.query_row(sql, params![id], parse_show_row)
        .optional()
        .context("Failed to query show by id")
}

/// Filtered, sorted, paged catalog listing. Returns the page plus the total
/// count matching the filter.
pub fn search_shows(conn: &mut DbConn, filter: &ShowFilter) -> Result<(Vec<DbShow>, usize)> {
    let pattern = filter
        .title_contains
        .as_ref()
        .map(|needle| format!("%{}%", needle))
        .unwrap_or_else(|| "%".to_string());

    let total: usize = conn
        .query_row(
            "SELECT COUNT(*) FROM shows WHERE title LIKE ?1",
            params![pattern],
            |row| row.get::<_, i64>(0),
        )
        .context("Failed to count matching shows")? as usize;

    let sql = format!(
        "SELECT id, title, rating, votes, season_count, fetched_at FROM shows \
         WHERE title LIKE ?1 ORDER BY {} {} LIMIT ?2 OFFSET ?3",
        sort_column_sql(&filter.sort_by),
        sort_order_sql(&filter.sort_order),
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(
            params![pattern, filter.limit as i64, filter.offset as i64],
            parse_show_row,
        )?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok((rows, total))
}

fn sort_column_sql(column: &SortColumn) -> &'static str {
    match column {
        SortColumn::Title => "title",
        SortColumn::Rating => "rating",
        SortColumn::Votes => "votes",
    }
}

fn sort_order_sql(order: &SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

fn parse_show_row(row: &rusqlite::Row) -> rusqlite::Result<DbShow> {
    Ok(DbShow {
        id: row.get(0)?,
        title: row.get(1)?,
        rating: row.get(2)?,
        votes: row.get(3)?,
        season_count: row.get(4)?,
        fetched_at: row.get(5)?,
    })
}
