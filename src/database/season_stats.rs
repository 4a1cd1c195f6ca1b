use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::DbSeasonStats;

/// Replace every season row for a show in one transaction
pub fn replace_for_show(
    conn: &mut DbConn,
    show_id: &str,
    stats: &[DbSeasonStats],
) -> Result<()> {
    let tx = conn
        .transaction()
        .context("Failed to open season stats transaction")?;

    tx.execute(
        "DELETE FROM season_stats WHERE show_id = ?1",
        params![show_id],
    )
    .context("Failed to clear old season stats")?;

    for row in stats {
        tx.execute(
            "INSERT INTO season_stats \
             (show_id, season_number, mean, weighted_mean, median, stddev, total_votes, rated_count, vote_heat) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                row.show_id,
                row.season_number,
                row.mean,
                row.weighted_mean,
                row.median,
                row.stddev,
                row.total_votes,
                row.rated_count,
                row.vote_heat,
            ],
        )
        .with_context(|| {
            format!(
                "Failed to insert stats for {} season {}",
                row.show_id, row.season_number
            )
        })?;
    }

    tx.commit().context("Failed to commit season stats")
}

pub fn list_for_show(conn: &mut DbConn, show_id: &str) -> Result<Vec<DbSeasonStats>> {
    let sql = "SELECT show_id, season_number, mean, weighted_mean, median, stddev, total_votes, rated_count, vote_heat \
               FROM season_stats WHERE show_id = ?1 ORDER BY season_number";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![show_id], parse_stats_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_stats_row(row: &rusqlite::Row) -> rusqlite::Result<DbSeasonStats> {
    Ok(DbSeasonStats {
        show_id: row.get(0)?,
        season_number: row.get(1)?,
        mean: row.get(2)?,
        weighted_mean: row.get(3)?,
        median: row.get(4)?,
        stddev: row.get(5)?,
        total_votes: row.get(6)?,
        rated_count: row.get(7)?,
        vote_heat: row.get(8)?,
    })
}
