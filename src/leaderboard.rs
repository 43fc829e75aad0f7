//! Per participant standings and their ranking.
//!
//! `total_time` and `total_wrong` are summed over every submission of a
//! participant, solved or not, so effort spent on unsolved problems is still
//! charged. `solved_count` only counts rows of the `solved` table.

use crate::utils;
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

const STANDINGS_QUERY: &str = r#"
SELECT
    p.id, p.name, p.college, p.system_number,
    (SELECT COUNT(*)
       FROM solved s
      WHERE s.participant_id = p.id) AS solved_count,
    (SELECT CAST(COALESCE(SUM(sub.time_taken_seconds), 0) AS REAL)
       FROM submissions sub
      WHERE sub.participant_id = p.id) AS time_spent,
    (SELECT COALESCE(SUM(sub.wrong_attempts), 0)
       FROM submissions sub
      WHERE sub.participant_id = p.id) AS total_wrong
FROM participants p
ORDER BY p.id
"#;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct Standing {
    #[serde(skip)]
    pub id: i32,
    pub name: String,
    pub college: String,
    pub system_number: String,
    pub solved_count: i64,
    /// Exact sum of `time_taken_seconds`. Ranking uses this value, the
    /// response reports it as whole seconds under `total_time`.
    #[serde(rename = "total_time", serialize_with = "whole_seconds")]
    pub time_spent: f64,
    pub total_wrong: i64,
}

fn whole_seconds<S: Serializer>(seconds: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(seconds.trunc() as i64)
}

impl Standing {
    /// Time spent in whole seconds, truncated.
    pub fn total_time(&self) -> i64 {
        self.time_spent.trunc() as i64
    }

    /// More solved problems first, then less time spent, then lower id.
    pub fn ranking_order(&self, other: &Self) -> Ordering {
        other
            .solved_count
            .cmp(&self.solved_count)
            .then_with(|| self.time_spent.total_cmp(&other.time_spent))
            .then_with(|| self.id.cmp(&other.id))
    }
}

pub fn rank(standings: &mut [Standing]) {
    standings.sort_by(Standing::ranking_order);
}

/// Aggregates every participant, including the ones without any submission,
/// and returns them in ranking order.
pub async fn standings<C: ConnectionTrait>(db: &C) -> Result<Vec<Standing>, DbErr> {
    let mut standings = Standing::find_by_statement(utils::statement(db, STANDINGS_QUERY))
        .all(db)
        .await?;

    rank(&mut standings);

    debug!("computed standings for {} participants", standings.len());

    Ok(standings)
}
