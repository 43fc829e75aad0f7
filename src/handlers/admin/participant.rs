use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    Json,
};
use entity::{participants, solved, submissions};
use sea_orm::{
    sea_query::Expr, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use serde::Serialize;

#[derive(Debug, Serialize, FromQueryResult)]
pub struct Participant {
    id: i32,
    name: String,
    college: String,
    system_number: String,
    phone: String,
    login_time: Option<String>,
    submitted: i32,
    submit_time: Option<String>,
    solved_count: i64,
}

pub async fn list_participants<S: StateTrait>(
    State(state): State<S>,
) -> Result<Json<Vec<Participant>>> {
    let res = participants::Entity::find()
        .column_as(
            Expr::col((solved::Entity, solved::Column::ProblemId)).count(),
            "solved_count",
        )
        .join(JoinType::LeftJoin, participants::Relation::Solved.def())
        .group_by(participants::Column::Id)
        .order_by_asc(participants::Column::Id)
        .into_model::<Participant>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}

#[derive(Debug, Serialize, FromQueryResult)]
pub struct Submission {
    id: i32,
    participant_id: i32,
    problem_id: i32,
    language: Option<String>,
    code: Option<String>,
    passed_all: i32,
    wrong_attempts: i32,
    first_opened_at: Option<String>,
    solved_at: Option<String>,
    time_taken_seconds: Option<f64>,
    last_updated: Option<String>,
    is_solved: i32,
}

pub async fn get_participant_detail<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Submission>>> {
    let Ok(participant_id) = id.parse::<i32>() else {
        return Err(error::INVALID_PARTICIPANT_ID);
    };

    let res = submissions::Entity::find()
        .column_as(
            Expr::cust("CASE WHEN \"solved\".\"problem_id\" IS NOT NULL THEN 1 ELSE 0 END"),
            "is_solved",
        )
        .join(JoinType::LeftJoin, submissions::Relation::Solved.def())
        .filter(submissions::Column::ParticipantId.eq(participant_id))
        .order_by_asc(submissions::Column::ProblemId)
        .order_by_asc(submissions::Column::Id)
        .into_model::<Submission>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}
