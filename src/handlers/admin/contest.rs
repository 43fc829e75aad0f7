use crate::{
    contest::{self, ContestStatus, StartedContest},
    error::Result,
    StateTrait,
};
use axum::{extract::State, Json};

pub async fn start_contest<S: StateTrait>(State(state): State<S>) -> Json<StartedContest> {
    Json(contest::start(state.db()).await)
}

pub async fn get_contest<S: StateTrait>(State(state): State<S>) -> Result<Json<ContestStatus>> {
    Ok(Json(contest::status(state.db()).await?))
}
