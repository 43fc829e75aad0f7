use crate::{
    error::Result,
    leaderboard::{self, Standing},
    StateTrait,
};
use axum::{extract::State, Json};

pub async fn get_leaderboard<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<Standing>>> {
    let standings = leaderboard::standings(state.db()).await?;

    Ok(Json(standings))
}
