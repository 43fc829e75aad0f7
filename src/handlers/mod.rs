mod admin;

use crate::state::StateTrait;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest("/api/admin", admin::routes::<S>())
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if let Err(error) = state.db().execute_unprepared("select 1").await {
        warn!("liveness check failed: {error}");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
