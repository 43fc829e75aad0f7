mod contest;
mod leaderboard;
mod participant;

use crate::StateTrait;
use axum::{
    routing::{any, get},
    Router,
};

/// Routes for contest administration
///
/// ANY /api/admin/start_contest
/// GET /api/admin/contest
/// ANY /api/admin/leaderboard
/// GET /api/admin/participants
/// GET /api/admin/participant_detail/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/start_contest", any(contest::start_contest::<S>))
        .route("/contest", get(contest::get_contest::<S>))
        .route("/leaderboard", any(leaderboard::get_leaderboard::<S>))
        .route("/participants", get(participant::list_participants::<S>))
        .route(
            "/participant_detail/:id",
            get(participant::get_participant_detail::<S>),
        )
}
