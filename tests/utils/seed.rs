use entity::{participants, solved, submissions};
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, Set};
use std::sync::atomic::{AtomicU64, Ordering};

static PHONE: AtomicU64 = AtomicU64::new(9_000_000_000);

#[allow(unused)]
pub async fn participant(db: &DbConn, name: &str) -> i32 {
    let phone = PHONE.fetch_add(1, Ordering::Relaxed);

    let model = participants::ActiveModel {
        name: Set(name.to_owned()),
        college: Set(format!("{name} College")),
        system_number: Set(format!("SYS-{name}")),
        phone: Set(phone.to_string()),
        ..Default::default()
    };

    model
        .insert(db)
        .await
        .expect("failed to insert participant")
        .id
}

#[allow(unused)]
pub async fn submission(
    db: &DbConn,
    participant_id: i32,
    problem_id: i32,
    time_taken_seconds: Option<f64>,
    wrong_attempts: i32,
) {
    let model = submissions::ActiveModel {
        participant_id: Set(participant_id),
        problem_id: Set(problem_id),
        language: Set(Some("python".to_owned())),
        wrong_attempts: Set(wrong_attempts),
        time_taken_seconds: Set(time_taken_seconds),
        ..Default::default()
    };

    submissions::Entity::insert(model)
        .exec_without_returning(db)
        .await
        .expect("failed to insert submission");
}

#[allow(unused)]
pub async fn solved(db: &DbConn, participant_id: i32, problem_id: i32) {
    let model = solved::ActiveModel {
        participant_id: Set(participant_id),
        problem_id: Set(problem_id),
    };

    solved::Entity::insert(model)
        .exec_without_returning(db)
        .await
        .expect("failed to insert solved");
}
