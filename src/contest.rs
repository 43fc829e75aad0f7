use chrono::{DateTime, SecondsFormat, Utc};
use entity::config::{self, constants};
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, Set,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartedContest {
    pub success: bool,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestStatus {
    pub start_time: String,
    pub contest_active: String,
}

/// RFC3339 in UTC with second precision, e.g. `2024-05-01T12:00:00Z`.
pub fn timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

async fn set_config<C: ConnectionTrait>(db: &C, key: &str, value: &str) -> Result<(), DbErr> {
    let model = config::ActiveModel {
        key: Set(key.to_owned()),
        value: Set(value.to_owned()),
    };

    config::Entity::insert(model)
        .on_conflict(
            OnConflict::column(config::Column::Key)
                .update_column(config::Column::Value)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(())
}

/// Writes both keys independently. Returns whether every write succeeded.
async fn record_start<C: ConnectionTrait>(db: &C, start_time: &str) -> bool {
    let mut written = true;
    for (key, value) in [
        (constants::START_TIME, start_time),
        (constants::CONTEST_ACTIVE, "1"),
    ] {
        if let Err(error) = set_config(db, key, value).await {
            warn!("failed to write config key {key}: {error}");
            written = false;
        }
    }

    written
}

/// Records the start time and raises the active flag.
///
/// A failed write is only logged: the caller always gets `success: true`
/// with the timestamp that was used.
pub async fn start<C: ConnectionTrait>(db: &C) -> StartedContest {
    let start_time = timestamp(Utc::now());

    if record_start(db, &start_time).await {
        info!("contest started at {start_time}");
    } else {
        warn!("contest start at {start_time} was not fully recorded");
    }

    StartedContest {
        success: true,
        start_time,
    }
}

/// Reads both config keys. A key with no row reads as an empty string.
pub async fn status<C: ConnectionTrait>(db: &C) -> Result<ContestStatus, DbErr> {
    let entries = config::Entity::find()
        .filter(
            Condition::any()
                .add(config::Column::Key.eq(constants::START_TIME))
                .add(config::Column::Key.eq(constants::CONTEST_ACTIVE)),
        )
        .all(db)
        .await?;

    let value = |key: &str| {
        entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.clone())
            .unwrap_or_default()
    };

    Ok(ContestStatus {
        start_time: value(constants::START_TIME),
        contest_active: value(constants::CONTEST_ACTIVE),
    })
}
