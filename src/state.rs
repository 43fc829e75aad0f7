use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};
use std::{env, sync::Arc};
use tracing::log::LevelFilter;

const DEFAULT_DATABASE_URL: &str = "sqlite://contest.db?mode=rwc";

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + Clone;

    fn db(&self) -> &Self::Db;
}

/// Process-wide handles shared by every request handler.
pub struct State {
    database: DbConn,
}

impl State {
    pub async fn new() -> Result<Arc<Self>, DbErr> {
        Ok(Self::with_database(Self::connect_database().await?))
    }

    pub fn with_database(conn: DbConn) -> Arc<Self> {
        Arc::new(Self { database: conn })
    }

    async fn connect_database() -> Result<DbConn, DbErr> {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            warn!("DATABASE_URL is not set, using {DEFAULT_DATABASE_URL}");
            DEFAULT_DATABASE_URL.to_owned()
        });

        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .inspect_err(|error| error!("failed to connect to database: {error}"))?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }
}
