use super::request::RequestBuilder;
use contest_admin::State;
use migration::MigratorTrait;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use std::{net::SocketAddr, sync::Arc};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tracing::log::LevelFilter;

async fn setup_database() -> (TempDir, DbConn) {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");

    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("contest.db").display()
    );

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging_level(LevelFilter::Debug);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    (dir, db)
}

async fn setup_backend(db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(db);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        contest_admin::run(listener, state).await.unwrap();
    });

    addr
}

#[allow(unused)]
pub async fn setup() -> Env {
    dotenvy::dotenv().ok();

    let (dir, db) = setup_database().await;
    let addr = setup_backend(db.clone()).await;

    Env {
        addr,
        client: Client::new(),
        db,
        _dir: Arc::new(dir),
    }
}

#[derive(Clone)]
pub struct Env {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
    pub _dir: Arc<TempDir>,
}

#[allow(unused)]
impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }

    /// Closes the pool shared with the running backend, so every following
    /// query of the backend fails.
    pub async fn disconnect_database(&self) {
        self.db
            .clone()
            .close()
            .await
            .expect("failed to close database");
    }
}
