use event::EventRepository;
use migration::Migrator;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

mod active_models;
pub mod event;

/// Store configuration resolved by the caller at startup. Passed by
/// reference into [`init_repository`]; never read from process globals.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub url: String,
    pub max_connections: u32,
    /// Creates a unique index over `(description, time)` so duplicate
    /// events are rejected with [`RepositoryError::Conflict`].
    pub unique_description_time: bool,
}

#[derive(Clone, Debug)]
pub struct Repository {
    pub event: EventRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("event with the same description and time already exists")]
    Conflict,

    #[error("in sea-orm crate from unsuccessful database operations: {0}")]
    Db(#[from] sea_orm::DbErr),
}

type Response<T> = Result<T, RepositoryError>;

pub async fn init_repository(config: &StoreConfig) -> Response<Repository> {
    let db = init_db(config).await?;

    let repository = Repository {
        event: EventRepository::new(db),
    };

    Ok(repository)
}

async fn init_db(config: &StoreConfig) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(&config.url);
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    if config.unique_description_time {
        db.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_events_description_time \
             ON events (description, time)",
        )
        .await?;
    }

    Ok(db)
}
