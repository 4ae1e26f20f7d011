use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

/// Connection handle for the user store. Postgres in deployment; the same
/// code runs against SQLite for local use and tests.
#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to user store...");
        let db = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations finished.");
        Ok(Self { db })
    }
}
