pub mod client;

use account_auth::db::database_service::DatabaseService;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Fresh store per test: a throwaway SQLite file with migrations
    /// applied, so tests never share state or need a live Postgres.
    pub async fn new() -> Self {
        let url = format!(
            "sqlite:///tmp/account-auth-test-{}.db?mode=rwc",
            Uuid::new_v4()
        );
        let db = DatabaseService::new(&url)
            .await
            .expect("Failed to initialize test store");
        TestContext { db: Arc::new(db) }
    }
}

pub mod test_data {
    use account_auth::types::user::RCredentials;

    #[allow(dead_code)]
    pub fn sample_credentials() -> RCredentials {
        RCredentials {
            email: "a@x.com".to_string(),
            password: "p1".to_string(),
        }
    }
}
