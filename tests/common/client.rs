use account_auth::auth::AuthGate;
use account_auth::config::EnvConfig;
use account_auth::db::database_service::DatabaseService;
use actix_web::{web, App};
use std::sync::Arc;

#[allow(dead_code)]
pub const TEST_SECRET: &str = "test-signing-secret";

pub struct TestClient {
    pub gate: web::Data<AuthGate>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        let config = EnvConfig {
            port: 0,
            db_url: String::new(),
            jwt_secret: TEST_SECRET.to_string(),
        };
        TestClient {
            gate: web::Data::new(AuthGate::new(&config, db)),
        }
    }

    /// Seed a user straight through the gate, skipping HTTP.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: &str) -> (i32, String) {
        self.gate
            .signup(email, "p1")
            .await
            .expect("Failed to create test user")
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.gate.clone())
            .configure(account_auth::routes::configure_routes)
    }
}
