use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub jwt_secret: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            // Local fallback so the service runs without a Postgres around.
            db_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:///tmp/account-auth.db?mode=rwc".to_string()),
            jwt_secret: Self::get_env("JWT_SECRET"),
        }
    }
}
