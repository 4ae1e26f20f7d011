use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::user::{DBUserCreate, UserView};
use crate::utils::{password, token};

/// Orchestrates signup, login and protected-resource access over the user
/// store. Owns the signing secret for the lifetime of the process; built
/// once at startup from [`EnvConfig`] and shared as app data.
pub struct AuthGate {
    store: Arc<DatabaseService>,
    jwt_secret: String,
}

impl AuthGate {
    pub fn new(config: &EnvConfig, store: Arc<DatabaseService>) -> Self {
        AuthGate {
            store,
            jwt_secret: config.jwt_secret.clone(),
        }
    }

    pub fn store(&self) -> &DatabaseService {
        &self.store
    }

    /// Register a new account and hand back the assigned id plus a fresh
    /// token, so the client is logged in straight away. The duplicate-email
    /// check lives in the store, inside the insert transaction.
    pub async fn signup(&self, email: &str, password: &str) -> Result<(i32, String), AppError> {
        let password_hash = password::hash(password)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

        let user_id = self
            .store
            .create_user(DBUserCreate {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        let token = token::encode_auth_token(user_id, &self.jwt_secret)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))?;

        Ok((user_id, token))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .store
            .find_user_by_email(email)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if !password::verify(password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        token::encode_auth_token(user.id, &self.jwt_secret)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    /// Resolve an `Authorization: Bearer <token>` header to the stored user
    /// it asserts. Decode failures carry their reason through to the HTTP
    /// mapping, so an expired token and a garbage one answer differently.
    pub async fn access_protected(
        &self,
        auth_header: Option<&str>,
    ) -> Result<UserView, AppError> {
        let token = bearer_token(auth_header).ok_or(AppError::MissingToken)?;
        let subject = token::decode_auth_token(token, &self.jwt_secret)?;

        let user = self
            .store
            .find_user_by_id(subject)
            .await?
            .ok_or(AppError::SubjectNotFound)?;

        Ok(UserView::from(user))
    }

    /// True when the token verifies and has not expired. Backs the bearer
    /// middleware on the listing/deletion scopes.
    pub fn token_valid(&self, token: &str) -> bool {
        token::decode_auth_token(token, &self.jwt_secret).is_ok()
    }
}

/// Pull the token out of a `Bearer <token>` header value. Anything else
/// (missing header, wrong scheme, no second part) is a missing token.
fn bearer_token(auth_header: Option<&str>) -> Option<&str> {
    let header = auth_header?;
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token)
}
