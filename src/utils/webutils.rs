use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::auth::AuthGate;

/// Bearer validator for the listing/deletion scopes. Pulls the shared
/// [`AuthGate`] out of app data rather than a process global.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let valid = req
        .app_data::<web::Data<AuthGate>>()
        .map(|gate| gate.token_valid(credentials.token()))
        .unwrap_or(false);

    if valid {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}
