use actix_web::http::header::AUTHORIZATION;
use actix_web::{get, web, HttpRequest};

use crate::auth::AuthGate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserView;

/// The header is parsed by the gate itself, not by middleware, so a missing
/// or malformed token maps to the exact failure it is.
#[get("")]
async fn private(req: HttpRequest, gate: web::Data<AuthGate>) -> ApiResult<UserView> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let user = gate.access_protected(auth_header).await?;

    Ok(ApiResponse::Ok(user))
}
