use actix_web::{post, web};

use crate::auth::AuthGate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RCredentials};

#[post("")]
async fn login(
    gate: web::Data<AuthGate>,
    body: web::Json<RCredentials>,
) -> ApiResult<LoginRes> {
    let token = gate.login(&body.email, &body.password).await?;

    Ok(ApiResponse::Ok(LoginRes { auth_token: token }))
}
