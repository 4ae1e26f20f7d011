use actix_web::{post, web};

use crate::auth::AuthGate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RCredentials, SignupRes};

#[post("")]
async fn signup(
    gate: web::Data<AuthGate>,
    body: web::Json<RCredentials>,
) -> ApiResult<SignupRes> {
    let (_user_id, token) = gate.signup(&body.email, &body.password).await?;

    Ok(ApiResponse::Ok(SignupRes { aut_token: token }))
}
