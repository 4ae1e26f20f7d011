use actix_web::{delete, get, web};

use crate::auth::AuthGate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DeleteUsersRes, UserListRes, UserView};

#[get("")]
async fn list(gate: web::Data<AuthGate>) -> ApiResult<UserListRes> {
    let users = gate
        .store()
        .list_users()
        .await?
        .into_iter()
        .map(UserView::from)
        .collect();

    Ok(ApiResponse::Ok(UserListRes { users }))
}

#[delete("")]
async fn delete_all(gate: web::Data<AuthGate>) -> ApiResult<DeleteUsersRes> {
    gate.store().delete_all_users().await?;

    Ok(ApiResponse::Ok(DeleteUsersRes {
        message: "All users deleted".to_string(),
    }))
}
