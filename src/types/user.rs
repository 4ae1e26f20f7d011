use serde::{Deserialize, Serialize};

/// Request body shared by signup and login.
#[derive(Serialize, Deserialize)]
pub struct RCredentials {
    pub email: String,
    pub password: String,
}

/// What the store needs to persist a new user.
pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
}

/// Client-facing view of a user. Deliberately has no hash field, so the
/// stored credential can never leak through serialization.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserView {
    pub id: i32,
    pub email: String,
}

impl From<entity::user::Model> for UserView {
    fn from(m: entity::user::Model) -> Self {
        UserView {
            id: m.id,
            email: m.email,
        }
    }
}

// `aut_token` on signup vs `auth_token` on login is the historical wire
// format; clients depend on both spellings.
#[derive(Serialize, Deserialize)]
pub struct SignupRes {
    pub aut_token: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub auth_token: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserListRes {
    pub users: Vec<UserView>,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteUsersRes {
    pub message: String,
}
