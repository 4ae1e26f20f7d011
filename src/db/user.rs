use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait};

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn find_user_by_id(&self, id: i32) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Signup: persist a new user and hand back the assigned id. The unique
    /// index on email is what actually holds under concurrent signups; the
    /// exists check just gives the common case a clean error.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::DuplicateUser);
        }
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let res = User::insert(UserActive {
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(res.last_insert_id)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find().all(&self.db).await?)
    }

    /// Wipes the user table. Destructive; only reachable through the
    /// token-gated admin scope.
    pub async fn delete_all_users(&self) -> Result<u64, AppError> {
        Ok(User::delete_many().exec(&self.db).await?.rows_affected)
    }
}
