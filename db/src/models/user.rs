use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, Set};
use uuid::Uuid;

/// Represents a user account in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Opaque random token assigned at creation, never reused.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Unique login name.
    pub username: String,
    /// Securely hashed password string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// One of `admin`, `professor`, `user`.
    pub user_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TYPE_ADMIN: &'static str = "admin";
    pub const TYPE_PROFESSOR: &'static str = "professor";
    pub const TYPE_USER: &'static str = "user";

    /// Hashes a plaintext password with Argon2 and a fresh random salt.
    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {e}")))
    }

    /// Verifies a plaintext password against this user's stored hash.
    pub fn verify_password(&self, password: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// Inserts a new user with a hashed password and a generated id.
    pub async fn create(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
        user_type: &str,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            username: Set(username.to_owned()),
            password_hash: Set(Self::hash_password(password)?),
            user_type: Set(user_type.to_owned()),
            created_at: Set(Utc::now()),
        };
        active.insert(db).await
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }
}
