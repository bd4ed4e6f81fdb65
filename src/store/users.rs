use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::db::User;

use super::{StoreError, StoreResult};

#[derive(Clone)]
pub struct UserStore {
    db_pool: SqlitePool,
}

impl UserStore {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    pub async fn create_user(&self, username: &str, password: &str) -> StoreResult<i64> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| StoreError::PasswordHash(e.to_string()))?
            .to_string();

        let result = sqlx::query("INSERT INTO users (username,password_hash) VALUES (?,?)")
            .bind(username)
            .bind(&password_hash)
            .execute(&self.db_pool)
            .await;

        match result {
            Ok(done) => {
                let user_id = done.last_insert_rowid();
                info!("adding @{username}#{user_id}");
                Ok(user_id)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(StoreError::UsernameTaken),
            Err(e) => Err(e.into()),
        }
    }

    /// Unknown usernames and wrong passwords are both `None`.
    pub async fn check_login(&self, username: &str, password: &str) -> StoreResult<Option<i64>> {
        let Some((user_id, password_hash)): Option<(i64, String)> =
            sqlx::query_as("SELECT id,password_hash FROM users WHERE username=?")
                .bind(username)
                .fetch_optional(&self.db_pool)
                .await?
        else {
            debug!("login for unknown user {username}");
            return Ok(None);
        };

        let parsed_hash = PasswordHash::new(&password_hash)
            .map_err(|e| StoreError::PasswordHash(e.to_string()))?;

        Ok(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .ok()
                .map(|()| user_id)
        )
    }

    pub async fn get_user(&self, user_id: i64) -> StoreResult<Option<User>> {
        Ok(
            sqlx::query_as("SELECT id,username,IFNULL(length(image),0) > 0 AS has_image FROM users WHERE id=?")
                .bind(user_id)
                .fetch_optional(&self.db_pool)
                .await?
        )
    }

    pub async fn update_image(&self, user_id: i64, image: &[u8]) -> StoreResult<()> {
        sqlx::query("UPDATE users SET image=? WHERE id=?")
            .bind(image)
            .bind(user_id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    pub async fn get_image(&self, user_id: i64) -> StoreResult<Option<Vec<u8>>> {
        let image: Option<(Option<Vec<u8>>,)> = sqlx::query_as("SELECT image FROM users WHERE id=?")
            .bind(user_id)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(image.and_then(|(image,)| image).filter(|image| !image.is_empty()))
    }
}
