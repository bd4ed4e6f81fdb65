mod forum;
mod users;

pub use forum::ForumStore;
pub use users::UserStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("username is already taken")]
    UsernameTaken,
    #[error("thread {0} does not exist")]
    NoSuchThread(i64),
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    // a single connection, every new in-memory connection is a fresh database
    let db_pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::db::init(&db_pool).await.unwrap();
    db_pool
}
