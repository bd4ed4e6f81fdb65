use sqlx::{sqlite::SqlitePoolOptions, FromRow, SqlitePool};
use tracing::info;

use crate::include_res;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub has_image: bool,

    // unique: id
    // unique: username
}

#[derive(Debug, Clone, FromRow)]
pub struct Thread {
    pub id: i64,
    pub title: String,
    pub user_id: i64,
    pub created_at: String,
}

/// One row of the front page listing.
#[derive(Debug, Clone, FromRow)]
pub struct ThreadSummary {
    pub id: i64,
    pub title: String,
    pub message_count: i64,
    pub last_message_at: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub sent_at: String,
    pub user_id: i64,
    pub username: String,
    pub thread_id: i64,
}

/// A message as listed on its author's profile page.
#[derive(Debug, Clone, FromRow)]
pub struct UserMessage {
    pub id: i64,
    pub thread_id: i64,
    pub thread_title: String,
    pub content: String,
    pub sent_at: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct SearchResult {
    pub id: i64,
    pub thread_id: i64,
    pub thread_title: String,
    pub content: String,
    pub sent_at: String,
    pub username: String,
}

pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(url)
        .await?;

    init(&db_pool).await?;
    Ok(db_pool)
}

/// Creates the tables if they are missing.
pub async fn init(db_pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_res!(str, "/schema.sql"))
        .execute(db_pool)
        .await?;

    info!("database schema ready");
    Ok(())
}
