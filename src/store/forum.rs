use sqlx::SqlitePool;
use tracing::info;

use crate::db::{Message, SearchResult, Thread, ThreadSummary, UserMessage};

use super::{StoreError, StoreResult};

#[derive(Clone)]
pub struct ForumStore {
    db_pool: SqlitePool,
}

impl ForumStore {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Newest thread first.
    pub async fn get_threads(&self) -> StoreResult<Vec<ThreadSummary>> {
        Ok(
            sqlx::query_as(
                "SELECT t.id, t.title, COUNT(m.id) AS message_count, MAX(m.sent_at) AS last_message_at
                 FROM threads t LEFT JOIN messages m ON m.thread_id = t.id
                 GROUP BY t.id
                 ORDER BY t.id DESC"
            )
                .fetch_all(&self.db_pool)
                .await?
        )
    }

    pub async fn get_thread(&self, thread_id: i64) -> StoreResult<Option<Thread>> {
        Ok(
            sqlx::query_as("SELECT id,title,user_id,created_at FROM threads WHERE id=?")
                .bind(thread_id)
                .fetch_optional(&self.db_pool)
                .await?
        )
    }

    pub async fn get_messages(&self, thread_id: i64) -> StoreResult<Vec<Message>> {
        Ok(
            sqlx::query_as(
                "SELECT m.id, m.content, m.sent_at, m.user_id, u.username, m.thread_id
                 FROM messages m JOIN users u ON u.id = m.user_id
                 WHERE m.thread_id=?
                 ORDER BY m.id"
            )
                .bind(thread_id)
                .fetch_all(&self.db_pool)
                .await?
        )
    }

    pub async fn get_message(&self, message_id: i64) -> StoreResult<Option<Message>> {
        Ok(
            sqlx::query_as(
                "SELECT m.id, m.content, m.sent_at, m.user_id, u.username, m.thread_id
                 FROM messages m JOIN users u ON u.id = m.user_id
                 WHERE m.id=?"
            )
                .bind(message_id)
                .fetch_optional(&self.db_pool)
                .await?
        )
    }

    /// Newest message first.
    pub async fn get_user_messages(&self, user_id: i64) -> StoreResult<Vec<UserMessage>> {
        Ok(
            sqlx::query_as(
                "SELECT m.id, m.thread_id, t.title AS thread_title, m.content, m.sent_at
                 FROM messages m JOIN threads t ON t.id = m.thread_id
                 WHERE m.user_id=?
                 ORDER BY m.id DESC"
            )
                .bind(user_id)
                .fetch_all(&self.db_pool)
                .await?
        )
    }

    /// Creates the thread and its opening message in one transaction.
    pub async fn add_thread(&self, title: &str, content: &str, user_id: i64) -> StoreResult<i64> {
        let mut tx = self.db_pool.begin().await?;

        let thread_id = sqlx::query("INSERT INTO threads (title,user_id) VALUES (?,?)")
            .bind(title)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        sqlx::query("INSERT INTO messages (content,user_id,thread_id) VALUES (?,?,?)")
            .bind(content)
            .bind(user_id)
            .bind(thread_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("thread #{thread_id} opened by #{user_id}");
        Ok(thread_id)
    }

    pub async fn add_message(&self, content: &str, user_id: i64, thread_id: i64) -> StoreResult<i64> {
        let done = sqlx::query(
            "INSERT INTO messages (content,user_id,thread_id)
             SELECT ?,?,id FROM threads WHERE id=?"
        )
            .bind(content)
            .bind(user_id)
            .bind(thread_id)
            .execute(&self.db_pool)
            .await?;

        if done.rows_affected() == 0 {
            return Err(StoreError::NoSuchThread(thread_id));
        }
        Ok(done.last_insert_rowid())
    }

    pub async fn update_message(&self, message_id: i64, content: &str) -> StoreResult<()> {
        sqlx::query("UPDATE messages SET content=? WHERE id=?")
            .bind(content)
            .bind(message_id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    pub async fn remove_message(&self, message_id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM messages WHERE id=?")
            .bind(message_id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    /// Substring match on message content or thread title, newest first.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<SearchResult>> {
        let pattern = format!("%{query}%");
        Ok(
            sqlx::query_as(
                "SELECT m.id, m.thread_id, t.title AS thread_title, m.content, m.sent_at, u.username
                 FROM messages m
                 JOIN threads t ON t.id = m.thread_id
                 JOIN users u ON u.id = m.user_id
                 WHERE m.content LIKE ?1 OR t.title LIKE ?1
                 ORDER BY m.id DESC"
            )
                .bind(&pattern)
                .fetch_all(&self.db_pool)
                .await?
        )
    }
}
