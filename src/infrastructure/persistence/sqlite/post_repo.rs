//! SQLite Post Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{NewPost, PostChanges, PostRepositoryPort, RepositoryError};
use crate::domain::{Post, PostId};

/// SQLite Post Repository
pub struct SqlitePostRepository {
    pool: DbPool,
}

impl SqlitePostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(super) struct PostRow {
    id: i64,
    user_id: i64,
    text: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            user_id: row.user_id,
            text: row.text,
        }
    }
}

#[async_trait]
impl PostRepositoryPort for SqlitePostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
        let rows: Vec<PostRow> = sqlx::query_as("SELECT id, user_id, text FROM posts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError> {
        let row: Option<PostRow> =
            sqlx::query_as("SELECT id, user_id, text FROM posts WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Post::from))
    }

    async fn insert(&self, post: &NewPost) -> Result<Post, RepositoryError> {
        let row: PostRow = sqlx::query_as(
            "INSERT INTO posts (user_id, text) VALUES (?, ?) RETURNING id, user_id, text",
        )
        .bind(post.user_id)
        .bind(post.text.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn update(&self, id: PostId, changes: &PostChanges) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE posts SET text = ? WHERE id = ?")
            .bind(changes.text.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn remove(&self, id: PostId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
