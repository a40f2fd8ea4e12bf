//! SQLite User Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::post_repo::PostRow;
use super::DbPool;
use crate::application::ports::{NewUser, RepositoryError, UserChanges, UserRepositoryPort};
use crate::domain::{Post, User, UserId};

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let row: UserRow =
            sqlx::query_as("INSERT INTO users (name) VALUES (?) RETURNING id, name")
                .bind(user.name.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE users SET name = ? WHERE id = ?")
            .bind(changes.name.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn remove(&self, id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn find_posts(&self, id: UserId) -> Result<Vec<Post>, RepositoryError> {
        let rows: Vec<PostRow> =
            sqlx::query_as("SELECT id, user_id, text FROM posts WHERE user_id = ? ORDER BY id")
                .bind(id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }
}
