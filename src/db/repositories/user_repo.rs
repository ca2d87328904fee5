//! User repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{User, UserRecord},
};

/// Storage operations for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored row
    async fn create(&self, record: &UserRecord) -> AppResult<User>;

    /// Find a user by id, soft-deleted or not
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find a non-deleted user by email
    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a non-deleted user other than `exclude_id` sharing the email or nickname
    async fn find_conflicting(
        &self,
        email: &str,
        nickname: &str,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<User>>;

    /// Page through non-deleted users in id order
    async fn list_active(&self, offset: i64, limit: i64) -> AppResult<Vec<User>>;

    /// Overwrite nickname, email and optionally the password hash
    async fn update(
        &self,
        id: i32,
        nickname: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> AppResult<Option<User>>;

    /// Set the soft-delete flag, returning whether a row was touched
    async fn soft_delete(&self, id: i32) -> AppResult<bool>;
}

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, record: &UserRecord) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (nickname, email, password_hash, date_of_registration)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&record.nickname)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.date_of_registration)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE email = $1 AND NOT deleted"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_conflicting(
        &self,
        email: &str,
        nickname: &str,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE
                NOT deleted
                AND (email = $1 OR nickname = $2)
                AND ($3::int IS NULL OR id <> $3)
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(nickname)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_active(&self, offset: i64, limit: i64) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE NOT deleted
            ORDER BY id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update(
        &self,
        id: i32,
        nickname: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                nickname = $2,
                email = $3,
                password_hash = COALESCE($4, password_hash)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nickname)
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"UPDATE users SET deleted = TRUE WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
