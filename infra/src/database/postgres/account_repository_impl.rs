//! Postgres implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use tb_core::domain::entities::account::Account;
use tb_core::errors::DomainError;
use tb_core::repositories::AccountRepository;

/// Postgres implementation of AccountRepository
pub struct PgAccountRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new Postgres account repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::postgres::PgRow) -> Result<Account, DomainError> {
        Ok(Account {
            id: row
                .try_get("id")
                .map_err(|e| db_err("id", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_err("email", e))?,
            name: row
                .try_get("name")
                .map_err(|e| db_err("name", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_err("password_hash", e))?,
            refresh_token: row
                .try_get("refresh_token")
                .map_err(|e| db_err("refresh_token", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_err("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_err("updated_at", e))?,
        })
    }
}

fn db_err(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("failed to read column {}: {}", column, e),
    }
}

fn query_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("database query failed: {}", e),
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, email, name, password_hash, refresh_token,
                   created_at, updated_at
            FROM accounts
            WHERE id = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, email, name, password_hash, refresh_token,
                   created_at, updated_at
            FROM accounts
            WHERE email = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(query_err)?;

        row.try_get::<bool, _>(0).map_err(|e| db_err("exists", e))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (id, email, name, password_hash, refresh_token,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(query)
            .bind(account.id)
            .bind(&account.email)
            .bind(&account.name)
            .bind(&account.password_hash)
            .bind(&account.refresh_token)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(query_err)?;

        Ok(account)
    }

    async fn set_refresh_token(
        &self,
        id: Uuid,
        refresh_token: Option<&str>,
    ) -> Result<(), DomainError> {
        // Unconditional overwrite; last write wins
        let query = r#"
            UPDATE accounts
            SET refresh_token = $1, updated_at = $2
            WHERE id = $3
        "#;

        let result = sqlx::query(query)
            .bind(refresh_token)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected() > 0)
    }
}
