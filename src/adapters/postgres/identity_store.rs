//! PostgreSQL implementation of the store ports.
//!
//! Users live in `users`; the vision subsystem appends rows to
//! `detected_persons`; single-value outcomes (last detection result, last
//! attack result) live in `bot_results` keyed by slot name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::identity::{DetectedPerson, FaceDescriptor, UserRecord};
use crate::ports::{AttackResultStore, DetectionStore, UserDirectory};

const DETECTION_RESULT_SLOT: &str = "person_detection";
const ATTACK_RESULT_SLOT: &str = "attack";

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        full_name TEXT,
        email TEXT UNIQUE,
        password_hash TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS detected_persons (
        id BIGSERIAL PRIMARY KEY,
        name TEXT,
        face REAL[],
        detected_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS bot_results (
        slot TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
];

/// PostgreSQL-backed identity store.
#[derive(Clone)]
pub struct PostgresIdentityStore {
    pool: PgPool,
}

impl PostgresIdentityStore {
    /// Creates a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool from configuration, creating tables when asked to.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .connect(config.url.expose_secret())
            .await
            .map_err(|e| DomainError::database(format!("Failed to connect: {}", e)))?;

        let store = Self::new(pool);
        if config.run_migrations {
            store.ensure_schema().await?;
        }
        Ok(store)
    }

    /// Creates the tables this store reads and writes.
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to create schema: {}", e)))?;
        }
        Ok(())
    }

    async fn read_slot(&self, slot: &str) -> Result<Option<String>, DomainError> {
        let row = sqlx::query("SELECT value FROM bot_results WHERE slot = $1")
            .bind(slot)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to read {} result: {}", slot, e)))?;

        row.map(|row| {
            row.try_get::<String, _>("value")
                .map_err(|e| DomainError::database(format!("Failed to get value: {}", e)))
        })
        .transpose()
    }

    async fn find_user(&self, column: &str, value: &str) -> Result<Option<UserRecord>, DomainError> {
        let sql = format!(
            "SELECT full_name, email, created_at FROM users \
             WHERE lower({}) = lower($1) ORDER BY id LIMIT 1",
            column
        );
        let row = sqlx::query(&sql)
            .bind(value.trim())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        row.map(row_to_user).transpose()
    }
}

fn row_to_user(row: PgRow) -> Result<UserRecord, DomainError> {
    let field_err = |field: &str, e: sqlx::Error| {
        DomainError::database(format!("Failed to get {}: {}", field, e))
    };

    let full_name: Option<String> = row.try_get("full_name").map_err(|e| field_err("full_name", e))?;
    let email: Option<String> = row.try_get("email").map_err(|e| field_err("email", e))?;
    let created_at: Option<DateTime<Utc>> =
        row.try_get("created_at").map_err(|e| field_err("created_at", e))?;

    Ok(UserRecord {
        full_name,
        email,
        created_at: created_at.map(Timestamp::from_datetime),
    })
}

#[async_trait]
impl DetectionStore for PostgresIdentityStore {
    async fn last_detected_person(&self) -> Result<Option<DetectedPerson>, DomainError> {
        let row = sqlx::query(
            "SELECT name, face FROM detected_persons ORDER BY detected_at DESC, id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch detection: {}", e)))?;

        row.map(|row| -> Result<DetectedPerson, DomainError> {
            let name: Option<String> = row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?;
            let face: Option<Vec<f32>> = row
                .try_get("face")
                .map_err(|e| DomainError::database(format!("Failed to get face: {}", e)))?;
            Ok(DetectedPerson {
                name,
                face: face.map(FaceDescriptor::new),
            })
        })
        .transpose()
    }

    async fn last_person_detection_result(&self) -> Result<Option<String>, DomainError> {
        self.read_slot(DETECTION_RESULT_SLOT).await
    }
}

#[async_trait]
impl UserDirectory for PostgresIdentityStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        self.find_user("email", email).await
    }

    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<UserRecord>, DomainError> {
        self.find_user("full_name", full_name).await
    }
}

#[async_trait]
impl AttackResultStore for PostgresIdentityStore {
    async fn last_attack_result(&self) -> Result<Option<String>, DomainError> {
        self.read_slot(ATTACK_RESULT_SLOT).await
    }

    async fn set_last_attack_result(&self, result: &str) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO bot_results (slot, value, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (slot) DO UPDATE SET value = EXCLUDED.value, updated_at = now()
            "#,
        )
        .bind(ATTACK_RESULT_SLOT)
        .bind(result)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to store attack result: {}", e)))?;
        Ok(())
    }
}
