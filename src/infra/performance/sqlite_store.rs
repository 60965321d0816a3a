// SQLite-backed store for performance log entries.
//
// Tables:
// - performance_logs: one row per logged entry, AUTOINCREMENT ids

use crate::core::performance::{
    NewPerformanceLog, PerformanceLogEntry, PerformanceLogError, PerformanceLogStore,
};
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};

pub struct SqlitePerformanceLogStore {
    pool: Pool<Sqlite>,
}

fn storage_error(e: sqlx::Error) -> PerformanceLogError {
    PerformanceLogError::StorageUnavailable(e.to_string())
}

impl SqlitePerformanceLogStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database file at `database_path` and migrate it.
    pub async fn open(database_path: &str) -> Result<Self, PerformanceLogError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&format!("sqlite://{}?mode=rwc", database_path))
            .await
            .map_err(storage_error)?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Run database migrations to create required tables.
    pub async fn migrate(&self) -> Result<(), PerformanceLogError> {
        // AUTOINCREMENT keeps ids of deleted rows from being handed out again.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS performance_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                username TEXT NOT NULL,
                date TEXT NOT NULL,
                score INTEGER,
                errors INTEGER,
                note TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_performance_logs_user
                ON performance_logs(user_id, id);
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(())
    }
}

// `date` is TEXT in `YYYY-MM-DD` form; sqlx's chrono support encodes and
// decodes `NaiveDate` in exactly that format.
fn entry_from_row(row: &SqliteRow) -> Result<PerformanceLogEntry, PerformanceLogError> {
    Ok(PerformanceLogEntry {
        id: row.try_get("id").map_err(storage_error)?,
        user_id: row.try_get::<i64, _>("user_id").map_err(storage_error)? as u64,
        username: row.try_get("username").map_err(storage_error)?,
        date: row.try_get("date").map_err(storage_error)?,
        score: row.try_get("score").map_err(storage_error)?,
        errors: row.try_get("errors").map_err(storage_error)?,
        note: row.try_get("note").map_err(storage_error)?,
    })
}

// Every operation checks a connection out of the pool for exactly one
// statement. The connection goes back to the pool when `conn` drops, on the
// error paths as well.
#[async_trait]
impl PerformanceLogStore for SqlitePerformanceLogStore {
    async fn insert(&self, entry: NewPerformanceLog) -> Result<i64, PerformanceLogError> {
        let mut conn = self.pool.acquire().await.map_err(storage_error)?;

        let result = sqlx::query(
            r#"
            INSERT INTO performance_logs (user_id, username, date, score, errors, note)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entry.user_id as i64)
        .bind(&entry.username)
        .bind(entry.date)
        .bind(entry.score)
        .bind(entry.errors)
        .bind(&entry.note)
        .execute(&mut *conn)
        .await
        .map_err(storage_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn list_recent(
        &self,
        user_id: u64,
        limit: u32,
    ) -> Result<Vec<PerformanceLogEntry>, PerformanceLogError> {
        let mut conn = self.pool.acquire().await.map_err(storage_error)?;

        let rows = sqlx::query(
            r#"
            SELECT id, user_id, username, date, score, errors, note
            FROM performance_logs
            WHERE user_id = ?
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(user_id as i64)
        .bind(limit as i64)
        .fetch_all(&mut *conn)
        .await
        .map_err(storage_error)?;

        // Rows come back newest first; callers display oldest first.
        rows.iter().rev().map(entry_from_row).collect()
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, PerformanceLogError> {
        let mut conn = self.pool.acquire().await.map_err(storage_error)?;

        let result = sqlx::query("DELETE FROM performance_logs WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected())
    }
}
