// Performance log service - core business logic for member performance logs.
//
// This service handles:
// - Turning `!logar` arguments into a validated entry and persisting it
// - Listing the most recent entries for a member
// - Deleting a single entry, gated by a capability from the adapter
//
// NO Discord dependencies here - just pure domain logic.

use super::log_parser::parse_log_args;
use super::performance_models::{
    DeleteOutcome, LogSubject, ManageAccess, NewPerformanceLog, PerformanceLogEntry,
};
use async_trait::async_trait;
use chrono::Local;
use thiserror::Error;

/// Entries shown when no count is given.
pub const DEFAULT_LIST_LIMIT: u32 = 5;
/// One embed field per entry, and Discord caps embeds at 25 fields.
pub const MAX_LIST_LIMIT: u32 = 25;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum PerformanceLogError {
    #[error("{0}")]
    InvalidScore(String),

    #[error("{0}")]
    InvalidErrors(String),

    #[error("{0}")]
    MissingFields(String),

    #[error("{0}")]
    InvalidCount(String),

    #[error("Você não tem permissão para apagar logs.")]
    Forbidden,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl PerformanceLogError {
    /// Validation failures are answered in-channel; storage failures are not.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, PerformanceLogError::StorageUnavailable(_))
    }
}

// ============================================================================
// STORAGE TRAIT (PORT)
// ============================================================================

/// Durable storage for performance log entries.
///
/// Each call is one unit of work: implementations acquire their handle,
/// run a single statement and release the handle on every exit path.
#[async_trait]
pub trait PerformanceLogStore: Send + Sync {
    /// Persist a new entry and return its freshly assigned id.
    async fn insert(&self, entry: NewPerformanceLog) -> Result<i64, PerformanceLogError>;

    /// Up to `limit` most recent entries for `user_id`, oldest first.
    async fn list_recent(
        &self,
        user_id: u64,
        limit: u32,
    ) -> Result<Vec<PerformanceLogEntry>, PerformanceLogError>;

    /// Remove the entry with `id`. Returns the number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: i64) -> Result<u64, PerformanceLogError>;
}

// ============================================================================
// CORE SERVICE
// ============================================================================

pub struct PerformanceLogService<S: PerformanceLogStore> {
    store: S,
}

impl<S: PerformanceLogStore> PerformanceLogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Parse `raw_args` and store the result for `subject`, dated today.
    ///
    /// Nothing is written when parsing fails.
    pub async fn record_log(
        &self,
        subject: LogSubject,
        raw_args: &str,
    ) -> Result<PerformanceLogEntry, PerformanceLogError> {
        let parsed = parse_log_args(raw_args)?;

        let new_entry = NewPerformanceLog {
            user_id: subject.user_id,
            username: subject.username,
            date: Local::now().date_naive(),
            score: parsed.score,
            errors: parsed.errors,
            note: (!parsed.note.is_empty()).then_some(parsed.note),
        };

        let id = self.store.insert(new_entry.clone()).await?;
        tracing::info!(log_id = id, user_id = new_entry.user_id, "Performance log recorded");

        Ok(new_entry.into_entry(id))
    }

    /// Most recent entries for a member in chronological order.
    ///
    /// `limit` defaults to [`DEFAULT_LIST_LIMIT`] and is clamped to
    /// [`MAX_LIST_LIMIT`]. A limit of 0 is rejected rather than answered
    /// with an empty listing that would read as "no logs".
    pub async fn recent_logs(
        &self,
        user_id: u64,
        limit: Option<u32>,
    ) -> Result<Vec<PerformanceLogEntry>, PerformanceLogError> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT);
        if limit == 0 {
            return Err(PerformanceLogError::InvalidCount(format!(
                "Quantidade inválida. Use um número entre 1 e {} (ex: `!ver_logs @Jogador 5`).",
                MAX_LIST_LIMIT
            )));
        }

        let entries = self.store.list_recent(user_id, limit).await?;
        tracing::debug!(user_id, count = entries.len(), "Listed performance logs");
        Ok(entries)
    }

    /// Delete one entry. Refuses without touching storage when `access` is denied.
    pub async fn delete_log(
        &self,
        id: i64,
        access: ManageAccess,
    ) -> Result<DeleteOutcome, PerformanceLogError> {
        if access == ManageAccess::Denied {
            tracing::warn!(log_id = id, "Denied performance log deletion");
            return Err(PerformanceLogError::Forbidden);
        }

        match self.store.delete_by_id(id).await? {
            0 => Ok(DeleteOutcome::NotFound),
            _ => {
                tracing::info!(log_id = id, "Performance log deleted");
                Ok(DeleteOutcome::Deleted)
            }
        }
    }
}
