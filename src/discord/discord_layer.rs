// Discord layer - commands and event handlers.

use crate::core::performance::{PerformanceLogError, PerformanceLogService};
use crate::infra::performance::SqlitePerformanceLogStore;
use std::sync::Arc;

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "performance/mod.rs"]
pub mod performance;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Data that's shared across all commands.
pub struct Data {
    pub performance: Arc<PerformanceLogService<SqlitePerformanceLogStore>>,
}

const STORAGE_FAILURE_REPLY: &str =
    "❌ Não foi possível acessar os registros agora. Tente novamente mais tarde.";
const GENERIC_FAILURE_REPLY: &str = "❌ Ocorreu um erro ao executar o comando.";

/// Reply for a command error that reached the framework's `on_error` hook.
///
/// Only storage outages get the "records unavailable" text; Discord/HTTP
/// failures (e.g. a rejected embed) get a generic one.
pub fn failure_reply(error: &Error) -> &'static str {
    match error.downcast_ref::<PerformanceLogError>() {
        Some(PerformanceLogError::StorageUnavailable(_)) => STORAGE_FAILURE_REPLY,
        _ => GENERIC_FAILURE_REPLY,
    }
}
