// Performance log infrastructure - storage implementations of PerformanceLogStore.

#[cfg(test)]
mod in_memory;
mod sqlite_store;

#[cfg(test)]
pub use in_memory::InMemoryPerformanceLogStore;
pub use sqlite_store::SqlitePerformanceLogStore;
