//! Database pool construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup builds one shared SQLx pool for the contact store. The pool
//! connects lazily: an unreachable database does not stop the static site
//! from serving, and each submission surfaces the outage on its own.
//! The `messages` table is provisioned outside this service.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DbConfig;

/// Create the `PostgreSQL` pool without opening a connection.
///
/// # Errors
///
/// Returns an error if the connection URL cannot be parsed.
pub fn init_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(&config.url)
}
