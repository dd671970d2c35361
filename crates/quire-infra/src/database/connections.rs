use std::sync::Arc;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DbBackend, DbConn, DbErr, ExecResult, QueryResult,
    Statement, Value,
};

/// Idempotent schema for the single `posts` table.
const CREATE_POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id serial PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    category TEXT NOT NULL,
    tags TEXT[] NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT now(),
    updated_at TIMESTAMP NOT NULL DEFAULT now()
)
"#;

/// Configuration for the Postgres pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub sqlx_logging: bool,
}

/// Pooled connection to the relational backend.
///
/// Cloning is cheap: clones share the same connection handle. Every query takes
/// SQL text with `$n` placeholders plus positional values, and backend errors
/// are returned as-is.
///
/// # Example
/// ```ignore
/// let row = storage
///     .query_one("SELECT * FROM posts WHERE id = $1", [1.into()])
///     .await?;
/// ```
#[derive(Clone)]
pub struct Storage {
    db: Arc<DbConn>,
}

impl Storage {
    /// Open the pool and make sure the schema exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .sqlx_logging(config.sqlx_logging)
            .to_owned();

        let db = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        let storage = Self::from_connection(db);
        storage.ensure_schema().await?;
        tracing::info!("Storage initialized");

        Ok(storage)
    }

    /// Wrap an already-open connection without touching the schema.
    pub fn from_connection(db: DbConn) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Create the `posts` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        self.db.execute_unprepared(CREATE_POSTS_TABLE).await?;
        Ok(())
    }

    /// Run a statement expected to return at most one row.
    pub async fn query_one<I>(&self, sql: &str, values: I) -> Result<Option<QueryResult>, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        self.db.query_one(Self::statement(sql, values)).await
    }

    /// Run a statement and collect every returned row.
    pub async fn query_all<I>(&self, sql: &str, values: I) -> Result<Vec<QueryResult>, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        self.db.query_all(Self::statement(sql, values)).await
    }

    /// Run a statement that returns no rows.
    pub async fn execute<I>(&self, sql: &str, values: I) -> Result<ExecResult, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        self.db.execute(Self::statement(sql, values)).await
    }

    /// Check that the backend is reachable.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }

    /// Close the pool. Called once at shutdown.
    ///
    /// If another clone is still alive the pool is released when the last one drops.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.db) {
            Ok(db) => db.close().await,
            Err(_) => {
                tracing::warn!("Storage still shared at shutdown, deferring pool close");
                Ok(())
            }
        }
    }

    fn statement<I>(sql: &str, values: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
    }
}
