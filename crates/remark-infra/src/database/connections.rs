use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

use super::entity::{comment, user};
use super::sqlite_repo::{SqliteCommentRepository, SqliteUserRepository};

/// Configuration for the SQLite database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// e.g. `sqlite://database.db?mode=rwc` or `sqlite::memory:`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://database.db?mode=rwc".to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

/// Owns the SQLite pool and hands out repositories that share it.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<DbConn>,
}

impl SqliteStore {
    /// Open the pool and make sure both tables exist.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let opts = ConnectOptions::new(config.url.as_str())
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        sync_schema(&conn).await?;

        tracing::info!(
            url = %config.url,
            pool = config.max_connections,
            "SQLite database connected"
        );
        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    pub fn comments(&self) -> SqliteCommentRepository {
        SqliteCommentRepository::new(Arc::clone(&self.conn))
    }

    pub fn users(&self) -> SqliteUserRepository {
        SqliteUserRepository::new(Arc::clone(&self.conn))
    }

    /// Close the pool once no repository holds it any more. While handles
    /// are still alive the pool is left to close when the last one drops.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.conn) {
            Ok(conn) => {
                conn.close().await?;
                tracing::info!("SQLite database closed");
            }
            Err(_) => tracing::warn!("SQLite database still in use, closing on last drop"),
        }
        Ok(())
    }
}

/// Create the `comments` and `users` tables from the entity definitions if
/// they do not exist yet. Existing tables are left as they are.
pub async fn sync_schema(conn: &DbConn) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut comments = schema.create_table_from_entity(comment::Entity);
    let mut users = schema.create_table_from_entity(user::Entity);

    for statement in [comments.if_not_exists(), users.if_not_exists()] {
        conn.execute(backend.build(&*statement)).await?;
    }

    tracing::debug!("Database schema synchronized");
    Ok(())
}
