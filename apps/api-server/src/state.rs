//! Application state - shared across all handlers.

use std::sync::Arc;

use remark_core::ports::{CommentRepository, RandomUserSource, UserRepository, UserSourceError};
use remark_core::{CommentService, UserService};
use remark_infra::{
    Argon2PasswordService, InMemoryCommentRepository, InMemoryUserRepository, RandomUserClient,
};

#[cfg(feature = "sqlite")]
use remark_infra::SqliteStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub comments: CommentService,
    pub users: UserService,
    pub populate_count: usize,
    #[cfg(feature = "sqlite")]
    pub store: Option<SqliteStore>,
}

impl AppState {
    /// Wire services over the given repositories.
    pub fn from_parts(
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserRepository>,
        source: Arc<dyn RandomUserSource>,
        populate_count: usize,
    ) -> Self {
        Self {
            comments: CommentService::new(comments),
            users: UserService::new(users, Arc::new(Argon2PasswordService::new()), source),
            populate_count,
            #[cfg(feature = "sqlite")]
            store: None,
        }
    }

    /// Services over process-local storage. Nothing survives a restart.
    pub fn in_memory(source: Arc<dyn RandomUserSource>, populate_count: usize) -> Self {
        Self::from_parts(
            Arc::new(InMemoryCommentRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            source,
            populate_count,
        )
    }

    /// Build the application state with appropriate implementations.
    ///
    /// An unreachable database is logged and replaced by in-memory storage so
    /// the server still starts.
    pub async fn new(config: &AppConfig) -> Result<Self, UserSourceError> {
        let source: Arc<dyn RandomUserSource> =
            Arc::new(RandomUserClient::new(config.random_user.clone())?);

        #[cfg(feature = "sqlite")]
        let state = match SqliteStore::connect(&config.database).await {
            Ok(store) => {
                let mut state = Self::from_parts(
                    Arc::new(store.comments()),
                    Arc::new(store.users()),
                    source,
                    config.populate_count,
                );
                state.store = Some(store);
                state
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    url = %config.database.url,
                    "Failed to connect to database. Using in-memory fallback."
                );
                Self::in_memory(source, config.populate_count)
            }
        };

        #[cfg(not(feature = "sqlite"))]
        let state = {
            tracing::info!("Running without sqlite feature - using in-memory repositories");
            Self::in_memory(source, config.populate_count)
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Release storage resources after the server has stopped.
    pub async fn shutdown(self) {
        #[cfg(feature = "sqlite")]
        {
            let Self {
                comments,
                users,
                store,
                ..
            } = self;
            // Services hold repository handles on the pool.
            drop((comments, users));

            if let Some(store) = store {
                if let Err(e) = store.close().await {
                    tracing::error!(error = %e, "Failed to close database");
                }
            }
        }
    }
}
