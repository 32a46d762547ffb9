//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    usecase::{CheckInUseCase, ListRoomsUseCase, UpdatePresenceUseCase},
};

use super::{
    handler::{check_in, health_check, list_rooms, update_presence},
    signal::shutdown_signal,
    state::AppState,
};

/// Presence HTTP server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(check_in_usecase, update_presence_usecase, list_rooms_usecase);
/// server.run(&ServerConfig::default()).await?;
/// ```
pub struct Server {
    check_in_usecase: Arc<CheckInUseCase>,
    update_presence_usecase: Arc<UpdatePresenceUseCase>,
    list_rooms_usecase: Arc<ListRoomsUseCase>,
}

impl Server {
    pub fn new(
        check_in_usecase: Arc<CheckInUseCase>,
        update_presence_usecase: Arc<UpdatePresenceUseCase>,
        list_rooms_usecase: Arc<ListRoomsUseCase>,
    ) -> Self {
        Self {
            check_in_usecase,
            update_presence_usecase,
            list_rooms_usecase,
        }
    }

    /// Build the router with all endpoints
    pub fn router(&self) -> Router {
        let app_state = Arc::new(AppState {
            check_in_usecase: self.check_in_usecase.clone(),
            update_presence_usecase: self.update_presence_usecase.clone(),
            list_rooms_usecase: self.list_rooms_usecase.clone(),
        });

        Router::new()
            .route("/checkin", post(check_in))
            .route("/update_presence", post(update_presence))
            .route("/list_rooms", get(list_rooms))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Bind to the configured address and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the address or
    /// if there's an error during server execution.
    pub async fn run(self, config: &ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let listener = TcpListener::bind(config.bind_addr()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Presence server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
