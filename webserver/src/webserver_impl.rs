//! Main webserver implementation
//!
//! `WebServer` owns the injected document store and the server state, builds
//! the axum router and runs it until Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{WebServerError, WebServerResult};
use crate::state::{AppState, WebServerState};
use crate::traits::DocumentStore;
use crate::web::handlers::{self, health, listings, meetings, messages, notifications, users};
use shared::{ComponentId, component_info, logging};

/// REST backend with dependency injection of the document store
pub struct WebServer<D: DocumentStore> {
    state: AppState<D>,
}

impl<D> WebServer<D>
where
    D: DocumentStore + 'static,
{
    pub fn new(bind_address: SocketAddr, store: D) -> Self {
        Self::with_shared_store(bind_address, Arc::new(store))
    }

    pub fn with_shared_store(bind_address: SocketAddr, store: Arc<D>) -> Self {
        let server = Arc::new(WebServerState::new(bind_address));
        Self {
            state: AppState::new(store, server),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        router(self.state.clone())
    }

    /// Bind and serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let address = self.state.server.bind_address;
        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {address}: {e}")))?;

        component_info!(ComponentId::current(), "🌐 Web server listening on http://{}", address);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal(self.state.server.clone()))
            .await?;

        Ok(())
    }

    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state.server
    }

    pub fn store(&self) -> &Arc<D> {
        &self.state.store
    }
}

/// Routes of the REST contract over the given state
pub fn router<D>(state: AppState<D>) -> Router
where
    D: DocumentStore + 'static,
{
    Router::new()
        .route("/health", get(health::health::<D>))
        // Users
        .route("/api/users", get(users::list_users::<D>).post(users::create_user::<D>))
        .route("/api/users/:id", get(users::get_user::<D>))
        // Directories
        .route("/api/startups", get(listings::list_startups::<D>))
        .route("/api/investors", get(listings::list_investors::<D>))
        .route("/api/matches", get(listings::list_matches::<D>))
        // Meetings
        .route("/api/meetings", post(meetings::create_meeting::<D>))
        .route("/api/meetings/user/:user_id", get(meetings::user_meetings::<D>))
        // Messages
        .route("/api/messages", post(messages::send_message::<D>))
        .route("/api/messages/:user_id", get(messages::conversation::<D>))
        // Notifications
        .route("/api/notifications", get(notifications::list_notifications::<D>))
        .route("/api/notifications/read-all", put(notifications::mark_all_read::<D>))
        .route("/api/notifications/:id/read", put(notifications::mark_read::<D>))
        .route(
            "/api/notifications/:id",
            axum::routing::delete(notifications::delete_notification::<D>),
        )
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn shutdown_signal(server: Arc<WebServerState>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ComponentId::current(), "Received Ctrl+C signal"),
        Err(err) => logging::log_error(ComponentId::current(), "Signal handling", &err),
    }
    server.set_running(false);
}
