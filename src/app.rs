use crate::{api, err::Error, init::settings::Settings};
use axum::{routing::get, Router};
use std::net::{SocketAddr, TcpListener};
use tower_http::trace::TraceLayer;

/// The main application object
pub struct App {
    settings: Settings,
}

impl App {
    /// Create a new application object
    ///
    /// # Arguments
    /// * `settings` - The effective settings, fixed for the lifetime of the app
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Build the router serving `GET /`.
    ///
    /// Handlers extract `ConnectInfo<SocketAddr>`, so the router must be served
    /// with `into_make_service_with_connect_info::<SocketAddr>()`.
    pub fn router() -> Router {
        Router::new()
            .route("/", get(api::visitor::time_and_ip))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind to the configured port on all interfaces and serve until the
    /// process is terminated
    ///
    /// # Returns
    /// * `Ok(())` if the server exited successfully
    /// * An error if binding or serving failed
    pub async fn serve(self) -> Result<(), Error> {
        let address = self.settings.address();
        let listener = TcpListener::bind(address)?;

        Self::serve_listener(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve_listener(listener: TcpListener) -> Result<(), Error> {
        listener.set_nonblocking(true)?;
        tracing::info!("Listening on: http://{}", listener.local_addr()?);

        axum_server::from_tcp(listener)
            .serve(Self::router().into_make_service_with_connect_info::<SocketAddr>())
            .await?;

        Ok(())
    }
}
