use crate::api::routes;
use crate::core::TaskService;
use crate::errors::Error;
use std::net::SocketAddr;
use tracing::{info, warn};

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `port` - Port number to listen on for incoming HTTP connections
/// * `service` - Task service backing every route
///
/// # Returns
/// * `Result<(), Error>` - Ok once the server shut down gracefully, Error if binding or serving fails
pub async fn launch_server(port: u16, service: TaskService) -> Result<(), Error> {
    let app = routes::app(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
