mod models;
mod handlers;
mod logger;
mod metrics;

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use metrics::Metrics;

// share the metrics store with every request through the router state
#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
}

#[tokio::main]
async fn main() {

    let state = AppState {
        metrics: Arc::new(Metrics::new()),
    };

    // every path and method goes through the same dispatch function,
    // so the router is just a fallback
    let app = Router::new()
        .fallback(handlers::serve)
        .with_state(state);

    let addr: SocketAddr = ([0, 0, 0, 0], 3000).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind to port 3000");
    println!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, app).await
        .expect("Server failed");

}
