use dotenvy::dotenv;
use tracing::{error, info};

use stockproject::logging::init_tracing;
use stockproject::metrics::{init_metrics, metrics_app};
use stockproject::router::init_router;
use stockproject::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = match init_app_state() {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "failed to build application state");
            std::process::exit(1);
        }
    };
    let addr = state.server_config.bind_addr();

    let mut app = init_router(state);
    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_app(handle));
    }

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%addr, %err, "failed to bind listen address");
            std::process::exit(1);
        }
    };

    info!(%addr, "stockProject API listening");
    println!("🚀 Server running on http://{addr}");
    println!("📚 Swagger UI available at http://{addr}/swagger-ui");
    println!("📖 Scalar UI available at http://{addr}/scalar");

    if let Err(err) = axum::serve(listener, app).await {
        error!(%err, "server error");
        std::process::exit(1);
    }
}
