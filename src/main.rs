use dotenvy::dotenv;

use registra::logging::init_tracing;
use registra::metrics::{init_metrics, metrics_app};
use registra::router::init_router;
use registra::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state().await;

    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .expect("Failed to run database migrations");

    // Prometheus exposition lives on its own listener so the main API
    // port never serves internal metrics.
    if let Some(handle) = init_metrics() {
        let metrics_port: u16 = std::env::var("METRICS_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(9091);

        tokio::spawn(async move {
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", metrics_port))
                .await
                .expect("Failed to bind metrics listener");
            tracing::info!("Metrics available at http://localhost:{}/metrics", metrics_port);
            axum::serve(listener, metrics_app(handle))
                .await
                .expect("Metrics server failed");
        });
    }

    let app = init_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind API listener");
    println!("🚀 Server running on http://localhost:{}", port);
    println!("📚 Swagger UI available at http://localhost:{}/swagger-ui", port);
    println!("📖 Scalar UI available at http://localhost:{}/scalar", port);
    axum::serve(listener, app).await.expect("Server failed");
}
