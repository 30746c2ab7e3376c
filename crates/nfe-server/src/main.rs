use std::{sync::Arc, time::Duration};

use nfe_server::{
    routes,
    services::{converter::MeuDanfeClient, lookup::SimulatedInvoiceSource},
    settings::Settings,
    state::AppState,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = Settings::load("config/services.toml").unwrap();

    let invoices = Arc::new(SimulatedInvoiceSource::new(Duration::from_millis(
        settings.lookup.simulated_delay_ms,
    )));
    let converter = Arc::new(MeuDanfeClient::new(&settings.converter).unwrap());

    let router = routes::create_routes(AppState::new(invoices, converter));

    let addr = format!("0.0.0.0:{}", settings.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("NFe server started on port {}", settings.http.port);
    tracing::info!(
        "Swagger UI available at: http://localhost:{}/swagger-ui",
        settings.http.port
    );
    axum::serve(listener, router).await.unwrap();
}
