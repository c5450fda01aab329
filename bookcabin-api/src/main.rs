use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bookcabin_api::{app, AppState};
use bookcabin_core::provider::FlightProvider;
use bookcabin_engine::FlightAggregator;
use bookcabin_providers::{AirAsia, Batik, Garuda, Lion};
use bookcabin_store::Config;

#[tokio::main]
async fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load config: {err}");
            process::exit(1);
        }
    };

    init_tracing(&config);
    tracing::info!(
        port = config.server_port,
        env = %config.env,
        read_timeout_secs = config.http_read_timeout,
        write_timeout_secs = config.http_write_timeout,
        aggregator_timeout_secs = config.aggregator_timeout,
        "starting bookcabin API"
    );

    let providers: Vec<Arc<dyn FlightProvider>> = vec![
        Arc::new(Garuda::new(&config.garuda_path)),
        Arc::new(Lion::new(&config.lion_path)),
        Arc::new(AirAsia::new(&config.airasia_path)),
        Arc::new(Batik::new(&config.batik_path)),
    ];
    let aggregator = FlightAggregator::new(
        Duration::from_secs(config.aggregator_timeout),
        providers,
    );

    let state = AppState {
        aggregator: Arc::new(aggregator),
    };
    let app = app(state, Duration::from_secs(config.http_inbound_timeout));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {addr}: {err}");
            process::exit(1);
        }
    };
    tracing::info!("listening on {addr}");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server error: {err}");
        process::exit(1);
    }
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
