use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ward_core::{CoreConfig, JsonFileStore, DEFAULT_REST_ADDR};

/// Main entry point for the ward board
///
/// Opens the patient store and serves the REST API.
///
/// # Environment Variables
/// - `WARD_REST_ADDR`: REST server address (default: "0.0.0.0:5000")
/// - `PATIENT_DATA_FILE`: JSON file holding the patient array (default: "patients.json")
/// - `WARD_STATIC_DIR`: Directory served for non-API paths (default: "."; empty disables it)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, store initialisation or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ward_run=info".parse()?)
                .add_directive("ward_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("WARD_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = CoreConfig::from_env_values(
        std::env::var("PATIENT_DATA_FILE").ok(),
        std::env::var("WARD_STATIC_DIR").ok(),
    )?;

    let store = JsonFileStore::from_config(&cfg)?;
    tracing::info!("++ Using patient store {}", store.path().display());

    let app = api_rest::router(Arc::new(store), cfg.static_dir());

    tracing::info!("++ Starting ward board REST on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
