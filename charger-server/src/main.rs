use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use charger_server::config::ServerConfig;
use charger_server::ocm::{ChargerSource, MockChargerClient, OcmClient};
use charger_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("charger_server=info,tower_http=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Pick the station source
    let source: ChargerSource = match &config.mock_file {
        Some(path) => {
            let mock = MockChargerClient::new(path)?;
            info!(
                path = %path.display(),
                stations = mock.station_count(),
                "serving stations from mock file"
            );
            mock.into()
        }
        None => {
            if config.api_key.is_none() {
                warn!("OCM_API_KEY not set; requests must pass apikey");
            }
            OcmClient::new(config.ocm.clone())?.into()
        }
    };

    let addr = config.bind_addr;
    info!(
        reference = %config.default_reference,
        source = source.label(),
        "default reference point"
    );

    let state = AppState::new(source, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Charger Locator listening on http://{addr}");
    info!("  GET /?postalcode=..&apikey=..[&latitude=..&longitude=..]");
    info!("  GET /nearest?apikey=..[&latitude=..&longitude=..&limit=..]");
    info!("  GET /health");

    axum::serve(listener, app).await?;
    Ok(())
}
