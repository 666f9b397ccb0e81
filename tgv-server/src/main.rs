use tgv_server::cache::{CachedNavitiaClient, JourneyCacheConfig};
use tgv_server::navitia::{NavitiaClient, NavitiaConfig};
use tgv_server::stations::StationDirectory;
use tgv_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tgv_server=info".into()),
        )
        .init();

    let api_key = std::env::var("SNCF_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: SNCF_API_KEY not set, upstream requests will fail");
        String::new()
    });

    let stations_path =
        std::env::var("STATIONS_PATH").unwrap_or_else(|_| "tgv-server/data/stations.json".into());
    let stations = StationDirectory::load(&stations_path)?;
    tracing::info!(path = %stations_path, count = stations.len(), "loaded station directory");

    let client = NavitiaClient::new(NavitiaConfig::new(api_key))?;
    let navitia = CachedNavitiaClient::new(client, JourneyCacheConfig::default());

    let state = AppState::new(navitia, stations);
    let app = create_router(state);

    let addr = "127.0.0.1:3000";
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("TGV dashboard server listening on http://{addr}");
    println!("  GET /health");
    println!("  GET /api/providers");
    println!("  GET /api/stations");
    println!("  GET /api/journeys?from=<station>&to=<station>");
    println!("  GET /api/trains?number=<train number>");

    axum::serve(listener, app).await?;

    Ok(())
}
