use std::net::{Ipv4Addr, SocketAddr};

use api::serve;
use repository::init_repository;
use tokio::net::TcpListener;
use tracing::info;

mod settings;

use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = Settings::load()?;
    let repository = init_repository(&settings.store_config()).await?;

    let router = serve(repository, &settings.server.allow_origins)?;

    let address =
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, settings.server.port));
    let listener = TcpListener::bind(&address).await?;
    info!(%address, "calendar service listening");

    Ok(axum::serve(listener, router).await?)
}
