use anyhow::Result;
use backend::{
    auth::session::SessionManager, axum_http::http_serve, config::config_loader, prepare_store,
};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {:#}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    sriyan_core::observability::init_observability("backend")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let store = prepare_store(&dotenvy_env).await?;
    let sessions = SessionManager::from_config(&dotenvy_env)?;

    http_serve::start(Arc::new(dotenvy_env), store, Arc::new(sessions)).await?;

    Ok(())
}
