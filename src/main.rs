//! Server binary for the polls application.

use polls::conf::Settings;
use polls::{config, db, server};
use std::process;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() {
	fmt().with_env_filter(EnvFilter::from_default_env()).init();

	if let Err(e) = run().await {
		eprintln!("Error: {}", e);
		process::exit(1);
	}
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
	let settings = Settings::from_env()?;

	let pool = db::connect(&settings.database_url).await?;
	db::init_schema(&pool).await?;

	let router = Arc::new(config::urls::routes(&pool));

	tokio::select! {
		result = server::serve(settings.bind_addr, router) => result,
		_ = server::shutdown_signal() => {
			tracing::info!("shutting down");
			Ok(())
		}
	}
}
