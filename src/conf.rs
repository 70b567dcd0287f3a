//! Environment-derived runtime settings.

use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite://polls.db";
const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("invalid {name} value: {value}")]
	Invalid { name: &'static str, value: String },
}

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct Settings {
	/// Database connection string (`DATABASE_URL`).
	pub database_url: String,
	/// Listen address (`POLLS_ADDR`).
	pub bind_addr: SocketAddr,
}

impl Settings {
	/// Read settings from the environment, falling back to defaults.
	pub fn from_env() -> Result<Self, SettingsError> {
		let database_url =
			env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
		let addr = env::var("POLLS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
		let bind_addr = addr.parse().map_err(|_| SettingsError::Invalid {
			name: "POLLS_ADDR",
			value: addr,
		})?;

		Ok(Self {
			database_url,
			bind_addr,
		})
	}
}
