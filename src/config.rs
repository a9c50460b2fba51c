use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the EduSync backend, e.g. `http://localhost:5000`.
    pub api_base_url: String,
    /// Where the session file lives on disk.
    pub session_file: PathBuf,
    pub request_timeout_secs: u64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let api_base_url = get_env("EDUSYNC_API_BASE_URL")?;
        Url::parse(&api_base_url)
            .map_err(|e| Error::Config(format!("Invalid EDUSYNC_API_BASE_URL: {}", e)))?;

        let session_file = env::var("EDUSYNC_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".edusync-session.json"));

        let request_timeout_secs = match env::var("EDUSYNC_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|e| {
                Error::Config(format!("Invalid value for EDUSYNC_REQUEST_TIMEOUT_SECS: {}", e))
            })?,
            Err(_) => 30,
        };

        Ok(Self {
            api_base_url,
            session_file,
            request_timeout_secs,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
