//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. Validates the result (timezone, redirect URI, secrets)
//!
//! ## Environment Variables
//! Required:
//! - `MEETLINK_CLIENT_ID`: OAuth client identifier
//! - `MEETLINK_CLIENT_SECRET`: OAuth client secret
//! - `MEETLINK_REDIRECT_URI`: Callback URI registered with the provider
//! - `MEETLINK_SESSION_SECRET`: Session cookie signing secret
//!
//! Optional:
//! - `MEETLINK_HOST`: Listen address (default `127.0.0.1`)
//! - `MEETLINK_PORT`: Listen port (default `3000`)
//! - `MEETLINK_STATIC_DIR`: Frontend directory (default `static`)
//! - `MEETLINK_TIMEZONE`: IANA zone for created events (default `Asia/Kolkata`)
//! - `MEETLINK_EXPOSE_PROVIDER_ERRORS`: Pass raw provider error text to
//!   clients (default `false`)
//! - `MEETLINK_AUTH_URL` / `MEETLINK_TOKEN_URL` / `MEETLINK_CALENDAR_API_BASE`:
//!   Provider endpoint overrides (default: real Google endpoints)
//! - `MEETLINK_CONFIG_PATH`: Explicit config file path for the fallback
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./meetlink.json` or `./meetlink.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use meetlink_domain::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR};
use meetlink_domain::{
    Config, MeetLinkError, MeetingConfig, OAuthConfig, Result, ServerConfig, SessionConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file
/// (`MEETLINK_CONFIG_PATH` or the probed standard locations). The returned
/// configuration is always validated.
///
/// # Errors
/// Returns `MeetLinkError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or fail validation
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(config_path_override())?
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `MeetLinkError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let client_id = env_var("MEETLINK_CLIENT_ID")?;
    let client_secret = env_var("MEETLINK_CLIENT_SECRET")?;
    let redirect_uri = env_var("MEETLINK_REDIRECT_URI")?;
    let session_secret = env_var("MEETLINK_SESSION_SECRET")?;

    let port = match std::env::var("MEETLINK_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| MeetLinkError::Config(format!("Invalid port: {e}")))?,
        Err(_) => DEFAULT_PORT,
    };

    let mut oauth = OAuthConfig::google(client_id, client_secret, redirect_uri);
    if let Ok(auth_url) = std::env::var("MEETLINK_AUTH_URL") {
        oauth.auth_url = auth_url;
    }
    if let Ok(token_url) = std::env::var("MEETLINK_TOKEN_URL") {
        oauth.token_url = token_url;
    }

    let mut meeting = MeetingConfig::default();
    if let Ok(timezone) = std::env::var("MEETLINK_TIMEZONE") {
        meeting.timezone = timezone;
    }
    if let Ok(api_base) = std::env::var("MEETLINK_CALENDAR_API_BASE") {
        meeting.api_base_url = api_base;
    }

    Ok(Config {
        server: ServerConfig {
            host: env_or("MEETLINK_HOST", DEFAULT_HOST),
            port,
            static_dir: env_or("MEETLINK_STATIC_DIR", DEFAULT_STATIC_DIR),
            expose_provider_errors: env_bool("MEETLINK_EXPOSE_PROVIDER_ERRORS", false),
        },
        oauth,
        session: SessionConfig::new(session_secret),
        meeting,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `MeetLinkError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MeetLinkError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MeetLinkError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MeetLinkError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Validate a loaded configuration
///
/// # Errors
/// Returns `MeetLinkError::Config` if:
/// - The timezone is not a known IANA zone
/// - The redirect URI is not a valid absolute URL
/// - The session secret or OAuth client credentials are empty
pub fn validate(config: &Config) -> Result<()> {
    chrono_tz::Tz::from_str(&config.meeting.timezone).map_err(|_| {
        MeetLinkError::Config(format!("Unknown timezone: {}", config.meeting.timezone))
    })?;

    url::Url::parse(&config.oauth.redirect_uri)
        .map_err(|e| MeetLinkError::Config(format!("Invalid redirect URI: {e}")))?;

    if config.oauth.client_id.trim().is_empty() {
        return Err(MeetLinkError::Config("OAuth client id is empty".to_string()));
    }
    if config.oauth.client_secret.trim().is_empty() {
        return Err(MeetLinkError::Config("OAuth client secret is empty".to_string()));
    }
    if config.session.secret.trim().is_empty() {
        return Err(MeetLinkError::Config("Session secret is empty".to_string()));
    }

    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `MeetLinkError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MeetLinkError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MeetLinkError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(MeetLinkError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, and the executable's
/// directory for `config.{json,toml}` and `meetlink.{json,toml}`.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("meetlink.json"),
            cwd.join("meetlink.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("meetlink.json"),
                exe_dir.join("meetlink.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn config_path_override() -> Option<PathBuf> {
    std::env::var("MEETLINK_CONFIG_PATH").ok().map(PathBuf::from)
}

/// Get required environment variable
///
/// # Errors
/// Returns `MeetLinkError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        MeetLinkError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Environment variable with a default
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
