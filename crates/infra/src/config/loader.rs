//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file into the process environment, if one exists
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to a probed config file
//! 4. If no file exists, uses the public Bugout endpoints
//!
//! ## Environment Variables
//! - `BUGOUT_BROOD_URL`: Base URL of the identity service (required)
//! - `BUGOUT_SPIRE_URL`: Base URL of the content service (required)
//! - `BUGOUT_TIMEOUT_SECONDS`: Default request timeout in seconds (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./bugout.json` or `./bugout.toml` (current working directory)
//! 2. `../bugout.json` or `../bugout.toml` (parent directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use bugout_domain::constants::DEFAULT_TIMEOUT_SECONDS;
use bugout_domain::{BugoutConfig, BugoutError, Result};
use url::Url;

pub const ENV_BROOD_URL: &str = "BUGOUT_BROOD_URL";
pub const ENV_SPIRE_URL: &str = "BUGOUT_SPIRE_URL";
pub const ENV_TIMEOUT_SECONDS: &str = "BUGOUT_TIMEOUT_SECONDS";

const CONFIG_FILE_NAMES: [&str; 2] = ["bugout.json", "bugout.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `BugoutError::Config` if a source that is present is invalid
/// (malformed file, unparsable timeout, invalid URL). Missing sources fall
/// through to the next one.
pub fn load() -> Result<BugoutConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Could not load .env file"),
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
        }
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found, using default Bugout endpoints");
            Ok(BugoutConfig::default())
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `BugoutError::Config` if a required variable is missing or a
/// value is invalid.
pub fn load_from_env() -> Result<BugoutConfig> {
    let brood_url = env_var(ENV_BROOD_URL)?;
    let spire_url = env_var(ENV_SPIRE_URL)?;
    let timeout_seconds = match std::env::var(ENV_TIMEOUT_SECONDS) {
        Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
            BugoutError::Config(format!("Invalid {ENV_TIMEOUT_SECONDS} value {raw:?}: {e}"))
        })?,
        Err(_) => DEFAULT_TIMEOUT_SECONDS,
    };

    validate(BugoutConfig { brood_url, spire_url, timeout_seconds })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. JSON and TOML are
/// supported (detected by file extension); missing keys take defaults.
///
/// # Errors
/// Returns `BugoutError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A base URL does not parse
pub fn load_from_file(path: Option<PathBuf>) -> Result<BugoutConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BugoutError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BugoutError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| BugoutError::Config(format!("Failed to read config file: {e}")))?;

    validate(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content, format chosen by extension
fn parse_config(contents: &str, path: &Path) -> Result<BugoutConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| BugoutError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| BugoutError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(BugoutError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a config file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn validate(config: BugoutConfig) -> Result<BugoutConfig> {
    validate_url("brood_url", &config.brood_url)?;
    validate_url("spire_url", &config.spire_url)?;
    Ok(config)
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| BugoutError::Config(format!("Invalid {field} {value:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(BugoutError::Config(format!("Unsupported scheme {other:?} for {field}"))),
    }
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(BugoutError::Config(format!("Missing required environment variable: {key}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        std::env::remove_var(ENV_BROOD_URL);
        std::env::remove_var(ENV_SPIRE_URL);
        std::env::remove_var(ENV_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_BROOD_URL, "http://localhost:7474");
        std::env::set_var(ENV_SPIRE_URL, "http://localhost:7475");
        std::env::set_var(ENV_TIMEOUT_SECONDS, "12");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert_eq!(config.brood_url, "http://localhost:7474");
        assert_eq!(config.spire_url, "http://localhost:7475");
        assert_eq!(config.timeout_seconds, 12);
    }

    #[test]
    fn test_load_from_env_timeout_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_BROOD_URL, "http://localhost:7474");
        std::env::set_var(ENV_SPIRE_URL, "http://localhost:7475");
        std::env::remove_var(ENV_TIMEOUT_SECONDS);

        let result = load_from_env();
        clear_env();

        assert_eq!(result.expect("config from env").timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        clear_env();
        std::env::set_var(ENV_BROOD_URL, "http://localhost:7474");

        let result = load_from_env();
        clear_env();

        match result {
            Err(BugoutError::Config(msg)) => assert!(msg.contains(ENV_SPIRE_URL), "{msg}"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_BROOD_URL, "http://localhost:7474");
        std::env::set_var(ENV_SPIRE_URL, "http://localhost:7475");
        std::env::set_var(ENV_TIMEOUT_SECONDS, "soon");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(BugoutError::Config(_))));
    }

    #[test]
    fn test_load_from_env_invalid_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_BROOD_URL, "not a url");
        std::env::set_var(ENV_SPIRE_URL, "http://localhost:7475");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(BugoutError::Config(_))));
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
brood_url = "https://auth.example.com"
spire_url = "https://spire.example.com"
timeout_seconds = 30
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        std::fs::remove_file(path).ok();

        let config = result.expect("config from TOML");
        assert_eq!(config.brood_url, "https://auth.example.com");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/bugout.json")));
        assert!(matches!(result, Err(BugoutError::Config(_))));
    }

    #[test]
    fn test_parse_config_partial_json_uses_defaults() {
        let path = PathBuf::from("bugout.json");
        let config = parse_config(r#"{"timeout_seconds": 9}"#, &path).unwrap();
        assert_eq!(config, BugoutConfig { timeout_seconds: 9, ..BugoutConfig::default() });
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("brood_url: x", &PathBuf::from("bugout.yaml"));
        assert!(matches!(result, Err(BugoutError::Config(_))));
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        assert!(validate_url("brood_url", "ftp://auth.bugout.dev").is_err());
        assert!(validate_url("brood_url", "https://auth.bugout.dev").is_ok());
    }
}
