// Configuration module entry point
// Manages application configuration and process-wide state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, StaticConfig,
};

impl Config {
    /// Load configuration from "config.toml" in the working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; every key has a default. `SERVER_*` environment
    /// variables override file values.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5001)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("static.root", "static")?
            .set_default("static.index_file", "index.html")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Absolute-or-relative path of the SPA entry document.
    pub fn entry_document(&self) -> PathBuf {
        Path::new(&self.static_files.root).join(&self.static_files.index_file)
    }

    /// Verify the static bundle is servable.
    ///
    /// A missing entry document is a fatal misconfiguration: the fallback
    /// route would have nothing to serve, so refuse to start.
    pub fn validate_static_root(&self) -> Result<(), String> {
        let entry = self.entry_document();
        if entry.is_file() {
            Ok(())
        } else {
            Err(format!(
                "Entry document not found: {} (check [static] root/index_file)",
                entry.display()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("does-not-exist").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 5001);
        assert_eq!(cfg.static_files.root, "static");
        assert_eq!(cfg.static_files.index_file, "index.html");
        assert!(!cfg.http.enable_cors);
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        let cfg = Config::load_from("does-not-exist").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 5001);
    }

    #[test]
    fn test_missing_entry_document_is_rejected() {
        let mut cfg = Config::load_from("does-not-exist").unwrap();
        cfg.static_files.root = "no-such-dir".to_string();
        assert!(cfg.validate_static_root().is_err());
    }

    #[test]
    fn test_existing_entry_document_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let mut cfg = Config::load_from("does-not-exist").unwrap();
        cfg.static_files.root = dir.path().to_string_lossy().into_owned();
        assert!(cfg.validate_static_root().is_ok());
    }
}
