// Configuration module
// The only external configuration surface is the listening port.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;

/// Process configuration, read once at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `PORT` overrides the listening port; everything else is fixed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .set_default("port", i64::from(DEFAULT_PORT))?
            .build()?;

        settings.try_deserialize()
    }

    /// Listen on all interfaces; this is demo infrastructure.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Immutable per-process state shared by all request handlers.
///
/// The serving root is the process working directory; the demo directory is
/// the default fallback for application asset requests.
#[derive(Debug)]
pub struct AppState {
    pub root: PathBuf,
    pub demo_dir: PathBuf,
}

impl AppState {
    pub fn new() -> std::io::Result<Self> {
        let root = std::env::current_dir()?;
        let demo_dir = root.join("demo").join("typescript");
        Ok(Self { root, demo_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_binds_all_interfaces() {
        let cfg = Config { port: 8123 };
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:8123");
    }

    #[test]
    fn app_state_demo_dir_is_under_root() {
        let state = AppState::new().unwrap();
        assert!(state.demo_dir.starts_with(&state.root));
        assert!(state.demo_dir.ends_with("demo/typescript"));
    }
}
