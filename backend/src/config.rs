use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Env var naming an optional YAML config file
pub const CONFIG_ENV: &str = "SITE_CONFIG";

/// Settings for the static host
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding the built frontend (index.html + wasm bundle)
    pub dist_dir: PathBuf,
    /// JSON file the task list is served from
    pub tasks_file: PathBuf,
    /// Origin allowed to call the API during frontend development
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            dist_dir: PathBuf::from("../frontend/dist"),
            tasks_file: PathBuf::from("data/tasks.json"),
            allowed_origin: "http://localhost:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from `SITE_CONFIG` (if set) and apply `SITE_*` overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("SITE_BIND_ADDR") {
            self.bind_addr = addr
                .parse()
                .with_context(|| format!("Invalid SITE_BIND_ADDR: {}", addr))?;
        }
        if let Some(dir) = lookup("SITE_DIST_DIR") {
            self.dist_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("SITE_TASKS_FILE") {
            self.tasks_file = PathBuf::from(file);
        }
        if let Some(origin) = lookup("SITE_ALLOWED_ORIGIN") {
            self.allowed_origin = origin;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr: \"0.0.0.0:8000\"\ntasks_file: /srv/tasks.json").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8000)));
        assert_eq!(config.tasks_file, PathBuf::from("/srv/tasks.json"));
        assert_eq!(config.dist_dir, ServerConfig::default().dist_dir);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ServerConfig::from_file(Path::new("/definitely/not/here.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SITE_BIND_ADDR", "127.0.0.1:9999"),
            ("SITE_ALLOWED_ORIGIN", "https://example.org"),
        ]
        .into_iter()
        .collect();

        let mut config = ServerConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.bind_addr.port(), 9999);
        assert_eq!(config.allowed_origin, "https://example.org");
        assert_eq!(config.tasks_file, PathBuf::from("data/tasks.json"));
    }

    #[test]
    fn test_bad_bind_addr_override() {
        let mut config = ServerConfig::default();
        let result = config.apply_overrides(|key| (key == "SITE_BIND_ADDR").then(|| "nope".to_string()));
        assert!(result.is_err());
    }
}
