use crate::error::{IoError, Result};
use std::path::Path;
use swarm_core::config::AppConfig;

/// Reads and validates a TOML configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| IoError::from(e).with_context(format!("reading {}", path.display())))?;
    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| IoError::from(e).with_context(format!("parsing {}", path.display())))?;
    config
        .validate()
        .map_err(|e| IoError::validation(e.to_string()).with_context(path.display().to_string()))?;
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(path = %path.display(), "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_file_is_error_for_strict_load() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[world]\nagent_count = 75\n\n[flocking]\nmax_speed = 3.5").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.world.agent_count, 75);
        assert_eq!(config.flocking.max_speed, 3.5);
    }

    #[test]
    fn test_load_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "target_fps = 0\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, IoError::Context { .. }));
    }

    #[test]
    fn test_load_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[world\nwidth = ").unwrap();
        assert!(load_config(&path).is_err());
    }
}
