use serde::Deserialize;
use std::time::Duration;

/// Studio configuration loaded from YAML.
///
/// Every field has a default, and a config that fails to parse falls back to
/// the defaults with a warning; a broken config file must never stop the
/// studio from rendering.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StudioConfig {
    /// Longest edge allowed for a source raster; larger uploads are
    /// proportionally downscaled before reaching the pipeline.
    pub max_source_dim: u32,

    /// Upload size ceiling in bytes.
    pub max_upload_bytes: usize,

    /// Result cache capacity in entries.
    pub cache_capacity: usize,

    /// Debounce window for coalescing parameter changes, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            max_source_dim: 1024,
            max_upload_bytes: 10 * 1024 * 1024,
            cache_capacity: 16,
            debounce_ms: 200,
        }
    }
}

impl StudioConfig {
    /// Parse configuration from a YAML string, falling back to defaults on
    /// any parse failure.
    pub fn from_yaml(content: &str) -> Self {
        match serde_yaml::from_str(content) {
            Ok(config) => {
                let config: Self = config;
                tracing::info!(
                    max_source_dim = config.max_source_dim,
                    cache_capacity = config.cache_capacity,
                    debounce_ms = config.debounce_ms,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// The debounce window as a [`Duration`].
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
