//! Gate configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! command-line overrides.
//!
//! ```json
//! {
//!   "video_src": "/horror.mp4",
//!   "video_mime": "video/mp4",
//!   "enter_delay_ms": 2000,
//!   "exit_delay_ms": 3000
//! }
//! ```
//!
//! Missing keys fall back to their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};

/// Static shown between ENTER and playback.
pub const DEFAULT_ENTER_DELAY_MS: u64 = 2000;
/// Static shown between end of playback and window close.
pub const DEFAULT_EXIT_DELAY_MS: u64 = 3000;
pub const DEFAULT_VIDEO_SRC: &str = "/horror.mp4";
pub const DEFAULT_VIDEO_MIME: &str = "video/mp4";

/// File name looked up under the platform config directory.
const CONFIG_FILE_NAME: &str = "config.json";

/// Runtime configuration for the gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// URL or path of the gated video
    pub video_src: String,
    /// MIME type announced on the `<source>` element
    pub video_mime: String,
    /// Duration of the static between ENTER and playback
    pub enter_delay_ms: u64,
    /// Duration of the static between end of playback and close
    pub exit_delay_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            video_src: DEFAULT_VIDEO_SRC.to_string(),
            video_mime: DEFAULT_VIDEO_MIME.to_string(),
            enter_delay_ms: DEFAULT_ENTER_DELAY_MS,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
        }
    }
}

/// Values supplied on the command line. `None` keeps the lower layer's value.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub video_src: Option<String>,
    pub video_mime: Option<String>,
    pub enter_delay_ms: Option<u64>,
    pub exit_delay_ms: Option<u64>,
}

impl GateConfig {
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    /// Parse a config from a JSON file.
    pub fn from_file(path: &Path) -> GateResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: GateConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the file layer.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used only if a file is actually there.
    pub fn load(explicit: Option<&Path>) -> GateResult<Self> {
        if let Some(path) = explicit {
            tracing::info!("Loading gate config from {:?}", path);
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::info!("Loading gate config from {:?}", path);
                Self::from_file(&path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> GateResult<Self> {
        if let Some(src) = overrides.video_src {
            self.video_src = src;
        }
        if let Some(mime) = overrides.video_mime {
            self.video_mime = mime;
        }
        if let Some(ms) = overrides.enter_delay_ms {
            self.enter_delay_ms = ms;
        }
        if let Some(ms) = overrides.exit_delay_ms {
            self.exit_delay_ms = ms;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> GateResult<()> {
        if self.video_src.trim().is_empty() {
            return Err(GateError::Config("video_src must not be empty".into()));
        }
        if self.video_mime.trim().is_empty() {
            return Err(GateError::Config("video_mime must not be empty".into()));
        }
        Ok(())
    }
}

/// `<config_dir>/static-gate/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("static-gate").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GateConfig::default();
        assert_eq!(config.enter_delay(), Duration::from_millis(2000));
        assert_eq!(config.exit_delay(), Duration::from_millis(3000));
        assert_eq!(config.video_src, "/horror.mp4");
        assert_eq!(config.video_mime, "video/mp4");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GateConfig = serde_json::from_str(r#"{ "exit_delay_ms": 500 }"#).unwrap();
        assert_eq!(config.exit_delay_ms, 500);
        assert_eq!(config.enter_delay_ms, DEFAULT_ENTER_DELAY_MS);
        assert_eq!(config.video_src, DEFAULT_VIDEO_SRC);
    }

    #[test]
    fn test_overrides_win() {
        let config = GateConfig::default()
            .with_overrides(ConfigOverrides {
                video_src: Some("file:///tmp/clip.webm".into()),
                video_mime: Some("video/webm".into()),
                enter_delay_ms: Some(10),
                exit_delay_ms: None,
            })
            .unwrap();
        assert_eq!(config.video_src, "file:///tmp/clip.webm");
        assert_eq!(config.video_mime, "video/webm");
        assert_eq!(config.enter_delay_ms, 10);
        assert_eq!(config.exit_delay_ms, DEFAULT_EXIT_DELAY_MS);
    }

    #[test]
    fn test_empty_source_rejected() {
        let result = GateConfig::default().with_overrides(ConfigOverrides {
            video_src: Some("  ".into()),
            ..Default::default()
        });
        assert!(matches!(result, Err(GateError::Config(_))));
    }
}
