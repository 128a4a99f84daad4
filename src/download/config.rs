//! Download configuration.
//!
//! Settings can be built in code, or loaded from JSON where any missing
//! field takes its default:
//!
//! ```
//! use dict_download::DownloadConfig;
//!
//! let config = DownloadConfig::from_json_str(r#"{"read_timeout_ms": 2000, "batch_size": 500}"#)?;
//! assert_eq!(config.read_timeout().as_millis(), 2000);
//! assert_eq!(config.chunk_size, 64 * 1024);
//! # Ok::<(), dict_download::DownloadError>(())
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snafu::Backtrace;

use crate::{DownloadError, Result};

/// Settings for a download pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Longest time a single read from the source may take
    pub read_timeout_ms: u64,
    /// Connection timeout for HTTP sources
    pub connect_timeout_ms: u64,
    /// Read buffer size (default: 64KB)
    pub chunk_size: usize,
    /// Number of records per batch when loading in batches
    pub batch_size: usize,
    /// Percentage of the expected records between progress reports
    pub progress_interval_percent: u64,
    /// User-Agent header sent with HTTP requests
    pub user_agent: String,
    /// Whether HTTP requests honor the system proxy settings
    pub use_system_proxy: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        DownloadConfig {
            read_timeout_ms: 5000,
            connect_timeout_ms: 10_000,
            chunk_size: 64 * 1024,
            batch_size: 4000,
            progress_interval_percent: 10,
            user_agent: concat!("dict-download/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

impl DownloadConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DownloadConfig = serde_json::from_str(json).map_err(|e| DownloadError::ParserError {
            source: Box::new(e),
            backtrace: Backtrace::capture(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.read_timeout_ms == 0 {
            return Err(DownloadError::invalid_parameter("read_timeout_ms must be positive"));
        }
        if self.connect_timeout_ms == 0 {
            return Err(DownloadError::invalid_parameter("connect_timeout_ms must be positive"));
        }
        if self.chunk_size == 0 {
            return Err(DownloadError::invalid_parameter("chunk_size must be positive"));
        }
        if self.batch_size == 0 {
            return Err(DownloadError::invalid_parameter("batch_size must be positive"));
        }
        if self.progress_interval_percent > 100 {
            return Err(DownloadError::invalid_parameter(format!(
                "progress_interval_percent must be at most 100, got {}",
                self.progress_interval_percent
            )));
        }
        Ok(())
    }
}
