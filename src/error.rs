// ~/winelocale/src/error.rs

use std::path::PathBuf;

/// Every error WineLocale can produce. Core variants are configuration
/// bugs and fail fast; `ExternalTool` is the Wine process boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Font point size has no entry in the 96dpi metrics table.
    #[error("font size {0}pt is not in the 96dpi metrics table")]
    UnsupportedFontSize(u32),

    /// Locale code outside the supported set.
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),

    /// Face name contains a character the single-byte LOGFONT buffer
    /// cannot carry.
    #[error("face name '{face}' contains non-encodable character '{ch}'")]
    Encoding { face: String, ch: char },

    /// A Wine tool could not be launched, exited nonzero, or timed out.
    #[error("{tool} failed: {reason}")]
    ExternalTool { tool: &'static str, reason: String },

    /// Target executable does not exist on disk.
    #[error("target executable not found: {}", .0.display())]
    TargetNotFound(PathBuf),

    /// Settings file could not be parsed.
    #[error("failed to parse settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Settings could not be serialized for writing.
    #[error("failed to serialize settings: {0}")]
    SettingsWrite(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
