//! Runtime configuration.
//!
//! Loaded from a TOML file. Every field has a default, so an empty file (or
//! no file at all) yields a working setup. Theme content is not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HwpmError, Result};

/// Smallest usable screen, in character cells.
pub const MIN_COLUMNS: u32 = 80;
/// Smallest usable screen, in character cells.
pub const MIN_ROWS: u32 = 24;

/// Delays driving the boot countdown and the fake execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// Delay between two boot steps.
    pub boot_step_ms: u64,
    /// Delay between the last boot step and completion.
    pub boot_finish_ms: u64,
    /// Delay before the second log line of an execution.
    pub execute_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            boot_step_ms: 800,
            boot_finish_ms: 1000,
            execute_delay_ms: 600,
        }
    }
}

/// Top-level HWPM configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HwpmConfig {
    /// Terminal title, set by the text backend on `init`. Empty leaves it alone.
    pub window_title: String,
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Width of one character cell in pixels.
    pub glyph_width: u32,
    /// Height of one character cell in pixels.
    pub glyph_height: u32,
    /// Frame loop period.
    pub frame_ms: u64,
    /// Rows reserved at the bottom of the screen for the command console.
    pub console_lines: u32,
    pub timing: TimingConfig,
}

impl Default for HwpmConfig {
    fn default() -> Self {
        Self {
            window_title: "HelloWorld Pro Max".to_string(),
            screen_width: 960,
            screen_height: 320,
            glyph_width: 8,
            glyph_height: 8,
            frame_ms: 16,
            console_lines: 6,
            timing: TimingConfig::default(),
        }
    }
}

impl HwpmConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml(&text)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.glyph_width == 0 || self.glyph_height == 0 {
            return Err(HwpmError::Config("glyph size must be non-zero".into()));
        }
        if self.frame_ms == 0 {
            return Err(HwpmError::Config("frame_ms must be non-zero".into()));
        }
        let (cols, rows) = self.cells();
        if cols < MIN_COLUMNS || rows < MIN_ROWS {
            return Err(HwpmError::Config(format!(
                "screen is {cols}x{rows} cells, need at least {MIN_COLUMNS}x{MIN_ROWS}"
            )));
        }
        if self.console_lines >= rows / 2 {
            return Err(HwpmError::Config(format!(
                "console_lines ({}) must be below half the screen height ({} rows)",
                self.console_lines, rows
            )));
        }
        Ok(())
    }

    /// Screen size in character cells (columns, rows).
    pub fn cells(&self) -> (u32, u32) {
        (
            self.screen_width / self.glyph_width.max(1),
            self.screen_height / self.glyph_height.max(1),
        )
    }
}
