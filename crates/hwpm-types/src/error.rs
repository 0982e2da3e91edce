//! Error types for HWPM.

use std::io;

/// Errors produced by the HWPM framework.
#[derive(Debug, thiserror::Error)]
pub enum HwpmError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, HwpmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display() {
        let e = HwpmError::Backend("init failed".into());
        assert_eq!(format!("{e}"), "backend error: init failed");
    }

    #[test]
    fn config_error_display() {
        let e = HwpmError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn command_error_display() {
        let e = HwpmError::Command("unknown cmd".into());
        assert_eq!(format!("{e}"), "command error: unknown cmd");
    }

    #[test]
    fn unknown_theme_display() {
        let e = HwpmError::UnknownTheme("COBOL".into());
        assert_eq!(format!("{e}"), "unknown theme: COBOL");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: HwpmError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: HwpmError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(HwpmError::Command("oops".into()));
        assert!(r.is_err());
    }
}
