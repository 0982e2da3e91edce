//! Theme-independent strings: branding, boot script, selector chrome, and
//! the log line formats.

use crate::key::ThemeKey;

pub const BRAND: &str = "HWPM";
pub const BRAND_TAG: &str = "ENTERPRISE";
pub const VERSION: &str = "v9.2.1-stable";

pub const BOOT_TITLE: &str = "System.Boot.Sequence_v9.2";
pub const BOOT_FOOTER: &str = "Memory Usage: 14.2 GB (Nominal)";

/// Messages revealed one per boot step.
pub const BOOT_MESSAGES: &[&str] = &[
    "Initializing quantum string buffers...",
    "Loading CSS variables from orbital satellite...",
    "Verifying user caffeine levels...",
    "Dockerizing the 'H' character...",
    "Allocating 4GB RAM for whitespace...",
    "Consulting StackOverflow for best practices...",
    "Decrypting Hello World via RSA-4096...",
    "Finalizing Enterprise Abstractions...",
];

pub const SELECTOR_TITLE: &str = "Semantic Protocol Override";
pub const SELECTOR_ABORT: &str = "[X] ABORT";
pub const SELECTOR_WARNING: &str = "WARNING: Switching language requires a generic coffee break. \
                                    Please wait while we rearrange the pixels.";
pub const SELECTOR_FOOTER_LEFT: &str = "MEM: 0x4F2A";
pub const SELECTOR_FOOTER_RIGHT: &str = "PRESS F1 FOR HELP";

/// Logged when the user triggers an execution.
pub fn user_log(execute_label: &str) -> String {
    format!("[USER]: Initiating {execute_label}...")
}

/// Logged by the kernel once the execution delay elapses.
pub fn kernel_log(status: &str) -> String {
    format!("[KERNEL]: {status}")
}

/// Logged when the user picks a theme.
pub fn switch_log(key: ThemeKey) -> String {
    format!("[SYSTEM]: Context switch to {key} mode...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_boot_messages() {
        assert_eq!(BOOT_MESSAGES.len(), 8);
        assert!(BOOT_MESSAGES.iter().all(|m| !m.is_empty()));
    }

    #[test]
    fn log_formats() {
        assert_eq!(user_log("JMP _start"), "[USER]: Initiating JMP _start...");
        assert_eq!(kernel_log("System Ready"), "[KERNEL]: System Ready");
        assert_eq!(
            switch_log(ThemeKey::Corporate),
            "[SYSTEM]: Context switch to CORPORATE mode..."
        );
    }

    #[test]
    fn selector_warning_is_one_sentence_pair() {
        assert!(SELECTOR_WARNING.starts_with("WARNING:"));
        assert!(!SELECTOR_WARNING.contains("  "));
    }
}
