//! Session-scoped view state.

use hwpm_content::ThemeKey;

use crate::boot::BootObserver;

/// Append-only, ordered log lines shown in the right panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogHistory {
    lines: Vec<String>,
}

impl LogHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::debug!("log: {line}");
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

/// Mutable state for one run of the program.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub(crate) active_theme: ThemeKey,
    pub(crate) boot_step: usize,
    pub(crate) is_booted: bool,
    pub(crate) is_selector_open: bool,
    pub(crate) log_history: LogHistory,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_theme(&self) -> ThemeKey {
        self.active_theme
    }

    pub fn boot_step(&self) -> usize {
        self.boot_step
    }

    pub fn is_booted(&self) -> bool {
        self.is_booted
    }

    pub fn is_selector_open(&self) -> bool {
        self.is_selector_open
    }

    pub fn log_history(&self) -> &LogHistory {
        &self.log_history
    }
}

impl BootObserver for SessionState {
    fn on_boot_complete(&mut self) {
        self.is_booted = true;
    }

    fn on_boot_step(&mut self, step: usize) {
        self.boot_step = step;
    }
}
