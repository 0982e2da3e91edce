//! Derived screen model.
//!
//! A [`Screen`] is a pure function of the orchestrator's state. Renderers
//! only read it; nothing here mutates the session.

use hwpm_content::{FileEntry, LanguageOption, ThemeContent, ThemeKey};

use crate::boot::LineStatus;

/// What the display shows right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    /// Before mount.
    Blank,
    Boot(BootView),
    Main(MainView<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootLine {
    pub text: &'static str,
    pub status: LineStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootView {
    pub title: &'static str,
    pub lines: Vec<BootLine>,
    /// 0.0 to 1.0.
    pub progress: f32,
    pub footer: &'static str,
    /// Session clock, for the per-line timestamps.
    pub clock_ms: u64,
}

impl BootView {
    pub fn visible_lines(&self) -> impl Iterator<Item = &BootLine> {
        self.lines
            .iter()
            .filter(|l| l.status != LineStatus::Hidden)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorRow {
    pub option: &'static LanguageOption,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub rows: Vec<SelectorRow>,
}

impl SelectorView {
    pub fn for_active(active: ThemeKey) -> Self {
        Self {
            rows: hwpm_content::catalog()
                .iter()
                .map(|option| SelectorRow {
                    option,
                    active: option.key == active,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainView<'a> {
    pub key: ThemeKey,
    pub content: &'static ThemeContent,
    pub files: &'static [FileEntry],
    pub logs: &'a [String],
    pub selector: Option<SelectorView>,
}

/// `[hh:mm:ss]` for a session clock in milliseconds.
pub fn clock_stamp(clock_ms: u64) -> String {
    let secs = clock_ms / 1000;
    format!(
        "[{:02}:{:02}:{:02}]",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_stamp_formats() {
        assert_eq!(clock_stamp(0), "[00:00:00]");
        assert_eq!(clock_stamp(61_500), "[00:01:01]");
        assert_eq!(clock_stamp(3_600_000 * 25 + 59_000), "[01:00:59]");
    }

    #[test]
    fn selector_marks_exactly_one_active() {
        let view = SelectorView::for_active(ThemeKey::Cpp);
        assert_eq!(view.rows.len(), ThemeKey::ALL.len());
        let active: Vec<_> = view
            .rows
            .iter()
            .filter(|r| r.active)
            .map(|r| r.option.key)
            .collect();
        assert_eq!(active, vec![ThemeKey::Cpp]);
    }

    #[test]
    fn visible_lines_skip_hidden() {
        let view = BootView {
            title: "t",
            lines: vec![
                BootLine {
                    text: "a",
                    status: LineStatus::Done,
                },
                BootLine {
                    text: "b",
                    status: LineStatus::Current,
                },
                BootLine {
                    text: "c",
                    status: LineStatus::Hidden,
                },
            ],
            progress: 0.25,
            footer: "f",
            clock_ms: 0,
        };
        let texts: Vec<_> = view.visible_lines().map(|l| l.text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
