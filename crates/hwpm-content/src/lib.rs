//! Content registry -- the static tables behind every theme.
//!
//! A theme is selected by a [`ThemeKey`] and resolves to a record of display
//! strings ([`ThemeContent`]) and a flat, decorative file tree
//! ([`FileEntry`] list). Every table is `static` and every lookup is an
//! exhaustive `match`, so a missing entry is a compile error rather than a
//! runtime failure.

pub mod catalog;
pub mod chrome;
pub mod files;
pub mod key;
pub mod strings;

pub use catalog::{LanguageOption, catalog, option};
pub use files::{FileEntry, FileKind, files};
pub use key::ThemeKey;
pub use strings::{ThemeContent, content};

/// Everything the panel needs for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub key: ThemeKey,
    pub content: &'static ThemeContent,
    pub files: &'static [FileEntry],
}

/// Look up the strings and file tree of a theme in one call.
pub fn resolve(key: ThemeKey) -> Resolved {
    Resolved {
        key,
        content: content(key),
        files: files(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_completely() {
        for key in ThemeKey::ALL {
            let r = resolve(key);
            assert_eq!(r.key, key);
            assert!(
                r.content.fields().iter().all(|f| !f.is_empty()),
                "{key} has an empty string field"
            );
            assert!(!r.files.is_empty(), "{key} has no file entries");
        }
    }

    #[test]
    fn resolve_matches_individual_lookups() {
        let r = resolve(ThemeKey::Asm);
        assert!(std::ptr::eq(r.content, content(ThemeKey::Asm)));
        assert!(std::ptr::eq(r.files, files(ThemeKey::Asm)));
    }

    #[test]
    fn themes_are_distinct() {
        for a in ThemeKey::ALL {
            for b in ThemeKey::ALL {
                if a != b {
                    assert_ne!(content(a), content(b));
                    assert_ne!(files(a), files(b));
                }
            }
        }
    }
}
