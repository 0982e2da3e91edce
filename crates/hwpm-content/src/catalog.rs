//! Selector catalog: how each theme is advertised in the mode switcher.
//!
//! Risk labels are fixed per key and unrelated to the theme's strings.

use crate::key::ThemeKey;

/// One row of the mode switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub key: ThemeKey,
    pub label: &'static str,
    pub risk: &'static str,
    /// Drawn in the alarm color.
    pub emphasized: bool,
}

static CATALOG: [LanguageOption; 5] = [
    LanguageOption {
        key: ThemeKey::Standard,
        label: "Standard English (Legacy)",
        risk: "Low",
        emphasized: false,
    },
    LanguageOption {
        key: ThemeKey::Corporate,
        label: "Enterprise Speak (MBA-Ready)",
        risk: "High",
        emphasized: false,
    },
    LanguageOption {
        key: ThemeKey::Cpp,
        label: "C++ Syntax (Raw Pointers)",
        risk: "Memory Leak",
        emphasized: false,
    },
    LanguageOption {
        key: ThemeKey::Asm,
        label: "Assembly (God Mode)",
        risk: "Brain Damage",
        emphasized: true,
    },
    LanguageOption {
        key: ThemeKey::Chaos,
        label: "Corrupted Memory Dump",
        risk: "Critical",
        emphasized: false,
    },
];

/// All selector rows, in `ThemeKey::ALL` order.
pub fn catalog() -> &'static [LanguageOption; 5] {
    &CATALOG
}

/// The selector row for a key.
pub fn option(key: ThemeKey) -> &'static LanguageOption {
    match key {
        ThemeKey::Standard => &CATALOG[0],
        ThemeKey::Corporate => &CATALOG[1],
        ThemeKey::Cpp => &CATALOG[2],
        ThemeKey::Asm => &CATALOG[3],
        ThemeKey::Chaos => &CATALOG[4],
    }
}
