//! Theme keys -- the closed set of content variants.

use std::fmt;
use std::str::FromStr;

use hwpm_types::error::HwpmError;

/// Identifies which content variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKey {
    #[default]
    Standard,
    Corporate,
    Cpp,
    Asm,
    Chaos,
}

impl ThemeKey {
    /// All keys, in selector order.
    pub const ALL: [ThemeKey; 5] = [
        ThemeKey::Standard,
        ThemeKey::Corporate,
        ThemeKey::Cpp,
        ThemeKey::Asm,
        ThemeKey::Chaos,
    ];

    /// Canonical upper-case identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Corporate => "CORPORATE",
            Self::Cpp => "CPP",
            Self::Asm => "ASM",
            Self::Chaos => "CHAOS",
        }
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeKey {
    type Err = HwpmError;

    /// Case-insensitive match on the identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| HwpmError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard() {
        assert_eq!(ThemeKey::default(), ThemeKey::Standard);
        assert_eq!(ThemeKey::ALL[0], ThemeKey::default());
    }

    #[test]
    fn display_uses_identifier() {
        assert_eq!(ThemeKey::Corporate.to_string(), "CORPORATE");
        assert_eq!(format!("{}", ThemeKey::Cpp), "CPP");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("asm".parse::<ThemeKey>().unwrap(), ThemeKey::Asm);
        assert_eq!("Chaos".parse::<ThemeKey>().unwrap(), ThemeKey::Chaos);
        assert_eq!(" CPP ".parse::<ThemeKey>().unwrap(), ThemeKey::Cpp);
    }

    #[test]
    fn parse_every_identifier() {
        for key in ThemeKey::ALL {
            assert_eq!(key.as_str().parse::<ThemeKey>().unwrap(), key);
        }
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "COBOL".parse::<ThemeKey>().unwrap_err();
        assert!(matches!(err, HwpmError::UnknownTheme(ref s) if s == "COBOL"));
    }

    #[test]
    fn all_keys_unique() {
        let mut names: Vec<_> = ThemeKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ThemeKey::ALL.len());
    }
}
