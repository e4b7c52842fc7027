//! Activity colors: the built-in palette and custom hex pairs.

use std::fmt;

use serde::Serialize;

/// Name given to colors declared as a `#RRGGBB#RRGGBB` pair.
pub const CUSTOM_COLOR_NAME: &str = "custom";

/// Built-in palette as `(name, background, foreground)`.
///
/// Foregrounds are picked for contrast against their background.
const PALETTE: [(&str, &str, &str); 9] = [
    ("green", "#2ecc71", "#fefefe"),
    ("turquoise", "#1abc9c", "#fefefe"),
    ("navy", "#34495e", "#fefefe"),
    ("blue", "#3498db", "#fefefe"),
    ("purple", "#9b59b6", "#fefefe"),
    ("grey", "#bdc3c7", "#202020"),
    ("red", "#e74c3c", "#fefefe"),
    ("orange", "#f39c12", "#fefefe"),
    ("yellow", "#f1c40f", "#303030"),
];

/// A background/foreground pair used to paint an activity's slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Color {
    name: String,
    background: String,
    foreground: String,
}

impl Color {
    /// Resolves a color token from an activity line.
    ///
    /// Tokens containing `#` must be exactly `#RRGGBB#RRGGBB`; anything else is
    /// looked up case-insensitively in the built-in palette.
    pub fn resolve(token: &str) -> Result<Self, UnknownColor> {
        if token.contains('#') {
            return Self::from_hex_pair(token).ok_or_else(|| UnknownColor(token.to_string()));
        }
        Self::builtin(token).ok_or_else(|| UnknownColor(token.to_string()))
    }

    /// Looks up a built-in color by name, ignoring case.
    pub fn builtin(name: &str) -> Option<Self> {
        PALETTE
            .iter()
            .find(|(candidate, _, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(name, background, foreground)| Self {
                name: (*name).to_string(),
                background: (*background).to_string(),
                foreground: (*foreground).to_string(),
            })
    }

    fn from_hex_pair(token: &str) -> Option<Self> {
        let mut parts = token.split('#');
        let (Some(""), Some(background), Some(foreground), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        if !is_hex6(background) || !is_hex6(foreground) {
            return None;
        }
        Some(Self {
            name: CUSTOM_COLOR_NAME.to_string(),
            background: format!("#{background}"),
            foreground: format!("#{foreground}"),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// CSS background value, e.g. `#2ecc71`.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// CSS text color value, e.g. `#fefefe`.
    pub fn foreground(&self) -> &str {
        &self.foreground
    }
}

fn is_hex6(value: &str) -> bool {
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Error type for color tokens that are neither built-in nor a hex pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: {}", self.0)
    }
}

impl std::error::Error for UnknownColor {}
