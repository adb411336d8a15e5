//! Packed ARGB color primitives for runtime theme editing.
//!
//! [`Color`] is a 32-bit `0xAARRGGBB` value with cheap equality, suitable
//! as the storage type for palette tables and override maps. The all-zero
//! value is reserved as the [`Color::UNSET`] sentinel ("no color here"),
//! so fully transparent black can never be a legitimate override.
//!
//! Colors parse from CSS color names and hex codes:
//!
//! ```rust
//! use retheme_color::Color;
//!
//! let orchid: Color = "darkorchid".parse().unwrap();
//! assert_eq!(orchid, Color::from_rgb(0x99, 0x32, 0xcc));
//!
//! let short: Color = "#f80".parse().unwrap();
//! assert_eq!(short, Color::from_rgb(0xff, 0x88, 0x00));
//!
//! let with_alpha: Color = "#80ff6b35".parse().unwrap();
//! assert_eq!(with_alpha.alpha(), 0x80);
//! assert_eq!(orchid.to_string(), "#FF9932CC");
//! ```
//!
//! Serde support serializes colors as their `#AARRGGBB` string form so
//! hosts can embed them directly in configuration files.

use std::fmt;
use std::str::FromStr;

mod named;

pub use named::lookup_named;

/// Error type for color parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex code with a digit count other than 3, 6, or 8.
    #[error("invalid hex color: #{0} (must be 3, 6, or 8 digits)")]
    InvalidHexLength(String),

    /// Hex code containing non-hexadecimal characters.
    #[error("invalid hex color: #{0}")]
    InvalidHexDigit(String),

    /// Name not present in the named-color table.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// A packed 32-bit ARGB color value.
///
/// The zero value doubles as the [`UNSET`](Color::UNSET) sentinel: palette
/// slots and override maps use it to mean "no color stored". Fully
/// transparent black therefore cannot be a legitimate override; test for
/// the sentinel with [`is_unset`](Color::is_unset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    /// The reserved "no color" sentinel (all channels zero).
    pub const UNSET: Color = Color(0);

    /// Creates a color from alpha, red, green, and blue channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Creates a fully opaque color from red, green, and blue channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xff, r, g, b)
    }

    /// Creates a color from its packed `0xAARRGGBB` representation.
    pub const fn from_u32(packed: u32) -> Self {
        Color(packed)
    }

    /// Returns the packed `0xAARRGGBB` representation.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Returns true if this is the reserved unset sentinel.
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Alpha channel (0 = transparent, 255 = opaque).
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns this color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Color((self.0 & 0x00ff_ffff) | ((a as u32) << 24))
    }

    /// Parses a hex color code (without the `#` prefix).
    ///
    /// Accepts 3-digit (`f80`), 6-digit (`ff8800`), and 8-digit
    /// (`80ff8800`, alpha first) forms.
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        // Reject non-hex bytes before slicing: the offsets below are byte
        // offsets, and multi-byte input must not land on a panic.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexDigit(hex.to_string()));
        }

        let digit = |range: &str| {
            u8::from_str_radix(range, 16)
                .map_err(|_| ColorParseError::InvalidHexDigit(hex.to_string()))
        };

        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let r = digit(&hex[0..1])? * 17;
                let g = digit(&hex[1..2])? * 17;
                let b = digit(&hex[2..3])? * 17;
                Ok(Color::from_rgb(r, g, b))
            }
            // 6-digit hex: #rrggbb
            6 => {
                let r = digit(&hex[0..2])?;
                let g = digit(&hex[2..4])?;
                let b = digit(&hex[4..6])?;
                Ok(Color::from_rgb(r, g, b))
            }
            // 8-digit hex: #aarrggbb
            8 => {
                let a = digit(&hex[0..2])?;
                let r = digit(&hex[2..4])?;
                let g = digit(&hex[4..6])?;
                let b = digit(&hex[6..8])?;
                Ok(Color::from_argb(a, r, g, b))
            }
            _ => Err(ColorParseError::InvalidHexLength(hex.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        lookup_named(s).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
