#![forbid(unsafe_code)]

//! RGBA colors and CSS-like color parsing.
//!
//! Accepted forms:
//!
//! | Form | Example |
//! |------|---------|
//! | Short hex | `#fff`, `#ffff` |
//! | Long hex | `#A9ADAE`, `#A9ADAE80` |
//! | Functional | `rgb(255,255,255)`, `rgba(0, 0, 0, 0.5)` |
//! | Named | `white`, `black`, `transparent`, ... |

use core::fmt;
use core::str::FromStr;

/// A color packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    /// Scale alpha by `opacity` (clamped to `[0.0, 1.0]`).
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let a = (f32::from(self.a()) * opacity).round() as u8;
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            _ => return None,
        };
        Some(color)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a())?;
        }
        Ok(())
    }
}

/// Errors from color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input was empty after trimming.
    Empty,
    /// A `#` color with a digit count other than 3, 4, 6, or 8.
    HexLength(usize),
    /// A `#` color containing a non-hex digit.
    HexDigit(String),
    /// `rgb()`/`rgba()` with the wrong number of components.
    Arity {
        function: &'static str,
        expected: usize,
        found: usize,
    },
    /// A component that is not a number in range.
    Component(String),
    /// Anything else.
    Unknown(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty color"),
            Self::HexLength(len) => write!(f, "hex color must have 3, 4, 6 or 8 digits, got {len}"),
            Self::HexDigit(s) => write!(f, "invalid hex digit in {s:?}"),
            Self::Arity {
                function,
                expected,
                found,
            } => write!(f, "{function}() takes {expected} components, got {found}"),
            Self::Component(s) => write!(f, "invalid color component {s:?}"),
            Self::Unknown(s) => write!(f, "unrecognized color {s:?}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba") {
            return parse_functional(args, "rgba", 4);
        }
        if let Some(args) = function_args(&lower, "rgb") {
            return parse_functional(args, "rgb", 3);
        }
        Self::named(&lower).ok_or_else(|| ColorParseError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Result<Rgba, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::HexDigit(hex.to_string()));
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).unwrap_or(0);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    match hex.len() {
        3 | 4 => {
            let a = if hex.len() == 4 { digit(3) * 17 } else { 255 };
            Ok(Rgba::rgba(digit(0) * 17, digit(1) * 17, digit(2) * 17, a))
        }
        6 | 8 => {
            let a = if hex.len() == 8 { pair(6) } else { 255 };
            Ok(Rgba::rgba(pair(0), pair(2), pair(4), a))
        }
        len => Err(ColorParseError::HexLength(len)),
    }
}

fn parse_functional(
    args: &str,
    function: &'static str,
    expected: usize,
) -> Result<Rgba, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(ColorParseError::Arity {
            function,
            expected,
            found: parts.len(),
        });
    }
    let channel = |s: &str| -> Result<u8, ColorParseError> {
        s.parse::<u8>()
            .map_err(|_| ColorParseError::Component(s.to_string()))
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = match parts.get(3) {
        Some(alpha) => {
            let alpha: f32 = alpha
                .parse()
                .map_err(|_| ColorParseError::Component((*alpha).to_string()))?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ColorParseError::Component(alpha.to_string()));
            }
            (alpha * 255.0).round() as u8
        }
        None => 255,
    };
    Ok(Rgba::rgba(r, g, b, a))
}
