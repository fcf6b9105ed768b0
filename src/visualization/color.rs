//! RGB colors for glyph fills
//!
//! Endpoints are written the way a web host would write them (`#4682b4`,
//! `#fff`, `rgb(70, 130, 180)`, `steelblue`); fills are emitted in the
//! `rgb(r, g, b)` form.

use crate::error::SliceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("steelblue", Rgb::new(70, 130, 180)),
    ("navy", Rgb::new(0, 0, 128)),
    ("crimson", Rgb::new(220, 20, 60)),
];

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise interpolation, `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            if v.is_nan() {
                a
            } else {
                v.round().clamp(0.0, 255.0) as u8
            }
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = SliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let invalid = || SliceError::InvalidColor(s.to_string());

        if let Some(hex) = text.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
            return match hex.len() {
                3 => {
                    let r = channel(&hex[0..1])?;
                    let g = channel(&hex[1..2])?;
                    let b = channel(&hex[2..3])?;
                    Ok(Rgb::new(r * 17, g * 17, b * 17))
                }
                6 => Ok(Rgb::new(
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                )),
                _ => Err(invalid()),
            };
        }

        if let Some(body) = text.strip_prefix("rgb(").and_then(|t| t.strip_suffix(')')) {
            let channels: Vec<u8> = body
                .split(',')
                .map(|part| part.trim().parse::<u8>())
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?;
            return match channels[..] {
                [r, g, b] => Ok(Rgb::new(r, g, b)),
                _ => Err(invalid()),
            };
        }

        NAMED
            .iter()
            .find(|(name, _)| *name == text)
            .map(|(_, color)| *color)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Rgb {
    type Error = SliceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}
