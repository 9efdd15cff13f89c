//! # Style Primitives
//!
//! Colour, font weight, and text style values. Every drawing instruction
//! carries its own style explicitly; nothing here is ambient state that a
//! later section could inherit by accident.

use serde::{Deserialize, Serialize};

/// An RGB color with components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build a color from 8-bit channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    pub fn hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        let (r, g, b) = match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).unwrap_or(0);
                (r, g, b)
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                (r, g, b)
            }
            _ => (0, 0, 0),
        };
        Self::rgb8(r, g, b)
    }

    /// True when every component is finite and inside 0.0 - 1.0.
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Font weight/slant. Each maps to one standard Helvetica face.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Everything needed to draw a run of text, passed explicitly per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(font_size: f64, weight: FontWeight, color: Color) -> Self {
        Self {
            font_size,
            weight,
            color,
        }
    }

    pub const fn normal(font_size: f64, color: Color) -> Self {
        Self::new(font_size, FontWeight::Normal, color)
    }

    pub const fn bold(font_size: f64, color: Color) -> Self {
        Self::new(font_size, FontWeight::Bold, color)
    }

    pub const fn italic(font_size: f64, color: Color) -> Self {
        Self::new(font_size, FontWeight::Italic, color)
    }
}
