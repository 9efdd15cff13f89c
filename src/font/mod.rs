//! # Font Management
//!
//! The engine draws with the standard PDF Helvetica faces, which need no
//! embedding. Each [`FontWeight`] maps to exactly one face, and all text
//! measurement goes through that face's AFM widths.

pub mod metrics;

pub use metrics::StandardFontMetrics;

use crate::style::FontWeight;

/// The standard PDF fonts the engine can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl StandardFont {
    /// Resolve the face used for a weight.
    pub fn for_weight(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Normal => Self::Helvetica,
            FontWeight::Bold => Self::HelveticaBold,
            FontWeight::Italic => Self::HelveticaOblique,
        }
    }

    /// The PDF name for this font.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    pub fn metrics(&self) -> StandardFontMetrics {
        match self {
            Self::HelveticaBold => StandardFontMetrics::HELVETICA_BOLD,
            Self::Helvetica | Self::HelveticaOblique => StandardFontMetrics::HELVETICA,
        }
    }
}

/// Measure the width of a string in points.
pub fn measure_string(text: &str, font_size: f64, weight: FontWeight) -> f64 {
    StandardFont::for_weight(weight)
        .metrics()
        .measure_string(text, font_size)
}

/// Width of a single character in points.
pub fn char_width(ch: char, font_size: f64, weight: FontWeight) -> f64 {
    StandardFont::for_weight(weight)
        .metrics()
        .char_width(ch, font_size)
}
