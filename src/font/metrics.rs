//! Advance widths for the standard Helvetica faces, in 1/1000 em.
//!
//! Values come from the Adobe Core 14 AFM files. Helvetica-Oblique shares
//! the upright widths, so only two tables are needed.

/// Widths for printable ASCII (0x20 - 0x7E), Helvetica.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' - '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' - '9'
    278, 278, 584, 584, 584, 556, 1015, // ':' - '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A' - 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' - 'Z'
    278, 278, 278, 469, 556, 333, // '[' - '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a' - 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n' - 'z'
    334, 260, 334, 584, // '{' - '~'
];

/// Widths for printable ASCII (0x20 - 0x7E), Helvetica-Bold.
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' - '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' - '9'
    333, 333, 584, 584, 584, 611, 975, // ':' - '@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A' - 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' - 'Z'
    333, 278, 333, 584, 556, 333, // '[' - '`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a' - 'm'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n' - 'z'
    389, 280, 389, 584, // '{' - '~'
];

/// Metrics for one standard font face.
#[derive(Debug, Clone, Copy)]
pub struct StandardFontMetrics {
    ascii: &'static [u16; 95],
    bold: bool,
}

impl StandardFontMetrics {
    pub const HELVETICA: StandardFontMetrics = StandardFontMetrics {
        ascii: &HELVETICA_ASCII,
        bold: false,
    };

    pub const HELVETICA_BOLD: StandardFontMetrics = StandardFontMetrics {
        ascii: &HELVETICA_BOLD_ASCII,
        bold: true,
    };

    /// Advance width of `ch` in 1/1000 em.
    pub fn advance(&self, ch: char) -> u16 {
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            return self.ascii[(code - 0x20) as usize];
        }
        match ch {
            '\u{00A0}' => 278,
            '\u{2022}' => 350,
            '\u{2013}' => 556,
            '\u{2014}' => 1000,
            '\u{2018}' | '\u{2019}' | '\u{201A}' => {
                if self.bold {
                    278
                } else {
                    222
                }
            }
            '\u{201C}' | '\u{201D}' | '\u{201E}' => {
                if self.bold {
                    500
                } else {
                    333
                }
            }
            '\u{2026}' => 1000,
            '\u{20AC}' => 556,
            '\u{00B7}' => 278,
            _ => self.latin1_fallback(ch),
        }
    }

    /// Accented Latin-1 letters take the width of their base letter.
    fn latin1_fallback(&self, ch: char) -> u16 {
        let base = match ch {
            'À'..='Å' => 'A',
            'Ç' => 'C',
            'È'..='Ë' => 'E',
            'Ì'..='Ï' => 'I',
            'Ñ' => 'N',
            'Ò'..='Ö' | 'Ø' => 'O',
            'Ù'..='Ü' => 'U',
            'Ý' => 'Y',
            'à'..='å' => 'a',
            'ç' => 'c',
            'è'..='ë' => 'e',
            'ì'..='ï' => 'i',
            'ñ' => 'n',
            'ò'..='ö' | 'ø' => 'o',
            'ù'..='ü' => 'u',
            'ý' | 'ÿ' => 'y',
            _ => return 556,
        };
        self.ascii[(base as u32 - 0x20) as usize]
    }

    /// Width of a single character in points.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        self.advance(ch) as f64 / 1000.0 * font_size
    }

    /// Width of a string in points.
    pub fn measure_string(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}
