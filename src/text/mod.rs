//! # Text Flow
//!
//! Greedy line breaking and line-height arithmetic.
//!
//! Break opportunities come from UAX#14, widths from the standard Helvetica
//! metrics, so wrapping is deterministic and locale-independent: the same
//! `(text, width, size, weight)` always yields the same lines.

use crate::font;
use crate::style::FontWeight;
use unicode_linebreak::{linebreaks, BreakOpportunity};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.4;

/// Vertical space one line of text occupies.
pub fn line_height(font_size: f64) -> f64 {
    font_size * LINE_HEIGHT_FACTOR
}

/// Width of `text` in points.
pub fn measure(text: &str, font_size: f64, weight: FontWeight) -> f64 {
    font::measure_string(text, font_size, weight)
}

/// Wrap `text` to `max_width` points using regular-weight metrics.
///
/// Empty or whitespace-only text yields no lines.
pub fn wrap(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    wrap_styled(text, max_width, font_size, FontWeight::Normal)
}

/// Wrap `text` to `max_width` points using the metrics of `weight`.
pub fn wrap_styled(text: &str, max_width: f64, font_size: f64, weight: FontWeight) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let normalized = normalize(text);
    let chars: Vec<char> = normalized.chars().collect();
    let widths: Vec<f64> = chars
        .iter()
        .map(|&ch| font::char_width(ch, font_size, weight))
        .collect();
    let break_opps = compute_break_opportunities(&normalized);

    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut line_width = 0.0;
    let mut last_break_point: Option<usize> = None;

    for (i, &ch) in chars.iter().enumerate() {
        // A break *before* char[i] means the previous line may end at char[i-1].
        if i > 0 {
            match break_opps[i] {
                Some(BreakOpportunity::Mandatory) => {
                    lines.push(make_line(&chars[line_start..i]));
                    line_start = i;
                    line_width = 0.0;
                    last_break_point = None;
                }
                Some(BreakOpportunity::Allowed) => {
                    last_break_point = Some(i - 1);
                }
                None => {}
            }
        }

        if ch == '\n' {
            continue;
        }

        // A wrapped line never starts with whitespace.
        if ch.is_whitespace() && i > 0 && i == line_start && chars[i - 1] != '\n' {
            line_start = i + 1;
            continue;
        }

        // Whitespace that overflows ends the line and is dropped.
        if ch.is_whitespace() && line_start < i && line_width + widths[i] > max_width {
            lines.push(make_line(&chars[line_start..i]));
            line_start = i + 1;
            line_width = 0.0;
            last_break_point = None;
            continue;
        }

        if line_width + widths[i] > max_width && line_start < i {
            if let Some(bp) = last_break_point.filter(|&bp| bp >= line_start) {
                lines.push(make_line(&chars[line_start..=bp]));
                line_start = bp + 1;
                line_width = widths[line_start..=i].iter().sum();
                last_break_point = None;
                continue;
            }

            // No break opportunity on this line: split the word here.
            lines.push(make_line(&chars[line_start..i]));
            line_start = i;
            line_width = widths[i];
            last_break_point = None;
            continue;
        }

        line_width += widths[i];
    }

    if line_start < chars.len() {
        lines.push(make_line(&chars[line_start..]));
    }

    // A trailing newline leaves nothing worth drawing.
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines
}

/// Fold line separators to `\n` and tabs to spaces.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|ch| match ch {
            '\r' | '\u{2028}' | '\u{2029}' => '\n',
            '\t' => ' ',
            other => other,
        })
        .collect()
}

/// Collect a line, dropping newline characters and trailing whitespace.
fn make_line(chars: &[char]) -> String {
    let line: String = chars.iter().filter(|&&c| c != '\n').collect();
    line.trim_end().to_string()
}

/// Compute UAX#14 break opportunities indexed by char position.
///
/// Entry `i` is the opportunity *before* char `i`; index 0 is always `None`.
fn compute_break_opportunities(text: &str) -> Vec<Option<BreakOpportunity>> {
    let char_count = text.chars().count();
    let mut result = vec![None; char_count];

    let byte_to_char: Vec<usize> = {
        let mut map = vec![0usize; text.len() + 1];
        for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
            map[byte_idx] = char_idx;
        }
        map[text.len()] = char_count;
        map
    };

    // linebreaks() yields the byte offset *after* each break; the break at
    // end of text is ignored.
    for (byte_offset, opp) in linebreaks(text) {
        let char_idx = byte_to_char[byte_offset];
        if char_idx < char_count {
            result[char_idx] = Some(opp);
        }
    }

    result
}
