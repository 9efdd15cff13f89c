//! # Section Renderers
//!
//! One renderer per résumé section. Each takes the column [`Flow`] it
//! writes into, the slice of the profile it draws, and the column's
//! [`ColumnStyle`]; it emits instructions and advances the cursor, taking
//! page breaks where a block would not fit.
//!
//! Renderers never rely on style left behind by an earlier section: every
//! text run is drawn with a [`TextStyle`] built from the column style.

pub mod achievements;
pub mod education;
pub mod experience;
pub mod header;
pub mod skills;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::layout::{Flow, MIN_ORPHAN_LINES, MIN_WIDOW_LINES};
use crate::model::ProfileDocument;
use crate::style::{Color, TextAlign, TextStyle};
use crate::text::{self, line_height};

/// Vertical space before a section label.
pub const SECTION_GAP: f64 = 14.0;
/// Space taken by a section label's underline.
const LABEL_RULE_SPACE: f64 = 8.0;
/// Indent of bulleted text past its bullet.
pub const BULLET_INDENT: f64 = 10.0;

/// The sections a template can place in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Achievements,
}

/// How a column presents its sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnVariant {
    /// Single full-width column (classic).
    Full,
    /// Narrow filled sidebar (professional, left).
    Sidebar,
    /// Wide body next to a sidebar (professional, right).
    Body,
}

/// Font sizes used by a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub name: f64,
    pub title: f64,
    pub contact: f64,
    pub label: f64,
    pub heading: f64,
    pub body: f64,
    pub small: f64,
}

impl ColumnVariant {
    pub fn scale(&self) -> TypeScale {
        match self {
            ColumnVariant::Full | ColumnVariant::Body => TypeScale {
                name: 24.0,
                title: 13.0,
                contact: 10.0,
                label: 12.0,
                heading: 11.0,
                body: 10.0,
                small: 9.5,
            },
            ColumnVariant::Sidebar => TypeScale {
                name: 20.0,
                title: 11.0,
                contact: 9.0,
                label: 11.0,
                heading: 10.0,
                body: 9.0,
                small: 9.0,
            },
        }
    }
}

/// Colours used by a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub heading: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub rule: Color,
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            heading: Color::hex("#111827"),
            text: Color::hex("#374151"),
            muted: Color::hex("#6b7280"),
            accent: Color::hex("#2563eb"),
            rule: Color::hex("#d1d5db"),
        }
    }

    pub fn sidebar() -> Self {
        Self {
            heading: Color::WHITE,
            text: Color::WHITE,
            muted: Color::hex("#cbd5e1"),
            accent: Color::hex("#93c5fd"),
            rule: Color::hex("#94a3b8"),
        }
    }

    pub fn body() -> Self {
        Self {
            heading: Color::hex("#1e3a5f"),
            text: Color::hex("#374151"),
            muted: Color::hex("#6b7280"),
            accent: Color::hex("#1e3a5f"),
            rule: Color::hex("#cbd5e1"),
        }
    }
}

/// Everything a renderer needs to know about the column it draws in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStyle {
    pub variant: ColumnVariant,
    pub palette: Palette,
    pub scale: TypeScale,
    /// Skills listed before the rest are dropped (sidebar only).
    pub skills_cap: usize,
}

impl ColumnStyle {
    pub fn new(variant: ColumnVariant, palette: Palette, skills_cap: usize) -> Self {
        Self {
            variant,
            palette,
            scale: variant.scale(),
            skills_cap,
        }
    }

    pub fn body_text(&self) -> TextStyle {
        TextStyle::normal(self.scale.body, self.palette.text)
    }
}

/// Render one section of `profile` into `flow`.
pub fn render(
    section: Section,
    flow: &mut Flow,
    profile: &ProfileDocument,
    style: &ColumnStyle,
) -> Result<(), FolioError> {
    match section {
        Section::Header => header::render(flow, profile, style),
        Section::Summary => summary::render(flow, &profile.about, style),
        Section::Experience => experience::render(flow, &profile.experience, style),
        Section::Education => education::render(flow, &profile.education, style),
        Section::Skills => skills::render(flow, &profile.skills, style),
        Section::Achievements => achievements::render(flow, &profile.achievements, style),
    }
}

/// Lines of a paragraph that must travel with whatever precedes it, so that
/// a heading never ends a page alone.
pub fn keep_lines(total: usize) -> usize {
    if total < MIN_ORPHAN_LINES + MIN_WIDOW_LINES {
        total
    } else {
        MIN_ORPHAN_LINES
    }
}

/// Draw a section label with its underline, keeping `keep_with_next`
/// points of following content on the same page.
pub fn label(
    flow: &mut Flow,
    title: &str,
    style: &ColumnStyle,
    keep_with_next: f64,
) -> Result<(), FolioError> {
    let label_style = TextStyle::bold(style.scale.label, style.palette.heading);
    flow.gap(SECTION_GAP);
    flow.ensure_room(line_height(label_style.font_size) + LABEL_RULE_SPACE + keep_with_next)?;
    flow.lines(&[title.to_string()], &label_style, TextAlign::Left, 0.0)?;
    flow.rule(style.palette.rule, 0.75)
}

/// Height of the first lines of `content` that must stay with a label.
pub fn keep_height(content: &str, width: f64, text_style: &TextStyle) -> f64 {
    let lines = text::wrap_styled(content, width, text_style.font_size, text_style.weight);
    keep_lines(lines.len()) as f64 * line_height(text_style.font_size)
}

/// A bullet glyph followed by wrapped, indented text.
pub fn bullet_item(
    flow: &mut Flow,
    content: &str,
    text_style: &TextStyle,
    bullet_color: Color,
) -> Result<(), FolioError> {
    let lines = text::wrap_styled(
        content,
        flow.column().width - BULLET_INDENT,
        text_style.font_size,
        text_style.weight,
    );
    if lines.is_empty() {
        return Ok(());
    }
    flow.ensure_room(keep_lines(lines.len()) as f64 * line_height(text_style.font_size))?;
    let bullet = TextStyle::new(text_style.font_size, text_style.weight, bullet_color);
    let x = flow.column().x;
    flow.text_at("\u{2022}", x, &bullet);
    flow.lines(&lines, text_style, TextAlign::Left, BULLET_INDENT)
}
