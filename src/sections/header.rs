//! Name, title and contact details.
//!
//! Full-width columns centre everything and join the contact fields on one
//! line; the sidebar stacks them, one contact field per line.

use crate::error::FolioError;
use crate::layout::Flow;
use crate::model::ProfileDocument;
use crate::style::{TextAlign, TextStyle};

use super::{label, ColumnStyle, ColumnVariant};

/// Separator between contact fields on the centred contact line.
pub const CONTACT_SEPARATOR: &str = " | ";

pub fn render(
    flow: &mut Flow,
    profile: &ProfileDocument,
    style: &ColumnStyle,
) -> Result<(), FolioError> {
    match style.variant {
        ColumnVariant::Sidebar => render_stacked(flow, profile, style),
        ColumnVariant::Full | ColumnVariant::Body => render_centered(flow, profile, style),
    }
}

fn render_centered(
    flow: &mut Flow,
    profile: &ProfileDocument,
    style: &ColumnStyle,
) -> Result<(), FolioError> {
    let scale = style.scale;
    let palette = style.palette;

    flow.paragraph(
        profile.name.trim(),
        &TextStyle::bold(scale.name, palette.heading),
        TextAlign::Center,
        0.0,
    )?;
    flow.paragraph(
        profile.title.trim(),
        &TextStyle::normal(scale.title, palette.muted),
        TextAlign::Center,
        0.0,
    )?;

    let contact = profile.contact_fields().join(CONTACT_SEPARATOR);
    flow.paragraph(
        &contact,
        &TextStyle::normal(scale.contact, palette.text),
        TextAlign::Center,
        0.0,
    )?;

    flow.gap(4.0);
    flow.rule(palette.accent, 1.5)
}

fn render_stacked(
    flow: &mut Flow,
    profile: &ProfileDocument,
    style: &ColumnStyle,
) -> Result<(), FolioError> {
    let scale = style.scale;
    let palette = style.palette;

    flow.paragraph(
        profile.name.trim(),
        &TextStyle::bold(scale.name, palette.heading),
        TextAlign::Left,
        0.0,
    )?;
    flow.gap(2.0);
    flow.paragraph(
        profile.title.trim(),
        &TextStyle::normal(scale.title, palette.accent),
        TextAlign::Left,
        0.0,
    )?;

    let fields = profile.contact_fields();
    let text_style = TextStyle::normal(scale.contact, palette.text);
    let keep = fields
        .first()
        .map(|first| super::keep_height(first, flow.column().width, &text_style))
        .unwrap_or(0.0);
    label(flow, "CONTACT", style, keep)?;
    for field in fields {
        flow.paragraph(field, &text_style, TextAlign::Left, 0.0)?;
    }
    Ok(())
}
