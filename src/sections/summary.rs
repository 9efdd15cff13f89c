//! The free-text summary.

use crate::error::FolioError;
use crate::layout::Flow;
use crate::style::TextAlign;

use super::{keep_height, label, ColumnStyle, ColumnVariant};

pub fn render(flow: &mut Flow, about: &str, style: &ColumnStyle) -> Result<(), FolioError> {
    let title = match style.variant {
        ColumnVariant::Full => "PROFESSIONAL SUMMARY",
        ColumnVariant::Body => "PROFILE",
        ColumnVariant::Sidebar => "ABOUT",
    };
    let text_style = style.body_text();
    let about = about.trim();

    let keep = keep_height(about, flow.column().width, &text_style);
    label(flow, title, style, keep)?;
    flow.paragraph(about, &text_style, TextAlign::Left, 0.0)?;
    Ok(())
}
