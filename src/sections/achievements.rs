//! Achievements as a bulleted list. Neither built-in template places this
//! section unless `include_achievements` is set.

use crate::error::FolioError;
use crate::layout::Flow;

use super::{bullet_item, keep_height, label, ColumnStyle, BULLET_INDENT};

pub fn render(
    flow: &mut Flow,
    achievements: &[String],
    style: &ColumnStyle,
) -> Result<(), FolioError> {
    let items: Vec<&str> = achievements
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    let text_style = style.body_text();

    let keep = items
        .first()
        .map(|first| keep_height(first, flow.column().width - BULLET_INDENT, &text_style))
        .unwrap_or(0.0);
    label(flow, "ACHIEVEMENTS", style, keep)?;
    for item in items {
        bullet_item(flow, item, &text_style, style.palette.accent)?;
    }
    Ok(())
}
