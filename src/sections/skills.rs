//! Skills: one wrapped line in wide columns, a capped bullet list in the
//! sidebar. Skills past the cap are dropped to keep the sidebar's height
//! bounded.

use crate::error::FolioError;
use crate::layout::Flow;
use crate::style::TextAlign;

use super::{bullet_item, keep_height, label, ColumnStyle, ColumnVariant, BULLET_INDENT};

/// Glyph between skills on the joined line.
pub const SKILL_SEPARATOR: &str = " \u{2022} ";

pub fn render(flow: &mut Flow, skills: &[String], style: &ColumnStyle) -> Result<(), FolioError> {
    let skills: Vec<&str> = skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    let text_style = style.body_text();

    match style.variant {
        ColumnVariant::Sidebar => {
            let shown = &skills[..skills.len().min(style.skills_cap)];
            if skills.len() > shown.len() {
                log::debug!(
                    "sidebar shows {} of {} skills",
                    shown.len(),
                    skills.len()
                );
            }
            let keep = shown
                .first()
                .map(|s| keep_height(s, flow.column().width - BULLET_INDENT, &text_style))
                .unwrap_or(0.0);
            label(flow, "SKILLS", style, keep)?;
            for skill in shown {
                bullet_item(flow, skill, &text_style, style.palette.accent)?;
            }
            Ok(())
        }
        ColumnVariant::Full | ColumnVariant::Body => {
            let joined = skills.join(SKILL_SEPARATOR);
            let keep = keep_height(&joined, flow.column().width, &text_style);
            label(flow, "SKILLS", style, keep)?;
            flow.paragraph(&joined, &text_style, TextAlign::Left, 0.0)?;
            Ok(())
        }
    }
}
