//! Work history.
//!
//! An entry's heading (position with the duration right-aligned on the same
//! baseline, then the company) is atomic and travels with the first lines of
//! its description; the description itself may continue on the next page.
//! The section label is not repeated on continuation pages.

use crate::error::FolioError;
use crate::layout::Flow;
use crate::model::Experience;
use crate::style::{FontWeight, TextAlign, TextStyle};
use crate::text::{self, line_height};

use super::{keep_lines, label, ColumnStyle, ColumnVariant};

/// Space between consecutive entries.
pub const ENTRY_GAP: f64 = 10.0;
/// Minimum space between a position and its duration.
const DURATION_GAP: f64 = 12.0;
/// Share of the heading row a position always keeps.
const MIN_POSITION_SHARE: f64 = 0.4;

pub fn render(
    flow: &mut Flow,
    entries: &[Experience],
    style: &ColumnStyle,
) -> Result<(), FolioError> {
    let title = match style.variant {
        ColumnVariant::Body => "WORK EXPERIENCE",
        ColumnVariant::Full | ColumnVariant::Sidebar => "EXPERIENCE",
    };
    let width = flow.column().width;
    let keep = entries
        .first()
        .map(|entry| EntryLayout::new(entry, width, style).block_height())
        .unwrap_or(0.0);
    label(flow, title, style, keep)?;

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            flow.gap(ENTRY_GAP);
        }
        render_entry(flow, entry, style)?;
    }
    Ok(())
}

/// One entry, wrapped to the column but not yet placed.
struct EntryLayout {
    position: Vec<String>,
    duration: Vec<String>,
    /// The duration sits on the first position row rather than below it.
    duration_inline: bool,
    company: Vec<String>,
    description: Vec<String>,
    heading: TextStyle,
    dates: TextStyle,
    company_style: TextStyle,
    body: TextStyle,
}

impl EntryLayout {
    fn new(entry: &Experience, width: f64, style: &ColumnStyle) -> Self {
        let scale = style.scale;
        let palette = style.palette;
        let heading = TextStyle::bold(scale.heading, palette.heading);
        let dates = TextStyle::normal(scale.small, palette.muted);
        let company_style = TextStyle::italic(scale.body, palette.accent);
        let body = style.body_text();

        let duration = entry.duration.trim();
        let duration_width = text::measure(duration, dates.font_size, dates.weight);
        let duration_inline = duration_width <= width * (1.0 - MIN_POSITION_SHARE) - DURATION_GAP;
        let position_width = if duration.is_empty() || !duration_inline {
            width
        } else {
            width - duration_width - DURATION_GAP
        };

        Self {
            position: text::wrap_styled(
                entry.position.trim(),
                position_width,
                heading.font_size,
                FontWeight::Bold,
            ),
            duration: text::wrap_styled(duration, width, dates.font_size, dates.weight),
            duration_inline,
            company: text::wrap_styled(
                entry.company.trim(),
                width,
                company_style.font_size,
                FontWeight::Italic,
            ),
            description: text::wrap(entry.description.trim(), width, body.font_size),
            heading,
            dates,
            company_style,
            body,
        }
    }

    fn heading_height(&self) -> f64 {
        let heading = line_height(self.heading.font_size);
        if self.duration_inline {
            let rows = self.position.len().max(usize::from(!self.duration.is_empty()));
            rows as f64 * heading
        } else {
            self.position.len() as f64 * heading
                + self.duration.len() as f64 * line_height(self.dates.font_size)
        }
    }

    /// Height of the part of the entry that may not be split.
    fn block_height(&self) -> f64 {
        self.heading_height()
            + self.company.len() as f64 * line_height(self.company_style.font_size)
            + keep_lines(self.description.len()) as f64 * line_height(self.body.font_size)
    }
}

fn render_entry(flow: &mut Flow, entry: &Experience, style: &ColumnStyle) -> Result<(), FolioError> {
    let layout = EntryLayout::new(entry, flow.column().width, style);
    flow.ensure_room(layout.block_height())?;

    if layout.duration_inline {
        if !layout.position.is_empty() || !layout.duration.is_empty() {
            let baseline = flow.baseline(&layout.heading);
            if let Some(first) = layout.position.first() {
                let x = flow.align_x(first, &layout.heading, TextAlign::Left, 0.0);
                flow.text_on_baseline(first, x, baseline, &layout.heading);
            }
            if let Some(duration) = layout.duration.first() {
                let x = flow.align_x(duration, &layout.dates, TextAlign::Right, 0.0);
                flow.text_on_baseline(duration, x, baseline, &layout.dates);
            }
            flow.next_line(&layout.heading);
        }
        if layout.position.len() > 1 {
            flow.lines(&layout.position[1..], &layout.heading, TextAlign::Left, 0.0)?;
        }
    } else {
        // Too wide to share a row: right-aligned rows under the position.
        flow.lines(&layout.position, &layout.heading, TextAlign::Left, 0.0)?;
        flow.lines(&layout.duration, &layout.dates, TextAlign::Right, 0.0)?;
    }

    flow.lines(&layout.company, &layout.company_style, TextAlign::Left, 0.0)?;
    flow.lines(&layout.description, &layout.body, TextAlign::Left, 0.0)
}
