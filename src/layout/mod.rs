//! # Layout Primitives
//!
//! Page geometry, the vertical write cursor, and the instruction list that
//! is the document's canonical representation before serialization.
//!
//! Layout happens *into* pages: every block asks the cursor whether it fits
//! before anything is drawn, and a page break is taken first when it does
//! not. A [`Flow`] pairs one cursor with one column and buffers that
//! column's instructions page by page; templates then [`compose`] their
//! flows into a single ordered [`InstructionList`].

pub mod page_break;

use serde::Serialize;

use crate::error::FolioError;
use crate::style::{Color, FontWeight, TextAlign, TextStyle};
use crate::text::{self, line_height};
use page_break::{decide_break, lines_that_fit, BreakDecision, SplitRule};

/// Paragraph lines kept together at the bottom of a page.
pub const MIN_ORPHAN_LINES: usize = 2;
/// Paragraph lines kept together at the top of a page.
pub const MIN_WIDOW_LINES: usize = 2;

const EPSILON: f64 = 1e-6;

/// One drawing operation. Coordinates are points from the page's top-left
/// corner; a text `y` is its baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DrawInstruction {
    Text {
        content: String,
        x: f64,
        y: f64,
        #[serde(rename = "fontSize")]
        font_size: f64,
        weight: FontWeight,
        color: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
    FilledRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    PageBreak,
}

impl DrawInstruction {
    /// The top-most vertical coordinate this instruction touches.
    pub fn y(&self) -> Option<f64> {
        match self {
            DrawInstruction::Text { y, .. } => Some(*y),
            DrawInstruction::Line { y1, y2, .. } => Some(y1.max(*y2)),
            DrawInstruction::FilledRect { y, .. } => Some(*y),
            DrawInstruction::PageBreak => None,
        }
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self, DrawInstruction::PageBreak)
    }
}

/// The ordered, append-only output of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InstructionList {
    instructions: Vec<DrawInstruction>,
}

impl InstructionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instruction: DrawInstruction) {
        self.instructions.push(instruction);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawInstruction> {
        self.instructions.iter()
    }

    pub fn as_slice(&self) -> &[DrawInstruction] {
        &self.instructions
    }

    /// Number of pages the list describes. An empty list is one blank page.
    pub fn page_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_page_break()).count() + 1
    }

    /// The instructions of each page, split at `PageBreak`s.
    pub fn pages(&self) -> Vec<&[DrawInstruction]> {
        self.instructions
            .split(|i| i.is_page_break())
            .collect()
    }
}

impl<'a> IntoIterator for &'a InstructionList {
    type Item = &'a DrawInstruction;
    type IntoIter = std::slice::Iter<'a, DrawInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl From<Vec<DrawInstruction>> for InstructionList {
    fn from(instructions: Vec<DrawInstruction>) -> Self {
        Self { instructions }
    }
}

/// Horizontal extent of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
    pub x: f64,
    pub width: f64,
}

impl ColumnGeometry {
    pub fn new(x: f64, width: f64) -> Self {
        Self { x, width }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Vertical write position within one column of one render.
#[derive(Debug, Clone)]
pub struct Cursor {
    y: f64,
    page: usize,
    page_width: f64,
    page_height: f64,
    margin: f64,
}

impl Cursor {
    pub fn new(page_width: f64, page_height: f64, margin: f64) -> Self {
        Self {
            y: margin,
            page: 0,
            page_width,
            page_height,
            margin,
        }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Zero-based index of the page being written.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Lowest y any drawing may reach.
    pub fn bottom(&self) -> f64 {
        self.page_height - self.margin
    }

    /// Usable height of a whole page.
    pub fn content_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }

    /// Space left below the cursor on the current page.
    pub fn remaining(&self) -> f64 {
        self.bottom() - self.y
    }

    pub fn advance(&mut self, amount: f64) {
        self.y += amount;
    }

    pub fn will_overflow(&self, needed: f64) -> bool {
        self.y + needed > self.bottom() + EPSILON
    }

    /// True when nothing has been written to the current page yet.
    pub fn at_page_top(&self) -> bool {
        (self.y - self.margin).abs() < EPSILON
    }

    /// Start a fresh page and return its index.
    pub fn break_page(&mut self) -> usize {
        self.y = self.margin;
        self.page += 1;
        self.page
    }
}

/// One column being written: a cursor plus that column's instructions,
/// bucketed by page.
#[derive(Debug)]
pub struct Flow {
    cursor: Cursor,
    column: ColumnGeometry,
    pages: Vec<Vec<DrawInstruction>>,
    strict_overflow: bool,
}

impl Flow {
    pub fn new(cursor: Cursor, column: ColumnGeometry, strict_overflow: bool) -> Self {
        Self {
            cursor,
            column,
            pages: vec![Vec::new()],
            strict_overflow,
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn column(&self) -> ColumnGeometry {
        self.column
    }

    /// Instructions emitted so far, per page.
    pub fn pages(&self) -> &[Vec<DrawInstruction>] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Vec<DrawInstruction>> {
        self.pages
    }

    pub fn push(&mut self, instruction: DrawInstruction) {
        self.pages[self.cursor.page()].push(instruction);
    }

    /// Vertical whitespace. Swallowed at the top of a page.
    pub fn gap(&mut self, amount: f64) {
        if !self.cursor.at_page_top() {
            self.cursor.advance(amount);
        }
    }

    /// Move down by one line of `style`.
    pub fn next_line(&mut self, style: &TextStyle) {
        self.cursor.advance(line_height(style.font_size));
    }

    pub fn break_page(&mut self) -> usize {
        let page = self.cursor.break_page();
        self.pages.push(Vec::new());
        log::trace!("column at x={:.1} continued on page {}", self.column.x, page + 1);
        page
    }

    /// Make sure an unsplittable block of `needed` points fits, breaking
    /// the page first when it does not.
    pub fn ensure_room(&mut self, needed: f64) -> Result<(), FolioError> {
        if !self.cursor.will_overflow(needed) {
            return Ok(());
        }
        if !self.cursor.at_page_top() {
            self.break_page();
            if !self.cursor.will_overflow(needed) {
                return Ok(());
            }
        }
        self.overflow(needed)
    }

    fn overflow(&self, needed: f64) -> Result<(), FolioError> {
        let available = self.cursor.content_height();
        if self.strict_overflow {
            return Err(FolioError::LayoutOverflow {
                page: self.cursor.page() + 1,
                needed,
                available,
            });
        }
        log::warn!(
            "block of {:.1}pt exceeds page content height {:.1}pt on page {}; placing it anyway",
            needed,
            available,
            self.cursor.page() + 1
        );
        Ok(())
    }

    /// Baseline for text in `style` on the current line.
    pub fn baseline(&self, style: &TextStyle) -> f64 {
        self.cursor.y() + style.font_size
    }

    /// Emit text at an explicit x on the current line without advancing.
    /// Empty content emits nothing.
    pub fn text_at(&mut self, content: &str, x: f64, style: &TextStyle) {
        let y = self.baseline(style);
        self.text_on_baseline(content, x, y, style);
    }

    /// Emit text at an explicit position, e.g. to share another run's
    /// baseline. Empty content emits nothing.
    pub fn text_on_baseline(&mut self, content: &str, x: f64, y: f64, style: &TextStyle) {
        if content.is_empty() {
            return;
        }
        self.push(DrawInstruction::Text {
            content: content.to_string(),
            x,
            y,
            font_size: style.font_size,
            weight: style.weight,
            color: style.color,
        });
    }

    /// X position of a line of text under an alignment.
    pub fn align_x(&self, content: &str, style: &TextStyle, align: TextAlign, indent: f64) -> f64 {
        let width = text::measure(content, style.font_size, style.weight);
        match align {
            TextAlign::Left => self.column.x + indent,
            TextAlign::Center => self.column.x + (self.column.width - width) / 2.0,
            TextAlign::Right => self.column.right() - width,
        }
    }

    fn emit_line(&mut self, content: &str, style: &TextStyle, align: TextAlign, indent: f64) {
        let x = self.align_x(content, style, align, indent);
        self.text_at(content, x, style);
        self.cursor.advance(line_height(style.font_size));
    }

    /// Place already-wrapped lines, splitting across pages as allowed by
    /// the orphan and widow minimums.
    pub fn lines(
        &mut self,
        lines: &[String],
        style: &TextStyle,
        align: TextAlign,
        indent: f64,
    ) -> Result<(), FolioError> {
        let lh = line_height(style.font_size);
        let mut rest = lines;

        while !rest.is_empty() {
            let take = match decide_break(
                self.cursor.remaining(),
                lh,
                rest.len(),
                SplitRule::default(),
            ) {
                BreakDecision::Place => rest.len(),
                BreakDecision::Split { lines_here } => lines_here,
                BreakDecision::MoveToNextPage => {
                    if !self.cursor.at_page_top() {
                        self.break_page();
                        continue;
                    }
                    // A fresh page is as good as it gets: relax the split rule.
                    match lines_that_fit(self.cursor.remaining(), lh) {
                        0 => {
                            self.overflow(lh)?;
                            1
                        }
                        fit => fit.min(rest.len()),
                    }
                }
            };

            for line in &rest[..take] {
                self.emit_line(line, style, align, indent);
            }
            rest = &rest[take..];
            if !rest.is_empty() {
                self.break_page();
            }
        }

        Ok(())
    }

    /// Wrap `content` to the column (less `indent`) and place it.
    pub fn paragraph(
        &mut self,
        content: &str,
        style: &TextStyle,
        align: TextAlign,
        indent: f64,
    ) -> Result<usize, FolioError> {
        let wrapped = text::wrap_styled(
            content,
            self.column.width - indent,
            style.font_size,
            style.weight,
        );
        self.lines(&wrapped, style, align, indent)?;
        Ok(wrapped.len())
    }

    /// A full-width horizontal rule just below the cursor.
    pub fn rule(&mut self, color: Color, width: f64) -> Result<(), FolioError> {
        const RULE_SPACE: f64 = 8.0;
        self.ensure_room(RULE_SPACE)?;
        let y = self.cursor.y() + 2.0;
        self.push(DrawInstruction::Line {
            x1: self.column.x,
            y1: y,
            x2: self.column.right(),
            y2: y,
            color,
            width,
        });
        self.cursor.advance(RULE_SPACE);
        Ok(())
    }
}

/// Merge column flows into one instruction list, page by page.
///
/// Each output page starts with `page_prelude`, then every column's
/// instructions for that page in column order. Pages are separated by
/// `PageBreak`.
pub fn compose(
    columns: Vec<Vec<Vec<DrawInstruction>>>,
    page_prelude: &[DrawInstruction],
) -> InstructionList {
    let page_count = columns.iter().map(Vec::len).max().unwrap_or(1).max(1);
    let mut list = InstructionList::new();

    for page in 0..page_count {
        if page > 0 {
            list.push(DrawInstruction::PageBreak);
        }
        for instruction in page_prelude {
            list.push(instruction.clone());
        }
        for column in &columns {
            if let Some(instructions) = column.get(page) {
                for instruction in instructions {
                    list.push(instruction.clone());
                }
            }
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4_flow() -> Flow {
        Flow::new(
            Cursor::new(595.28, 841.89, 40.0),
            ColumnGeometry::new(40.0, 515.28),
            false,
        )
    }

    #[test]
    fn test_cursor_starts_at_margin() {
        let cursor = Cursor::new(595.28, 841.89, 40.0);
        assert_eq!(cursor.y(), 40.0);
        assert_eq!(cursor.page(), 0);
        assert!(cursor.at_page_top());
    }

    #[test]
    fn test_will_overflow_boundary() {
        let mut cursor = Cursor::new(600.0, 800.0, 50.0);
        cursor.advance(690.0);
        assert!(!cursor.will_overflow(10.0));
        assert!(cursor.will_overflow(10.5));
    }

    #[test]
    fn test_break_page_resets() {
        let mut cursor = Cursor::new(600.0, 800.0, 50.0);
        cursor.advance(300.0);
        assert_eq!(cursor.break_page(), 1);
        assert_eq!(cursor.y(), 50.0);
    }

    #[test]
    fn test_ensure_room_breaks_page() {
        let mut flow = a4_flow();
        flow.cursor.advance(740.0);
        flow.ensure_room(100.0).unwrap();
        assert_eq!(flow.cursor().page(), 1);
        assert!(flow.cursor().at_page_top());
        assert_eq!(flow.pages().len(), 2);
    }

    #[test]
    fn test_oversized_block_strict() {
        let mut flow = Flow::new(
            Cursor::new(300.0, 200.0, 20.0),
            ColumnGeometry::new(20.0, 260.0),
            true,
        );
        let err = flow.ensure_room(500.0).unwrap_err();
        assert!(matches!(err, FolioError::LayoutOverflow { page: 1, .. }));
    }

    #[test]
    fn test_oversized_block_lenient() {
        let mut flow = Flow::new(
            Cursor::new(300.0, 200.0, 20.0),
            ColumnGeometry::new(20.0, 260.0),
            false,
        );
        flow.cursor.advance(50.0);
        flow.ensure_room(500.0).unwrap();
        // One break, then placed on the fresh page instead of looping.
        assert_eq!(flow.cursor().page(), 1);
    }

    #[test]
    fn test_short_page_splits_without_overflow() {
        // Room for exactly two 10pt lines per page.
        let mut flow = Flow::new(
            Cursor::new(300.0, 40.0 + 2.0 * line_height(10.0), 20.0),
            ColumnGeometry::new(20.0, 260.0),
            true,
        );
        let style = TextStyle::normal(10.0, Color::BLACK);
        let lines: Vec<String> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();
        flow.lines(&lines, &style, TextAlign::Left, 0.0).unwrap();

        assert_eq!(flow.pages().len(), 2);
        assert_eq!(flow.pages()[0].len(), 2);
        assert_eq!(flow.pages()[1].len(), 1);
    }

    #[test]
    fn test_line_taller_than_page_strict() {
        let mut flow = Flow::new(
            Cursor::new(300.0, 50.0, 20.0),
            ColumnGeometry::new(20.0, 260.0),
            true,
        );
        let style = TextStyle::normal(10.0, Color::BLACK);
        let err = flow
            .lines(&["x".to_string()], &style, TextAlign::Left, 0.0)
            .unwrap_err();
        assert!(matches!(err, FolioError::LayoutOverflow { .. }));
    }

    #[test]
    fn test_empty_text_is_noop() {
        let mut flow = a4_flow();
        flow.text_at("", 40.0, &TextStyle::normal(10.0, Color::BLACK));
        assert!(flow.pages()[0].is_empty());
    }

    #[test]
    fn test_paragraph_splits_across_pages() {
        let mut flow = a4_flow();
        let text = "lorem ipsum dolor sit amet ".repeat(200);
        let style = TextStyle::normal(10.0, Color::BLACK);
        flow.paragraph(&text, &style, TextAlign::Left, 0.0).unwrap();

        assert!(flow.pages().len() > 1);
        let bottom = flow.cursor().bottom();
        for page in flow.pages() {
            for instr in page {
                assert!(instr.y().unwrap() <= bottom);
            }
        }
    }

    #[test]
    fn test_gap_swallowed_at_page_top() {
        let mut flow = a4_flow();
        flow.gap(12.0);
        assert!(flow.cursor().at_page_top());
    }

    #[test]
    fn test_center_alignment() {
        let flow = a4_flow();
        let style = TextStyle::normal(12.0, Color::BLACK);
        let x = flow.align_x("Hi", &style, TextAlign::Center, 0.0);
        let w = text::measure("Hi", 12.0, FontWeight::Normal);
        assert!((x - (40.0 + (515.28 - w) / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_compose_repeats_prelude() {
        let fill = DrawInstruction::FilledRect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            color: Color::BLACK,
        };
        let text = |y: f64| DrawInstruction::Text {
            content: "a".to_string(),
            x: 0.0,
            y,
            font_size: 10.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
        };
        let left = vec![vec![text(1.0)]];
        let right = vec![vec![text(2.0)], vec![text(3.0)]];
        let list = compose(vec![left, right], std::slice::from_ref(&fill));

        assert_eq!(list.page_count(), 2);
        let pages = list.pages();
        assert_eq!(pages[0], &[fill.clone(), text(1.0), text(2.0)][..]);
        assert_eq!(pages[1], &[fill, text(3.0)][..]);
    }

    #[test]
    fn test_empty_list_is_one_page() {
        let list = InstructionList::new();
        assert_eq!(list.page_count(), 1);
        assert_eq!(list.pages().len(), 1);
    }
}
