//! # Templates
//!
//! A template is data: a list of columns, each with a geometry, a style and
//! an ordered list of sections, plus an optional fill repeated on every
//! page. The two built-in templates differ only in that data; both run on
//! the same cursor, text flow and section renderers.
//!
//! ```text
//! classic                      professional
//! ┌──────────────────────┐     ┌───────┬──────────────┐
//! │       header         │     │header │ summary      │
//! │ summary              │     │skills │ experience   │
//! │ experience           │     │educ.  │              │
//! │ education            │     │       │              │
//! │ skills               │     │(fill) │              │
//! └──────────────────────┘     └───────┴──────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::layout::{compose, ColumnGeometry, Cursor, DrawInstruction, Flow, InstructionList};
use crate::model::{ProfileDocument, RenderOptions};
use crate::sections::{self, ColumnStyle, ColumnVariant, Palette, Section};
use crate::style::Color;

/// Sidebar width as a fraction of the page width.
pub const SIDEBAR_RATIO: f64 = 0.32;
/// Horizontal padding inside the sidebar band.
pub const SIDEBAR_PADDING: f64 = 20.0;
/// Space between the sidebar band and the body column.
pub const GUTTER: f64 = 24.0;

/// The built-in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Classic,
    Professional,
}

impl Template {
    pub const ALL: [Template; 2] = [Template::Classic, Template::Professional];

    pub fn name(&self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Professional => "professional",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Template::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FolioError::InvalidTemplate(s.to_string()))
    }
}

/// One column of a template.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub geometry: ColumnGeometry,
    pub style: ColumnStyle,
    pub sections: Vec<Section>,
}

/// A complete layout strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSpec {
    /// Columns in the order their instructions are emitted on each page.
    pub columns: Vec<ColumnSpec>,
    /// Drawn first on every page.
    pub page_fill: Option<DrawInstruction>,
}

impl TemplateSpec {
    pub fn for_template(template: Template, options: &RenderOptions) -> Self {
        let mut spec = match template {
            Template::Classic => Self::classic(options),
            Template::Professional => Self::professional(options),
        };
        if options.include_achievements {
            if let Some(main) = spec.columns.last_mut() {
                main.sections.push(Section::Achievements);
            }
        }
        spec
    }

    /// Single column, full width between the margins.
    pub fn classic(options: &RenderOptions) -> Self {
        let (width, _) = options.page_size.dimensions();
        Self {
            columns: vec![ColumnSpec {
                geometry: ColumnGeometry::new(options.margin, width - 2.0 * options.margin),
                style: ColumnStyle::new(ColumnVariant::Full, Palette::classic(), options.skills_cap),
                sections: vec![
                    Section::Header,
                    Section::Summary,
                    Section::Experience,
                    Section::Education,
                    Section::Skills,
                ],
            }],
            page_fill: None,
        }
    }

    /// Filled sidebar on the left, body column on the right.
    pub fn professional(options: &RenderOptions) -> Self {
        let (width, height) = options.page_size.dimensions();
        let sidebar_width = width * SIDEBAR_RATIO;
        let body_x = sidebar_width + GUTTER;

        Self {
            columns: vec![
                ColumnSpec {
                    geometry: ColumnGeometry::new(
                        SIDEBAR_PADDING,
                        sidebar_width - 2.0 * SIDEBAR_PADDING,
                    ),
                    style: ColumnStyle::new(
                        ColumnVariant::Sidebar,
                        Palette::sidebar(),
                        options.skills_cap,
                    ),
                    sections: vec![Section::Header, Section::Skills, Section::Education],
                },
                ColumnSpec {
                    geometry: ColumnGeometry::new(body_x, width - body_x - options.margin),
                    style: ColumnStyle::new(ColumnVariant::Body, Palette::body(), options.skills_cap),
                    sections: vec![Section::Summary, Section::Experience],
                },
            ],
            page_fill: Some(DrawInstruction::FilledRect {
                x: 0.0,
                y: 0.0,
                width: sidebar_width,
                height,
                color: sidebar_color(),
            }),
        }
    }

    /// Run every column over `profile` and merge the result page by page.
    pub fn layout(
        &self,
        profile: &ProfileDocument,
        options: &RenderOptions,
    ) -> Result<InstructionList, FolioError> {
        let (width, height) = options.page_size.dimensions();
        let mut columns = Vec::with_capacity(self.columns.len());

        for column in &self.columns {
            let cursor = Cursor::new(width, height, options.margin);
            let mut flow = Flow::new(cursor, column.geometry, options.strict_overflow);
            for &section in &column.sections {
                sections::render(section, &mut flow, profile, &column.style)?;
            }
            columns.push(flow.into_pages());
        }

        let prelude: Vec<DrawInstruction> = self.page_fill.iter().cloned().collect();
        Ok(compose(columns, &prelude))
    }
}

/// Background of the professional sidebar band.
pub fn sidebar_color() -> Color {
    Color::hex("#1e3a5f")
}

/// Lay out `profile` with `template`.
pub fn layout(
    profile: &ProfileDocument,
    template: Template,
    options: &RenderOptions,
) -> Result<InstructionList, FolioError> {
    let list = TemplateSpec::for_template(template, options).layout(profile, options)?;
    log::debug!(
        "{} layout: {} page(s), {} instruction(s)",
        template,
        list.page_count(),
        list.len()
    );
    Ok(list)
}

pub fn render_classic(
    profile: &ProfileDocument,
    options: &RenderOptions,
) -> Result<InstructionList, FolioError> {
    layout(profile, Template::Classic, options)
}

pub fn render_professional(
    profile: &ProfileDocument,
    options: &RenderOptions,
) -> Result<InstructionList, FolioError> {
    layout(profile, Template::Professional, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_names() {
        assert_eq!("classic".parse::<Template>().unwrap(), Template::Classic);
        assert_eq!(
            " Professional ".parse::<Template>().unwrap(),
            Template::Professional
        );
    }

    #[test]
    fn test_unknown_template_fails_fast() {
        let err = "gothic".parse::<Template>().unwrap_err();
        assert!(matches!(err, FolioError::InvalidTemplate(ref name) if name == "gothic"));
    }

    #[test]
    fn test_template_round_trips_through_display() {
        for template in Template::ALL {
            assert_eq!(template.to_string().parse::<Template>().unwrap(), template);
        }
    }

    #[test]
    fn test_professional_columns_do_not_overlap() {
        let spec = TemplateSpec::professional(&RenderOptions::default());
        let left = spec.columns[0].geometry;
        let right = spec.columns[1].geometry;
        assert!(left.right() < right.x);
        assert!(right.width > left.width);
    }

    #[test]
    fn test_achievements_appended_to_main_column() {
        let options = RenderOptions {
            include_achievements: true,
            ..Default::default()
        };
        for template in Template::ALL {
            let spec = TemplateSpec::for_template(template, &options);
            assert_eq!(
                spec.columns.last().unwrap().sections.last(),
                Some(&Section::Achievements)
            );
        }
        let default = TemplateSpec::for_template(Template::Classic, &RenderOptions::default());
        assert!(!default.columns[0].sections.contains(&Section::Achievements));
    }
}
