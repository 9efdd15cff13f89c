//! Degree, university and GPA. Empty fields are skipped outright, so a
//! missing GPA leaves no blank line behind.

use crate::error::FolioError;
use crate::layout::Flow;
use crate::model::Education;
use crate::style::{TextAlign, TextStyle};
use crate::text::{self, line_height};

use super::{label, ColumnStyle};

pub fn render(flow: &mut Flow, education: &Education, style: &ColumnStyle) -> Result<(), FolioError> {
    let scale = style.scale;
    let palette = style.palette;
    let width = flow.column().width;

    let gpa = education.gpa.trim();
    let gpa_line = (!gpa.is_empty()).then(|| format!("GPA: {}", gpa));
    let rows: Vec<(Vec<String>, TextStyle)> = [
        (
            Some(education.degree.trim().to_string()),
            TextStyle::bold(scale.heading, palette.heading),
        ),
        (
            Some(education.university.trim().to_string()),
            TextStyle::normal(scale.body, palette.text),
        ),
        (gpa_line, TextStyle::normal(scale.small, palette.muted)),
    ]
    .into_iter()
    .filter_map(|(content, text_style)| {
        let lines =
            text::wrap_styled(&content?, width, text_style.font_size, text_style.weight);
        (!lines.is_empty()).then_some((lines, text_style))
    })
    .collect();

    let block: f64 = rows
        .iter()
        .map(|(lines, s)| lines.len() as f64 * line_height(s.font_size))
        .sum();

    label(flow, "EDUCATION", style, block)?;
    for (lines, text_style) in &rows {
        flow.lines(lines, text_style, TextAlign::Left, 0.0)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ColumnGeometry, Cursor, DrawInstruction};
    use crate::sections::{ColumnVariant, Palette};

    fn texts(education: &Education) -> Vec<(String, f64)> {
        let mut flow = Flow::new(
            Cursor::new(595.28, 841.89, 40.0),
            ColumnGeometry::new(40.0, 515.28),
            false,
        );
        let style = ColumnStyle::new(ColumnVariant::Full, Palette::classic(), 8);
        render(&mut flow, education, &style).unwrap();
        flow.pages()[0]
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::Text { content, y, .. } => Some((content.clone(), *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_all_fields() {
        let t = texts(&Education {
            degree: "B.Tech Computer Science".to_string(),
            university: "IIT Bombay".to_string(),
            gpa: "9.1".to_string(),
        });
        let contents: Vec<_> = t.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(
            contents,
            vec!["EDUCATION", "B.Tech Computer Science", "IIT Bombay", "GPA: 9.1"]
        );
    }

    #[test]
    fn test_missing_gpa_leaves_no_gap() {
        let with_gpa = texts(&Education {
            degree: "BSc".to_string(),
            university: "Uni".to_string(),
            gpa: "3.8".to_string(),
        });
        let without_gpa = texts(&Education {
            degree: "BSc".to_string(),
            university: "Uni".to_string(),
            gpa: String::new(),
        });
        assert_eq!(without_gpa.len(), 3);
        // Identical positions for the fields that remain.
        assert_eq!(&with_gpa[..3], &without_gpa[..]);
    }

    #[test]
    fn test_missing_degree_moves_university_up() {
        let t = texts(&Education {
            degree: String::new(),
            university: "Uni".to_string(),
            gpa: String::new(),
        });
        let full = texts(&Education {
            degree: "BSc".to_string(),
            university: "Uni".to_string(),
            gpa: String::new(),
        });
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].0, "Uni");
        // University takes the degree's slot: it sits above where it would
        // otherwise be drawn.
        assert!(t[1].1 < full[2].1);
    }

    #[test]
    fn test_empty_education_draws_label_only() {
        let t = texts(&Education::default());
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].0, "EDUCATION");
    }
}
