//! # PDF Serializer
//!
//! Takes an instruction list and writes a valid PDF file.
//!
//! This is a from-scratch PDF 1.7 writer. The subset a résumé needs is
//! small: the three standard Helvetica faces, filled rectangles, stroked
//! lines and positioned text. Instruction order is paint order, so later
//! instructions draw over earlier ones.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (fonts, pages, content streams, etc.)
//! 2 0 obj ... endobj
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! Output is byte-deterministic: no timestamps or IDs are written, and
//! fonts are registered in a fixed order.

use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::error::FolioError;
use crate::font::StandardFont;
use crate::layout::{DrawInstruction, InstructionList};
use crate::model::Metadata;
use crate::style::Color;

pub struct PdfWriter {
    compress: bool,
}

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
    /// Fonts in resource order: /F0, /F1, ...
    font_objects: Vec<(StandardFont, usize)>,
}

struct PdfObject {
    data: Vec<u8>,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self { compress: true }
    }

    /// Toggle deflate compression of page content streams.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Write an instruction list to a PDF byte vector.
    ///
    /// Every instruction is validated before any byte is produced; the
    /// first invalid one aborts the write.
    pub fn write(
        &self,
        instructions: &InstructionList,
        page_width: f64,
        page_height: f64,
        metadata: &Metadata,
    ) -> Result<Vec<u8>, FolioError> {
        if !(page_width.is_finite() && page_height.is_finite() && page_width > 0.0 && page_height > 0.0)
        {
            return Err(FolioError::SerializationFailure {
                index: 0,
                reason: format!("invalid page size {}x{}", page_width, page_height),
            });
        }
        for (index, instruction) in instructions.iter().enumerate() {
            validate(instruction).map_err(|reason| FolioError::SerializationFailure { index, reason })?;
        }

        let mut builder = PdfBuilder {
            objects: Vec::new(),
            font_objects: Vec::new(),
        };

        // Reserve object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3+ = fonts, then content streams and page objects
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });

        self.register_fonts(&mut builder, instructions);
        let font_resources = self.build_font_resource_dict(&builder.font_objects);

        let mut page_obj_ids: Vec<usize> = Vec::new();

        for page in instructions.pages() {
            let content = self.build_content_stream(page, page_height, &builder.font_objects);

            let content_obj_id = builder.objects.len();
            let mut content_data: Vec<u8> = Vec::new();
            if self.compress {
                let compressed = compress_to_vec_zlib(content.as_bytes(), 6);
                let _ = write!(
                    content_data,
                    "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                    compressed.len()
                );
                content_data.extend_from_slice(&compressed);
            } else {
                let _ = write!(content_data, "<< /Length {} >>\nstream\n", content.len());
                content_data.extend_from_slice(content.as_bytes());
            }
            content_data.extend_from_slice(b"\nendstream");
            builder.objects.push(PdfObject { data: content_data });

            let page_obj_id = builder.objects.len();
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << {} >> >> >>",
                page_width, page_height, content_obj_id, font_resources
            );
            builder.objects.push(PdfObject {
                data: page_dict.into_bytes(),
            });
            page_obj_ids.push(page_obj_id);
        }

        // Write Catalog (object 1)
        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        // Write Pages tree (object 2)
        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        let info_obj_id = {
            let id = builder.objects.len();
            let mut info = String::from("<< ");
            if let Some(ref title) = metadata.title {
                let _ = write!(info, "/Title ({}) ", encode_pdf_text(title));
            }
            if let Some(ref author) = metadata.author {
                let _ = write!(info, "/Author ({}) ", encode_pdf_text(author));
            }
            if let Some(ref subject) = metadata.subject {
                let _ = write!(info, "/Subject ({}) ", encode_pdf_text(subject));
            }
            let _ = write!(
                info,
                "/Producer (Folio {}) /Creator (Folio) >>",
                env!("CARGO_PKG_VERSION")
            );
            builder.objects.push(PdfObject {
                data: info.into_bytes(),
            });
            id
        };

        log::debug!(
            "serialized {} page(s), {} object(s)",
            page_obj_ids.len(),
            builder.objects.len() - 1
        );

        Ok(self.serialize(&builder, info_obj_id))
    }

    /// Build the PDF content stream for a single page.
    fn build_content_stream(
        &self,
        page: &[DrawInstruction],
        page_height: f64,
        font_objects: &[(StandardFont, usize)],
    ) -> String {
        let mut stream = String::new();
        for instruction in page {
            self.write_instruction(&mut stream, instruction, page_height, font_objects);
        }
        stream
    }

    /// Write a single instruction as PDF operators. Each operator group sets
    /// its own colour, so nothing depends on state left by a previous one.
    fn write_instruction(
        &self,
        stream: &mut String,
        instruction: &DrawInstruction,
        page_height: f64,
        font_objects: &[(StandardFont, usize)],
    ) {
        match instruction {
            DrawInstruction::PageBreak => {}

            DrawInstruction::FilledRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let pdf_y = page_height - y - height;
                let _ = write!(
                    stream,
                    "q\n{} rg\n{:.2} {:.2} {:.2} {:.2} re\nf\nQ\n",
                    color_operands(color),
                    x,
                    pdf_y,
                    width,
                    height
                );
            }

            DrawInstruction::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                let _ = write!(
                    stream,
                    "q\n{} RG\n{:.2} w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
                    color_operands(color),
                    width,
                    x1,
                    page_height - y1,
                    x2,
                    page_height - y2
                );
            }

            DrawInstruction::Text {
                content,
                x,
                y,
                font_size,
                weight,
                color,
            } => {
                if content.is_empty() {
                    return;
                }
                let font = StandardFont::for_weight(*weight);
                let font_name = format!("F{}", font_index(font, font_objects));
                let _ = write!(
                    stream,
                    "BT\n{} rg\n/{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
                    color_operands(color),
                    font_name,
                    font_size,
                    x,
                    page_height - y,
                    encode_pdf_text(content)
                );
            }
        }
    }

    /// Register each face the instructions draw with, in a fixed order.
    fn register_fonts(&self, builder: &mut PdfBuilder, instructions: &InstructionList) {
        let mut fonts: Vec<StandardFont> = instructions
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::Text { content, weight, .. } if !content.is_empty() => {
                    Some(StandardFont::for_weight(*weight))
                }
                _ => None,
            })
            .collect();
        fonts.sort();
        fonts.dedup();

        // Always have at least Helvetica
        if fonts.is_empty() {
            fonts.push(StandardFont::Helvetica);
        }

        for font in fonts {
            let obj_id = builder.objects.len();
            let font_dict = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                 /Encoding /WinAnsiEncoding >>",
                font.pdf_name()
            );
            builder.objects.push(PdfObject {
                data: font_dict.into_bytes(),
            });
            builder.font_objects.push((font, obj_id));
        }
    }

    fn build_font_resource_dict(&self, font_objects: &[(StandardFont, usize)]) -> String {
        font_objects
            .iter()
            .enumerate()
            .map(|(i, (_, obj_id))| format!("/F{} {} 0 R", i, obj_id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        // Header
        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            builder.objects.len(),
            info_obj_id,
            xref_offset
        );

        output
    }
}

/// Serialize `instructions` with default settings and empty metadata.
pub fn serialize(
    instructions: &InstructionList,
    page_width: f64,
    page_height: f64,
) -> Result<Vec<u8>, FolioError> {
    PdfWriter::new().write(instructions, page_width, page_height, &Metadata::default())
}

/// Look up the resource index (/F0, /F1, ...) for a face.
fn font_index(font: StandardFont, font_objects: &[(StandardFont, usize)]) -> usize {
    font_objects
        .iter()
        .position(|(f, _)| *f == font)
        .unwrap_or(0)
}

fn color_operands(color: &Color) -> String {
    format!("{:.3} {:.3} {:.3}", color.r, color.g, color.b)
}

/// Check that an instruction can be expressed in PDF.
fn validate(instruction: &DrawInstruction) -> Result<(), String> {
    let finite = |name: &str, values: &[f64]| -> Result<(), String> {
        match values.iter().find(|v| !v.is_finite()) {
            Some(v) => Err(format!("non-finite {} ({})", name, v)),
            None => Ok(()),
        }
    };
    let valid_color = |color: &Color| -> Result<(), String> {
        if color.is_valid() {
            Ok(())
        } else {
            Err(format!(
                "color components must be within 0..=1, got ({}, {}, {})",
                color.r, color.g, color.b
            ))
        }
    };

    match instruction {
        DrawInstruction::PageBreak => Ok(()),
        DrawInstruction::Text {
            x,
            y,
            font_size,
            color,
            ..
        } => {
            finite("text position", &[*x, *y])?;
            if !(font_size.is_finite() && *font_size > 0.0) {
                return Err(format!("font size must be positive, got {}", font_size));
            }
            valid_color(color)
        }
        DrawInstruction::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => {
            finite("line endpoint", &[*x1, *y1, *x2, *y2])?;
            if !(width.is_finite() && *width >= 0.0) {
                return Err(format!("line width must be non-negative, got {}", width));
            }
            valid_color(color)
        }
        DrawInstruction::FilledRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            finite("rect origin", &[*x, *y])?;
            if !(width.is_finite() && height.is_finite() && *width >= 0.0 && *height >= 0.0) {
                return Err(format!("rect size must be non-negative, got {}x{}", width, height));
            }
            valid_color(color)
        }
    }
}

/// Map a character to its WinAnsiEncoding byte.
fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => ch as u32 as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => b'?',
    }
}

/// Encode text as the body of a PDF literal string: WinAnsi bytes, with
/// delimiters escaped and non-ASCII bytes written as octal escapes so the
/// content stream stays 7-bit.
fn encode_pdf_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        let byte = win_ansi_byte(ch);
        match byte {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            0x20..=0x7E => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{:03o}", byte);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontWeight;

    fn text(content: &str, weight: FontWeight) -> DrawInstruction {
        DrawInstruction::Text {
            content: content.to_string(),
            x: 54.0,
            y: 66.0,
            font_size: 12.0,
            weight,
            color: Color::BLACK,
        }
    }

    fn write_plain(list: &InstructionList) -> String {
        let bytes = PdfWriter::new()
            .with_compression(false)
            .write(list, 595.28, 841.89, &Metadata::default())
            .unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn test_encode_pdf_text() {
        assert_eq!(encode_pdf_text("Hello (World)"), "Hello \\(World\\)");
        assert_eq!(encode_pdf_text("back\\slash"), "back\\\\slash");
        assert_eq!(encode_pdf_text("\u{2022} café"), "\\225 caf\\351");
        assert_eq!(encode_pdf_text("\u{4E2D}"), "?");
    }

    #[test]
    fn test_empty_document_produces_valid_pdf() {
        let bytes = serialize(&InstructionList::new(), 595.28, 841.89).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_page_breaks_open_pages() {
        let list = InstructionList::from(vec![
            text("one", FontWeight::Normal),
            DrawInstruction::PageBreak,
            text("two", FontWeight::Normal),
            DrawInstruction::PageBreak,
            text("three", FontWeight::Normal),
        ]);
        let pdf = write_plain(&list);
        assert!(pdf.contains("/Count 3"));
        assert!(pdf.contains("(three) Tj"));
    }

    #[test]
    fn test_metadata_in_pdf() {
        let metadata = Metadata {
            title: Some("Jane Doe - Resume".to_string()),
            author: Some("Jane Doe".to_string()),
            subject: None,
        };
        let bytes = PdfWriter::new()
            .write(&InstructionList::new(), 595.28, 841.89, &metadata)
            .unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/Title (Jane Doe - Resume)"));
        assert!(text.contains("/Author (Jane Doe)"));
        assert!(!text.contains("/Subject"));
    }

    #[test]
    fn test_weights_registered_separately() {
        let list = InstructionList::from(vec![
            text("Regular", FontWeight::Normal),
            text("Bold", FontWeight::Bold),
            text("Italic", FontWeight::Italic),
        ]);
        let pdf = write_plain(&list);
        assert!(pdf.contains("/BaseFont /Helvetica "));
        assert!(pdf.contains("/BaseFont /Helvetica-Bold "));
        assert!(pdf.contains("/BaseFont /Helvetica-Oblique "));
        assert!(pdf.contains("/F0 12.0 Tf"));
        assert!(pdf.contains("/F1 12.0 Tf"));
        assert!(pdf.contains("/F2 12.0 Tf"));
    }

    #[test]
    fn test_coordinates_flip_to_pdf_space() {
        let list = InstructionList::from(vec![
            text("Hi", FontWeight::Normal),
            DrawInstruction::FilledRect {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 841.89,
                color: Color::rgb(0.5, 0.5, 0.5),
            },
        ]);
        let pdf = write_plain(&list);
        assert!(pdf.contains("54.00 775.89 Td"));
        assert!(pdf.contains("0.00 0.00 100.00 841.89 re"));
        // Paint order follows instruction order.
        let text_at = pdf.find("(Hi) Tj").unwrap();
        let rect_at = pdf.find(" re\n").unwrap();
        assert!(text_at < rect_at);
    }

    #[test]
    fn test_empty_text_is_noop() {
        let list = InstructionList::from(vec![text("", FontWeight::Bold)]);
        let pdf = write_plain(&list);
        assert!(!pdf.contains("Tj"));
        assert!(!pdf.contains("Helvetica-Bold"));
    }

    #[test]
    fn test_invalid_color_names_instruction() {
        let list = InstructionList::from(vec![
            text("ok", FontWeight::Normal),
            DrawInstruction::Line {
                x1: 0.0,
                y1: 10.0,
                x2: 100.0,
                y2: 10.0,
                color: Color::rgb(2.0, 0.0, 0.0),
                width: 1.0,
            },
        ]);
        let err = serialize(&list, 595.28, 841.89).unwrap_err();
        assert!(matches!(err, FolioError::SerializationFailure { index: 1, .. }));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let list = InstructionList::from(vec![DrawInstruction::FilledRect {
            x: f64::NAN,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            color: Color::BLACK,
        }]);
        assert!(serialize(&list, 595.28, 841.89).is_err());
    }

    #[test]
    fn test_deterministic_output() {
        let list = InstructionList::from(vec![text("same", FontWeight::Bold)]);
        let a = serialize(&list, 595.28, 841.89).unwrap();
        let b = serialize(&list, 595.28, 841.89).unwrap();
        assert_eq!(a, b);
    }
}
