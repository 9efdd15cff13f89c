//! # Folio
//!
//! A page-native résumé layout engine.
//!
//! A profile record goes in; a paginated, styled PDF comes out. The layout
//! never slices a tall canvas into pages after the fact. Every text block is
//! placed against the page boundary as it is laid out, so a job heading
//! never ends a page and the professional sidebar is repainted on each page
//! the body runs onto.
//!
//! ## Architecture
//!
//! ```text
//! Input (ProfileDocument / JSON)
//!       ↓
//!   [template] : Pick columns, styles and section order
//!       ↓
//!   [sections] : Header, summary, experience, education, skills
//!       ↓
//!   [layout]   : Cursor, text flow, page breaks → InstructionList
//!       ↓
//!   [pdf]      : Serialize to PDF bytes
//! ```

pub mod error;
pub mod export;
pub mod font;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod sections;
pub mod style;
pub mod template;
pub mod text;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::FolioError;
pub use export::{share_summary, suggested_filename, ResumeExport};
pub use layout::{DrawInstruction, InstructionList};
pub use model::{Education, Experience, ProfileDocument, RenderOptions};
pub use template::Template;

use pdf::PdfWriter;

/// Render a profile to PDF bytes with default options.
pub fn render(profile: &ProfileDocument, template: Template) -> Result<Vec<u8>, FolioError> {
    render_with_options(profile, template, &RenderOptions::default())
}

pub fn render_with_options(
    profile: &ProfileDocument,
    template: Template,
    options: &RenderOptions,
) -> Result<Vec<u8>, FolioError> {
    let instructions = template::layout(profile, template, options)?;
    let (width, height) = options.page_size.dimensions();
    PdfWriter::new()
        .with_compression(options.compress)
        .write(&instructions, width, height, &profile.metadata())
}

/// Render with a template named by string. Unknown names fail before any
/// layout work is done.
pub fn render_named(profile: &ProfileDocument, template: &str) -> Result<Vec<u8>, FolioError> {
    render(profile, template.parse()?)
}

/// Render a profile described as JSON to PDF bytes.
pub fn render_json(json: &str, template: &str) -> Result<Vec<u8>, FolioError> {
    let template: Template = template.parse()?;
    let profile: ProfileDocument = serde_json::from_str(json)?;
    render(&profile, template)
}

/// Lay out without serializing. Useful for inspecting where things land.
pub fn layout_named(
    profile: &ProfileDocument,
    template: &str,
    options: &RenderOptions,
) -> Result<InstructionList, FolioError> {
    template::layout(profile, template.parse()?, options)
}

/// Render and pair the bytes with the suggested download filename.
pub fn export(
    profile: &ProfileDocument,
    template: Template,
    options: &RenderOptions,
) -> Result<ResumeExport, FolioError> {
    let bytes = render_with_options(profile, template, options)?;
    let filename = suggested_filename(&profile.name);
    log::info!("rendered {} ({} bytes)", filename, bytes.len());
    Ok(ResumeExport { bytes, filename })
}
