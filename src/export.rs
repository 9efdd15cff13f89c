//! What the download and share collaborators receive: the PDF bytes with a
//! suggested filename, and a plain-text summary for clipboard fallback.

use crate::model::ProfileDocument;

/// A rendered résumé ready to hand off.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeExport {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// `Jane  Doe` becomes `Jane_Doe_Resume.pdf`. Path separators are replaced
/// too, so the result is always a bare filename.
pub fn suggested_filename(name: &str) -> String {
    let stem = name
        .split(|c: char| c.is_whitespace() || c == '/' || c == '\\')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{}_Resume.pdf", stem)
    }
}

/// One field per line: name, title, email, location. Blank fields are left
/// out.
pub fn share_summary(profile: &ProfileDocument) -> String {
    [
        ("", profile.name.trim()),
        ("", profile.title.trim()),
        ("Email: ", profile.email.trim()),
        ("Location: ", profile.location.trim()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(prefix, value)| format!("{}{}", prefix, value))
    .collect::<Vec<_>>()
    .join("\n")
}
