//! # Profile Model
//!
//! The input representation for the layout engine: one alumni profile as the
//! profile store hands it over, plus the options that shape a render.
//!
//! Every field defaults to empty so that partially filled profiles
//! deserialize cleanly. The engine treats all text as plain text and never
//! fails on an empty field; it simply draws nothing for it.

use serde::{Deserialize, Serialize};

/// A complete profile ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDocument {
    pub name: String,
    pub title: String,
    pub graduation_year: String,

    pub email: String,
    pub phone: String,
    pub location: String,

    /// Free-text summary.
    pub about: String,

    pub current_position: String,
    pub company: String,

    pub skills: Vec<String>,
    pub education: Education,
    pub experience: Vec<Experience>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl ProfileDocument {
    /// Non-empty contact fields in display order: email, phone, location.
    pub fn contact_fields(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Document metadata embedded in the PDF.
    pub fn metadata(&self) -> Metadata {
        let name = self.name.trim();
        if name.is_empty() {
            return Metadata {
                title: Some("Resume".to_string()),
                ..Default::default()
            };
        }
        Metadata {
            title: Some(format!("{} - Resume", name)),
            author: Some(name.to_string()),
            subject: non_empty(&self.title),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Document metadata embedded in the PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
}

/// Standard page sizes in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    /// Returns (width, height) in points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Knobs for one render. Every field has a default, so an empty JSON
/// object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub page_size: PageSize,
    /// Outer margin in points.
    pub margin: f64,
    /// Skills shown in the professional sidebar; the rest are dropped.
    pub skills_cap: usize,
    /// Append the achievements section to the main column.
    pub include_achievements: bool,
    /// Deflate page content streams.
    pub compress: bool,
    /// Fail with `LayoutOverflow` instead of placing an oversized block.
    pub strict_overflow: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: 40.0,
            skills_cap: 8,
            include_achievements: false,
            compress: true,
            strict_overflow: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_deserializes() {
        let json = r#"{ "name": "Jane Doe", "graduationYear": "2019", "education": { "degree": "BSc" } }"#;
        let profile: ProfileDocument = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.graduation_year, "2019");
        assert_eq!(profile.education.degree, "BSc");
        assert!(profile.education.gpa.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.achievements.is_empty());
    }

    #[test]
    fn test_contact_fields_skip_empty() {
        let profile = ProfileDocument {
            email: "jane@example.com".to_string(),
            phone: "  ".to_string(),
            location: "Pune".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.contact_fields(), vec!["jane@example.com", "Pune"]);
    }

    #[test]
    fn test_metadata_from_profile() {
        let profile = ProfileDocument {
            name: "Jane Doe".to_string(),
            title: "Engineer".to_string(),
            ..Default::default()
        };
        let meta = profile.metadata();
        assert_eq!(meta.title.as_deref(), Some("Jane Doe - Resume"));
        assert_eq!(meta.author.as_deref(), Some("Jane Doe"));
        assert_eq!(meta.subject.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_options_defaults_from_empty_object() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_options_custom_page() {
        let json = r#"{ "pageSize": { "Custom": { "width": 500, "height": 700 } }, "skillsCap": 5 }"#;
        let options: RenderOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.page_size.dimensions(), (500.0, 700.0));
        assert_eq!(options.skills_cap, 5);
        assert_eq!(options.margin, 40.0);
    }
}
