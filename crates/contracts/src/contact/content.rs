//! Static content of the contact section
//!
//! All types use 'static lifetimes; the tables are generated at build
//! time from `content.json` by `build.rs` and never change at runtime.

use super::field::ContactField;

// ============================================================================
// Form fields
// ============================================================================

/// Display metadata for one form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    pub field: ContactField,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    /// `text`, `email`, `tel` or `textarea`
    pub input_type: &'static str,
    pub required: bool,
    pub rows: Option<u32>,
}

impl FieldMetadata {
    pub fn is_multiline(&self) -> bool {
        self.input_type == "textarea"
    }

    /// Label with the required marker, e.g. "E-mail *"
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }
}

pub fn field_metadata(field: ContactField) -> Option<&'static FieldMetadata> {
    FIELDS.iter().find(|m| m.field == field)
}

// ============================================================================
// Display-only tables
// ============================================================================

/// Канал связи (телефоны, e-mail, WhatsApp)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub items: &'static [ContactItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHoursEntry {
    pub day: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub url: Option<&'static str>,
}

include!(concat!(env!("OUT_DIR"), "/content_gen.rs"));
