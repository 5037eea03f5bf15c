//! Build script for generating content_gen.rs from content.json
//!
//! Reads the static contact-section content (form fields, contact methods,
//! business hours, social links) and emits `'static` Rust constants into
//! `OUT_DIR`, included by `src/contact/content.rs`.

use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONTENT_JSON: &str = "src/contact/content.json";
const KNOWN_FIELDS: &[&str] = &["name", "email", "phone", "subject", "message"];

fn main() {
    println!("cargo:rerun-if-changed={}", CONTENT_JSON);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let output_rs = out_dir.join("content_gen.rs");

    if let Err(e) = generate_content(Path::new(CONTENT_JSON), &output_rs) {
        panic!("Failed to generate contact content: {}", e);
    }
}

// ============================================================================
// JSON Schema Types (owned Strings for serde deserialization)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ContentJson {
    #[allow(dead_code)]
    schema_version: String,
    fields: Vec<FieldJson>,
    contact_methods: Vec<ContactMethodJson>,
    business_hours: Vec<BusinessHoursJson>,
    social_links: Vec<SocialLinkJson>,
}

#[derive(Debug, Deserialize)]
struct FieldJson {
    name: String,
    label: String,
    placeholder: Option<String>,
    input_type: String,
    #[serde(default)]
    required: bool,
    rows: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ContactMethodJson {
    key: String,
    title: String,
    subtitle: String,
    icon: String,
    color: String,
    items: Vec<ContactItemJson>,
}

#[derive(Debug, Deserialize)]
struct ContactItemJson {
    label: String,
    value: String,
    #[serde(default)]
    highlight: bool,
}

#[derive(Debug, Deserialize)]
struct BusinessHoursJson {
    day: String,
    hours: String,
}

#[derive(Debug, Deserialize)]
struct SocialLinkJson {
    key: String,
    label: String,
    icon: String,
    url: Option<String>,
}

// ============================================================================
// Validation
// ============================================================================

fn validate(content: &ContentJson) -> Result<(), String> {
    let mut seen = HashSet::new();
    for field in &content.fields {
        if !KNOWN_FIELDS.contains(&field.name.as_str()) {
            return Err(format!("unknown form field '{}'", field.name));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(format!("duplicate form field '{}'", field.name));
        }
    }
    if seen.len() != KNOWN_FIELDS.len() {
        return Err(format!(
            "expected {} form fields, found {}",
            KNOWN_FIELDS.len(),
            seen.len()
        ));
    }

    unique_keys("contact method", content.contact_methods.iter().map(|m| m.key.as_str()))?;
    unique_keys("social link", content.social_links.iter().map(|s| s.key.as_str()))?;
    Ok(())
}

fn unique_keys<'a>(what: &str, keys: impl Iterator<Item = &'a str>) -> Result<(), String> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.is_empty() {
            return Err(format!("{} with empty key", what));
        }
        if !seen.insert(key) {
            return Err(format!("duplicate {} key '{}'", what, key));
        }
    }
    Ok(())
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_content(
    json_path: &Path,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = fs::read_to_string(json_path)?;
    let content: ContentJson = serde_json::from_str(&json_content)?;
    validate(&content)?;

    fs::write(output_path, generate_rust_code(&content))?;
    Ok(())
}

fn generate_rust_code(content: &ContentJson) -> String {
    let mut code = String::new();

    code.push_str(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM content.json - DO NOT EDIT MANUALLY\n\
         // ============================================================================\n\n",
    );

    code.push_str(&generate_fields_array(&content.fields));
    code.push('\n');
    code.push_str(&generate_methods_array(&content.contact_methods));
    code.push('\n');
    code.push_str(&generate_hours_array(&content.business_hours));
    code.push('\n');
    code.push_str(&generate_social_array(&content.social_links));

    code
}

fn generate_fields_array(fields: &[FieldJson]) -> String {
    let mut code = String::from("/// Form field metadata, display order\npub const FIELDS: &[FieldMetadata] = &[\n");

    for field in fields {
        code.push_str(&format!(
            "    FieldMetadata {{\n\
             \x20       field: ContactField::{},\n\
             \x20       label: \"{}\",\n\
             \x20       placeholder: {},\n\
             \x20       input_type: \"{}\",\n\
             \x20       required: {},\n\
             \x20       rows: {},\n\
             \x20   }},\n",
            to_pascal_case(&field.name),
            escape_string(&field.label),
            option_str(&field.placeholder),
            escape_string(&field.input_type),
            field.required,
            option_u32(field.rows),
        ));
    }

    code.push_str("];\n");
    code
}

fn generate_methods_array(methods: &[ContactMethodJson]) -> String {
    let mut code = String::from("/// Contact channels\npub const CONTACT_METHODS: &[ContactMethod] = &[\n");

    for method in methods {
        let items = method
            .items
            .iter()
            .map(|item| {
                format!(
                    "            ContactItem {{ label: \"{}\", value: \"{}\", highlight: {} }},\n",
                    escape_string(&item.label),
                    escape_string(&item.value),
                    item.highlight
                )
            })
            .collect::<String>();

        code.push_str(&format!(
            "    ContactMethod {{\n\
             \x20       key: \"{}\",\n\
             \x20       title: \"{}\",\n\
             \x20       subtitle: \"{}\",\n\
             \x20       icon: \"{}\",\n\
             \x20       color: \"{}\",\n\
             \x20       items: &[\n{}\x20       ],\n\
             \x20   }},\n",
            escape_string(&method.key),
            escape_string(&method.title),
            escape_string(&method.subtitle),
            escape_string(&method.icon),
            escape_string(&method.color),
            items,
        ));
    }

    code.push_str("];\n");
    code
}

fn generate_hours_array(hours: &[BusinessHoursJson]) -> String {
    let mut code = String::from("/// Opening hours\npub const BUSINESS_HOURS: &[BusinessHoursEntry] = &[\n");

    for entry in hours {
        code.push_str(&format!(
            "    BusinessHoursEntry {{ day: \"{}\", hours: \"{}\" }},\n",
            escape_string(&entry.day),
            escape_string(&entry.hours)
        ));
    }

    code.push_str("];\n");
    code
}

fn generate_social_array(links: &[SocialLinkJson]) -> String {
    let mut code = String::from("/// Social network links\npub const SOCIAL_LINKS: &[SocialLink] = &[\n");

    for link in links {
        code.push_str(&format!(
            "    SocialLink {{ key: \"{}\", label: \"{}\", icon: \"{}\", url: {} }},\n",
            escape_string(&link.key),
            escape_string(&link.label),
            escape_string(&link.icon),
            option_str(&link.url)
        ));
    }

    code.push_str("];\n");
    code
}

// ============================================================================
// Helper functions
// ============================================================================

fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

fn option_str(opt: &Option<String>) -> String {
    match opt {
        Some(s) => format!("Some(\"{}\")", escape_string(s)),
        None => "None".to_string(),
    }
}

fn option_u32(opt: Option<u32>) -> String {
    match opt {
        Some(v) => format!("Some({})", v),
        None => "None".to_string(),
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
