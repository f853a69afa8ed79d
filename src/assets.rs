//! Embedded assets: the contact-sheet SVG template and the default config.
//!
//! The binary ships self-contained; both assets can be overridden at run
//! time (`--config`, or a template file placed next to the config) but the
//! embedded copies are always available as fallback.

use rust_embed::RustEmbed;

/// Embedded SVG templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.svg"]
struct EmbeddedTemplates;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Read an embedded template as UTF-8.
pub fn template_string(name: &str) -> Option<String> {
    EmbeddedTemplates::get(name)
        .and_then(|f| String::from_utf8(f.data.into_owned()).ok())
}

/// Read the embedded default config.yaml as UTF-8.
pub fn default_config_string() -> Option<String> {
    EmbeddedConfig::get("config.yaml")
        .and_then(|f| String::from_utf8(f.data.into_owned()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_sheet_template_is_embedded() {
        let svg = template_string("contact_sheet.svg").expect("template missing");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("{{ sheet.width }}"));
    }

    #[test]
    fn test_default_config_is_embedded() {
        let yaml = default_config_string().expect("config.yaml missing");
        assert!(yaml.contains("source_url"));
    }

    #[test]
    fn test_unknown_template_is_none() {
        assert!(template_string("nope.svg").is_none());
    }
}
