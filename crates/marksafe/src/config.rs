use crate::error::{Error, Result};
use crate::tables;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::sync::OnceLock;

/// The whitelist configuration: ten named string sets.
///
/// Built once (defaults come from [`crate::tables`]), optionally adjusted, and
/// then handed to a [`crate::Sanitizer`]. Every lookup during sanitization is
/// a plain membership test; nothing mutates the sets after construction, so a
/// single config is safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeConfig {
    /// Element names kept as live tags (HTML + MathML + SVG union).
    pub allowed_elements: FxHashSet<String>,
    /// Attribute names kept on allowed elements (HTML + MathML + SVG union).
    pub allowed_attributes: FxHashSet<String>,
    /// CSS properties kept verbatim in `style` values.
    pub css_properties: FxHashSet<String>,
    /// Value keywords accepted for `background`/`border`/`margin`/`padding`
    /// shorthand families.
    pub css_keywords: FxHashSet<String>,
    /// SVG-only CSS properties kept verbatim in `style` values.
    pub svg_css_properties: FxHashSet<String>,
    /// URI schemes allowed in URI-valued attributes.
    pub protocols: FxHashSet<String>,
    /// Attribute names whose value is a URI.
    pub uri_attributes: FxHashSet<String>,
    /// SVG attributes that may carry `url(...)` references (fragments only).
    pub svg_ref_attributes: FxHashSet<String>,
    /// SVG elements whose `xlink:href` must be a same-document fragment.
    pub svg_local_href_elements: FxHashSet<String>,
    /// Elements with no children, serialized self-closing.
    pub void_elements: FxHashSet<String>,
}

fn set_from(parts: &[&[&str]]) -> FxHashSet<String> {
    parts
        .iter()
        .flat_map(|table| table.iter())
        .map(|s| s.to_string())
        .collect()
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            allowed_elements: set_from(&[
                tables::HTML_ELEMENTS,
                tables::MATHML_ELEMENTS,
                tables::SVG_ELEMENTS,
            ]),
            allowed_attributes: set_from(&[
                tables::HTML_ATTRIBUTES,
                tables::MATHML_ATTRIBUTES,
                tables::SVG_ATTRIBUTES,
            ]),
            css_properties: set_from(&[tables::CSS_PROPERTIES]),
            css_keywords: set_from(&[tables::CSS_KEYWORDS]),
            svg_css_properties: set_from(&[tables::SVG_CSS_PROPERTIES]),
            protocols: set_from(&[tables::PROTOCOLS]),
            uri_attributes: set_from(&[tables::URI_ATTRIBUTES]),
            svg_ref_attributes: set_from(&[tables::SVG_REF_ATTRIBUTES]),
            svg_local_href_elements: set_from(&[tables::SVG_LOCAL_HREF_ELEMENTS]),
            void_elements: set_from(&[tables::VOID_ELEMENTS]),
        }
    }
}

impl SanitizeConfig {
    /// Builds a config from a JSON overlay applied over the defaults.
    pub fn from_overlay_str(json_text: &str) -> Result<Self> {
        let overlay: ConfigOverlay =
            serde_json::from_str(json_text).map_err(|e| Error::InvalidOverlay {
                message: e.to_string(),
            })?;
        let mut config = Self::default();
        config.apply_overlay(&overlay);
        Ok(config)
    }

    /// Applies an overlay: `replace` lists swap a set out wholesale, `add`
    /// lists extend it.
    pub fn apply_overlay(&mut self, overlay: &ConfigOverlay) {
        fn apply(
            set: &mut FxHashSet<String>,
            replace: &Option<Vec<String>>,
            add: &[String],
        ) {
            if let Some(names) = replace {
                *set = names.iter().cloned().collect();
            }
            set.extend(add.iter().cloned());
        }

        apply(
            &mut self.allowed_elements,
            &overlay.allowed_elements,
            &overlay.add_allowed_elements,
        );
        apply(
            &mut self.allowed_attributes,
            &overlay.allowed_attributes,
            &overlay.add_allowed_attributes,
        );
        apply(
            &mut self.css_properties,
            &overlay.css_properties,
            &overlay.add_css_properties,
        );
        apply(
            &mut self.css_keywords,
            &overlay.css_keywords,
            &overlay.add_css_keywords,
        );
        apply(
            &mut self.svg_css_properties,
            &overlay.svg_css_properties,
            &overlay.add_svg_css_properties,
        );
        apply(&mut self.protocols, &overlay.protocols, &overlay.add_protocols);
        apply(
            &mut self.uri_attributes,
            &overlay.uri_attributes,
            &overlay.add_uri_attributes,
        );
        apply(
            &mut self.svg_ref_attributes,
            &overlay.svg_ref_attributes,
            &overlay.add_svg_ref_attributes,
        );
        apply(
            &mut self.svg_local_href_elements,
            &overlay.svg_local_href_elements,
            &overlay.add_svg_local_href_elements,
        );
        apply(
            &mut self.void_elements,
            &overlay.void_elements,
            &overlay.add_void_elements,
        );
    }

    pub fn is_void_element(&self, name: &str) -> bool {
        self.void_elements.contains(name)
    }
}

/// Declarative adjustment of the default whitelists, deserializable from JSON.
///
/// For each set there is a replace key (named after the set) and an `add_`
/// key that extends it. Absent keys leave the defaults untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverlay {
    pub allowed_elements: Option<Vec<String>>,
    pub add_allowed_elements: Vec<String>,
    pub allowed_attributes: Option<Vec<String>>,
    pub add_allowed_attributes: Vec<String>,
    pub css_properties: Option<Vec<String>>,
    pub add_css_properties: Vec<String>,
    pub css_keywords: Option<Vec<String>>,
    pub add_css_keywords: Vec<String>,
    pub svg_css_properties: Option<Vec<String>>,
    pub add_svg_css_properties: Vec<String>,
    pub protocols: Option<Vec<String>>,
    pub add_protocols: Vec<String>,
    pub uri_attributes: Option<Vec<String>>,
    pub add_uri_attributes: Vec<String>,
    pub svg_ref_attributes: Option<Vec<String>>,
    pub add_svg_ref_attributes: Vec<String>,
    pub svg_local_href_elements: Option<Vec<String>>,
    pub add_svg_local_href_elements: Vec<String>,
    pub void_elements: Option<Vec<String>>,
    pub add_void_elements: Vec<String>,
}

static SHARED_DEFAULT: OnceLock<SanitizeConfig> = OnceLock::new();

/// The process-wide default config used by the free `sanitize_*` functions.
pub(crate) fn shared_default() -> &'static SanitizeConfig {
    SHARED_DEFAULT.get_or_init(SanitizeConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_union_the_three_namespaces() {
        let cfg = SanitizeConfig::default();
        assert!(cfg.allowed_elements.contains("p"));
        assert!(cfg.allowed_elements.contains("math"));
        assert!(cfg.allowed_elements.contains("clipPath"));
        assert!(!cfg.allowed_elements.contains("script"));
        assert!(cfg.allowed_attributes.contains("href"));
        assert!(cfg.allowed_attributes.contains("attributeName"));
        assert!(!cfg.allowed_attributes.contains("onclick"));
    }

    #[test]
    fn overlay_replace_and_add() {
        let cfg = SanitizeConfig::from_overlay_str(
            r#"{
                "allowed_elements": ["p", "em"],
                "add_protocols": ["gemini"]
            }"#,
        )
        .unwrap();
        assert!(cfg.allowed_elements.contains("p"));
        assert!(!cfg.allowed_elements.contains("a"));
        assert!(cfg.protocols.contains("gemini"));
        assert!(cfg.protocols.contains("http"));
    }

    #[test]
    fn overlay_rejects_malformed_json_and_unknown_keys() {
        assert!(SanitizeConfig::from_overlay_str("{").is_err());
        assert!(SanitizeConfig::from_overlay_str(r#"{"allowed_tagz": []}"#).is_err());
    }
}
