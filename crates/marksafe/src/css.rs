//! Inline `style` value sanitization.
//!
//! Two-stage gate: structural gauntlet patterns that must match the whole
//! remaining text (all-or-nothing), then a per-declaration property/value
//! filter. `url(...)` is stripped unconditionally before anything else, so no
//! surrounding property can smuggle a resource load through.
//!
//! All patterns are compiled once and anchored whole-text; the regex engine
//! has no backtracking, so adversarial repeated-character input degrades
//! linearly.

use crate::config::{self, SanitizeConfig};
use regex::Regex;
use std::sync::OnceLock;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // One-or-more closing parens: a decoded payload like
    // `url(javascript:alert(1))` nests parens inside the argument.
    RE.get_or_init(|| Regex::new(r"url\s*\([^)]*\)+\s*").expect("valid regex"))
}

fn gauntlet_chars_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"\A(?:[-:,;#%.\sa-zA-Z0-9!]|\w-\w|'[\s\w]+'|"[\s\w]+"|\([\d,\s]+\))*\z"#,
        )
        .expect("valid regex")
    })
}

fn gauntlet_shape_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\A\s*(?:[-\w]+\s*:[^:;]*(?:;\s*|\z))*\z").expect("valid regex")
    })
}

fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([-\w]+)\s*:\s*([^:;]*)").expect("valid regex"))
}

fn value_literal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Hex color, rgb() triple (commas/percent optional), or a short numeric
    // literal with an optional unit.
    RE.get_or_init(|| {
        Regex::new(
            r"\A(?:#[0-9a-f]+|rgb\(\d+%?,\d*%?,?\d*%?\)?|\d{0,2}\.?\d{0,2}(?:cm|em|ex|in|mm|pc|pt|px|%|,|\))?)\z",
        )
        .expect("valid regex")
    })
}

/// Property families whose declarations are kept only when every value token
/// is an allowed keyword or a numeric/color literal.
const SHORTHAND_FAMILIES: &[&str] = &["background", "border", "margin", "padding"];

/// Sanitizes a `style` attribute value with the process-wide default config.
pub fn sanitize_css(style: &str) -> String {
    sanitize_css_with(style, config::shared_default())
}

pub(crate) fn sanitize_css_with(style: &str, config: &SanitizeConfig) -> String {
    let style = url_regex().replace_all(style, " ");

    if !gauntlet_chars_regex().is_match(&style) {
        return String::new();
    }
    if !gauntlet_shape_regex().is_match(&style) {
        return String::new();
    }

    let mut clean: Vec<String> = Vec::new();
    for cap in declaration_regex().captures_iter(&style) {
        let value = &cap[2];
        if value.is_empty() {
            continue;
        }
        let property = cap[1].to_ascii_lowercase();

        if config.css_properties.contains(&property) {
            clean.push(format!("{property}: {value};"));
        } else if SHORTHAND_FAMILIES.contains(&property.split('-').next().unwrap_or("")) {
            let all_tokens_allowed = value.split_whitespace().all(|token| {
                config.css_keywords.contains(token) || value_literal_regex().is_match(token)
            });
            if all_tokens_allowed {
                clean.push(format!("{property}: {value};"));
            } else {
                tracing::debug!(property = %property, "dropping style declaration with disallowed value token");
            }
        } else if config.svg_css_properties.contains(&property) {
            clean.push(format!("{property}: {value};"));
        } else {
            tracing::debug!(property = %property, "dropping disallowed style property");
        }
    }

    clean.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_allowed_property_drops_the_rest() {
        assert_eq!(sanitize_css("color:red; position:absolute;"), "color: red;");
    }

    #[test]
    fn url_is_stripped_before_the_keyword_check() {
        assert_eq!(
            sanitize_css("background:url(javascript:alert(1)) red"),
            "background: red;"
        );
        assert_eq!(sanitize_css("background:url(http://x/y.png)"), "");
    }

    #[test]
    fn shorthand_families_accept_keywords_and_literals() {
        assert_eq!(
            sanitize_css("border: 1px solid red"),
            "border: 1px solid red;"
        );
        assert_eq!(sanitize_css("margin: 0 auto"), "margin: 0 auto;");
        assert_eq!(sanitize_css("background-color: #fff"), "background-color: #fff;");
        assert_eq!(
            sanitize_css("background: rgb(255,0,0)"),
            "background: rgb(255,0,0);"
        );
        // One bad token drops the whole declaration.
        assert_eq!(sanitize_css("border: 1px solid expression"), "");
    }

    #[test]
    fn svg_properties_kept_verbatim() {
        assert_eq!(
            sanitize_css("stroke-width: 2; fill: bogus"),
            "stroke-width: 2; fill: bogus;"
        );
    }

    #[test]
    fn gauntlet_failure_discards_everything() {
        // Characters outside the allowed shape kill the whole value, even the
        // parts that would individually pass.
        assert_eq!(sanitize_css("color:red; width:expression(alert(1))"), "");
        assert_eq!(sanitize_css("color:red; font-family:@import"), "");
        assert_eq!(sanitize_css("color:red\u{1}"), "");
    }

    #[test]
    fn gauntlet_is_whole_text_not_per_line() {
        // Line anchors would let an embedded newline smuggle a bad line past
        // the gauntlet.
        assert_eq!(sanitize_css("color:red\nwidth:expression(alert(1))\n"), "");
    }

    #[test]
    fn empty_values_are_skipped() {
        assert_eq!(sanitize_css("color:; clear:both"), "clear: both;");
        assert_eq!(sanitize_css(""), "");
        assert_eq!(sanitize_css("   "), "");
    }

    #[test]
    fn output_never_contains_url() {
        for input in [
            "background:url(x)",
            "background: url( x )",
            "background:url(#a) url(b)",
            "fill:url(javascript:alert(1))",
        ] {
            assert!(!sanitize_css(input).contains("url("), "input: {input}");
        }
    }

    #[test]
    fn idempotent_over_its_own_output() {
        for input in [
            "color:red; position:absolute;",
            "border: 1px solid red",
            "background:url(javascript:alert(1)) red",
            "stroke-width: 2",
            "margin: 0 auto; bogus: x",
        ] {
            let once = sanitize_css(input);
            assert_eq!(sanitize_css(&once), once, "input: {input}");
        }
    }
}
