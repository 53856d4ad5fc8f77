//! Element and attribute filtering plus the sanitization pipeline.
//!
//! Decision logic per token:
//! - a tag whose name is whitelisted is kept, its attributes filtered and the
//!   tag re-serialized;
//! - any other tag is rendered inert by escaping its raw source text (`<` and
//!   `>` only, nothing else altered);
//! - text is decoded once and re-encoded, which collapses double-encoding
//!   tricks like `&amp;lt;script&amp;gt;` without ever materializing a live
//!   tag.
//!
//! No token influences the filtering of another; the whole pass is a pure
//! function of (token, config).

use crate::config::{self, SanitizeConfig};
use crate::css;
use crate::scanner::MarkupScanner;
use crate::token::{AttrMap, Token, TokenSource};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

fn scheme_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9][-+.a-z0-9]*:").expect("valid regex"))
}

fn svg_nonlocal_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // A `url(...)` whose argument starts with anything but `#`.
    RE.get_or_init(|| Regex::new(r"(?i)url\s*\(\s*[^#\s)][^)]*\)").expect("valid regex"))
}

/// Decode entities once, then re-encode `&`, `<`, `>`.
fn normalize_text(raw: &str) -> String {
    htmlize::escape_text(htmlize::unescape(raw)).into_owned()
}

/// Attribute-value normalization additionally encodes `"`, since values are
/// re-serialized inside double quotes.
fn normalize_attr_value(raw: &str) -> String {
    htmlize::escape_attribute(htmlize::unescape(raw)).into_owned()
}

/// Same-document fragment test for the SVG local-href restriction. Empty and
/// all-whitespace values pass; anything whose first significant character is
/// not `#` fails.
fn is_fragment_reference(value: &str) -> bool {
    let trimmed = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// The scheme check runs on a second decode of the stored value, with
/// backticks, ASCII controls/whitespace (0x00-0x20, 0x7F) and the
/// U+0080-U+00A0 smuggling range stripped, lowercased. This deliberately does
/// not feed back into the stored value.
fn uri_for_scheme_check(value: &str) -> String {
    htmlize::unescape(value)
        .chars()
        .filter(|&c| {
            !matches!(c, '`' | '\u{0000}'..='\u{0020}' | '\u{007F}' | '\u{0080}'..='\u{00A0}')
        })
        .collect::<String>()
        .to_ascii_lowercase()
}

fn has_disallowed_scheme(value: &str, config: &SanitizeConfig) -> bool {
    let candidate = uri_for_scheme_check(value);
    if !scheme_regex().is_match(&candidate) {
        // No scheme: a relative reference, always fine.
        return false;
    }
    let scheme = candidate.split(':').next().unwrap_or("");
    !config.protocols.contains(scheme)
}

/// Applies the per-attribute keep/strip decisions, in order:
/// whitelist membership, SVG local-href restriction, URI scheme validation,
/// SVG `url()` reference stripping, `style` sanitization. Never fails; every
/// unmet condition resolves to a drop or strip.
fn filter_attributes(
    tag_name: &str,
    attributes: &AttrMap,
    config: &SanitizeConfig,
) -> IndexMap<String, String> {
    let mut kept: IndexMap<String, String> = IndexMap::new();
    for (name, attr_value) in attributes {
        let Some(raw) = attr_value.as_text() else {
            // Bare boolean attributes carry no whitelisted meaning here.
            continue;
        };
        if !config.allowed_attributes.contains(name) {
            tracing::debug!(attribute = %name, "dropping disallowed attribute");
            continue;
        }
        let mut value = normalize_attr_value(raw);

        if name == "xlink:href"
            && config.svg_local_href_elements.contains(tag_name)
            && !is_fragment_reference(&value)
        {
            continue;
        }

        if config.uri_attributes.contains(name) && has_disallowed_scheme(&value, config) {
            tracing::debug!(attribute = %name, "dropping attribute with disallowed URI scheme");
            continue;
        }

        if config.svg_ref_attributes.contains(name) {
            value = svg_nonlocal_url_regex()
                .replace_all(&value, " ")
                .into_owned();
        }

        if name == "style" {
            value = css::sanitize_css_with(&value, config);
        }

        kept.insert(name.clone(), value);
    }
    kept
}

fn push_start_tag(
    out: &mut String,
    name: &str,
    attributes: &IndexMap<String, String>,
    self_closing: bool,
    config: &SanitizeConfig,
) {
    out.push('<');
    out.push_str(name);
    for (attr_name, value) in attributes {
        out.push(' ');
        out.push_str(attr_name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    if self_closing || config.is_void_element(name) {
        out.push_str("/>");
    } else {
        out.push('>');
    }
}

fn sanitize_tokens_with<S: TokenSource + ?Sized>(source: &mut S, config: &SanitizeConfig) -> String {
    let mut out = String::new();
    while let Some(token) = source.next_token() {
        match token {
            Token::Text { raw } => out.push_str(&normalize_text(&raw)),
            Token::Tag {
                name,
                attributes,
                is_end_tag,
                self_closing,
                raw,
            } => {
                if !config.allowed_elements.contains(&name) {
                    tracing::debug!(element = %name, "escaping disallowed element");
                    out.push_str(&raw.replace('<', "&lt;").replace('>', "&gt;"));
                } else if is_end_tag {
                    out.push_str("</");
                    out.push_str(&name);
                    out.push('>');
                } else {
                    let kept = filter_attributes(&name, &attributes, config);
                    push_start_tag(&mut out, &name, &kept, self_closing, config);
                }
            }
        }
    }
    out
}

fn sanitize_markup_with(text: &str, config: &SanitizeConfig) -> String {
    // No tag can exist without '<'; leave such input byte-for-byte alone.
    if !text.contains('<') {
        return text.to_string();
    }
    let mut scanner = MarkupScanner::new(text);
    sanitize_tokens_with(&mut scanner, config)
}

/// A sanitizer bound to one whitelist configuration.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    config: SanitizeConfig,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            config: SanitizeConfig::default(),
        }
    }

    pub fn with_config(config: SanitizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SanitizeConfig {
        &self.config
    }

    /// Sanitizes markup text end-to-end with the built-in scanner.
    pub fn sanitize_markup(&self, text: &str) -> String {
        sanitize_markup_with(text, &self.config)
    }

    /// Sanitizes an externally tokenized stream.
    pub fn sanitize_tokens<S: TokenSource + ?Sized>(&self, source: &mut S) -> String {
        sanitize_tokens_with(source, &self.config)
    }

    /// Sanitizes a `style` attribute value.
    pub fn sanitize_css(&self, style: &str) -> String {
        css::sanitize_css_with(style, &self.config)
    }
}

/// Sanitizes markup with the process-wide default whitelists.
pub fn sanitize_markup(text: &str) -> String {
    sanitize_markup_with(text, config::shared_default())
}

/// Sanitizes an externally tokenized stream with the default whitelists.
pub fn sanitize_tokens<S: TokenSource + ?Sized>(source: &mut S) -> String {
    sanitize_tokens_with(source, config::shared_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SanitizeConfig;

    #[test]
    fn script_is_escaped_to_text() {
        assert_eq!(
            sanitize_markup("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn javascript_href_is_dropped() {
        assert_eq!(
            sanitize_markup(r#"<a href="javascript:alert(1)">x</a>"#),
            "<a>x</a>"
        );
    }

    #[test]
    fn benign_link_is_unchanged() {
        let input = r#"<a href="http://example.com">x</a>"#;
        assert_eq!(sanitize_markup(input), input);
    }

    #[test]
    fn relative_references_always_pass() {
        let input = r#"<a href="/a/b?c=d#e">x</a>"#;
        assert_eq!(sanitize_markup(input), input);
    }

    #[test]
    fn scheme_check_survives_entity_and_control_smuggling() {
        for href in [
            "java\tscript:alert(1)",
            "java&#09;script:alert(1)",
            " javascript:alert(1)",
            "JaVaScRiPt:alert(1)",
            "java`script`:alert(1)",
            "&#106;avascript:alert(1)",
            "javascript\u{a0}:alert(1)",
        ] {
            let out = sanitize_markup(&format!(r#"<a href="{href}">x</a>"#));
            assert_eq!(out, "<a>x</a>", "href: {href:?}");
        }
    }

    #[test]
    fn svg_local_href_restriction() {
        assert_eq!(
            sanitize_markup(r#"<use xlink:href="http://evil.example/x.svg#y">"#),
            "<use>"
        );
        let local = r##"<use xlink:href="#good">"##;
        assert_eq!(sanitize_markup(local), local);
        // Elements outside the restricted set only get the scheme check.
        let plain = r#"<a xlink:href="http://example.com">x</a>"#;
        assert_eq!(sanitize_markup(plain), plain);
    }

    #[test]
    fn svg_ref_attributes_drop_nonlocal_urls() {
        assert_eq!(
            sanitize_markup(r#"<rect fill="url(http://evil.example/p.svg#f)"/>"#),
            r#"<rect fill=" "/>"#
        );
        let local = r##"<rect fill="url(#grad)"/>"##;
        assert_eq!(sanitize_markup(local), local);
    }

    #[test]
    fn style_attribute_is_css_sanitized() {
        assert_eq!(
            sanitize_markup(r#"<p style="background:url(javascript:alert(1)) red">x</p>"#),
            r#"<p style="background: red;">x</p>"#
        );
        assert_eq!(
            sanitize_markup(r#"<p style="color:red; position:absolute;">x</p>"#),
            r#"<p style="color: red;">x</p>"#
        );
    }

    #[test]
    fn unknown_attributes_and_flags_are_dropped() {
        assert_eq!(
            sanitize_markup(r#"<p onclick="alert(1)" checked class="c">x</p>"#),
            r#"<p class="c">x</p>"#
        );
    }

    #[test]
    fn text_is_normalized_once() {
        // A double-encoded script stays inert and stable.
        let out = sanitize_markup("<b>x</b> &amp;lt;script&amp;gt;");
        assert_eq!(out, "<b>x</b> &amp;lt;script&amp;gt;");
        // Single-encoded entities decode and re-encode to themselves.
        assert_eq!(sanitize_markup("<b>a &amp; b</b>"), "<b>a &amp; b</b>");
        assert_eq!(sanitize_markup("<b>&lt;i&gt;</b>"), "<b>&lt;i&gt;</b>");
    }

    #[test]
    fn escaped_tags_keep_their_original_bytes() {
        assert_eq!(
            sanitize_markup(r#"<object data="x" classid="y">"#),
            r#"&lt;object data="x" classid="y"&gt;"#
        );
    }

    #[test]
    fn comments_and_doctype_are_escaped() {
        assert_eq!(
            sanitize_markup("<!-- secret --><p>x</p>"),
            "&lt;!-- secret --&gt;<p>x</p>"
        );
        assert_eq!(sanitize_markup("<!DOCTYPE html>"), "&lt;!DOCTYPE html&gt;");
    }

    #[test]
    fn void_elements_serialize_self_closing() {
        assert_eq!(sanitize_markup(r#"<img src="a.png">"#), r#"<img src="a.png"/>"#);
        assert_eq!(sanitize_markup("<br>"), "<br/>");
    }

    #[test]
    fn input_without_lt_is_returned_verbatim() {
        let input = "plain text & &amp; entities > unchanged";
        assert_eq!(sanitize_markup(input), input);
    }

    #[test]
    fn idempotent() {
        for input in [
            "<script>alert(1)</script>",
            r#"<a href="javascript:alert(1)">x</a>"#,
            r#"<a href="http://example.com">x</a>"#,
            r#"<p style="color:red; position:absolute;">x</p>"#,
            r#"<use xlink:href="http://evil.example/x.svg#y">"#,
            "<!-- c --><b>t</b>",
            "1 < 2 <3 <b>ok</b>",
            "<img src=x onerror=alert(1)>",
            "&amp;lt;script&amp;gt;<i>x</i>",
            "<math><mi>x</mi></math>",
        ] {
            let once = sanitize_markup(input);
            assert_eq!(sanitize_markup(&once), once, "input: {input}");
        }
    }

    #[test]
    fn custom_config_restricts_elements() {
        let mut config = SanitizeConfig::default();
        config.allowed_elements.remove("a");
        let sanitizer = Sanitizer::with_config(config);
        assert_eq!(
            sanitizer.sanitize_markup(r#"<a href="http://example.com">x</a>"#),
            r#"&lt;a href="http://example.com"&gt;x&lt;/a&gt;"#
        );
    }

    #[test]
    fn external_token_source() {
        struct Fixed(Vec<Token>);
        impl TokenSource for Fixed {
            fn next_token(&mut self) -> Option<Token> {
                if self.0.is_empty() {
                    None
                } else {
                    Some(self.0.remove(0))
                }
            }
        }
        let mut source = Fixed(vec![
            Token::Text { raw: "a<b".into() },
            Token::Tag {
                name: "marquee".into(),
                attributes: AttrMap::new(),
                is_end_tag: false,
                self_closing: false,
                raw: "<marquee>".into(),
            },
        ]);
        assert_eq!(sanitize_tokens(&mut source), "a&lt;b&lt;marquee&gt;");
    }
}
