use indexmap::IndexMap;

/// An attribute value as produced by the tokenizer.
///
/// The distinction between a string-valued attribute (`href="x"`) and a bare
/// boolean attribute (`checked`) is made here, at the tokenizer boundary, so
/// filtering never has to re-check "is this actually a string".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A string value. The string is raw source text: entities are not decoded.
    Text(String),
    /// A bare attribute with no value.
    Flag,
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Flag => None,
        }
    }
}

/// Insertion-ordered attribute mapping. Attribute order in the source is
/// preserved through filtering and re-serialization.
pub type AttrMap = IndexMap<String, AttrValue>;

/// One unit of tokenized markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Tag {
        /// Tag name, source case preserved (SVG names are mixed-case).
        name: String,
        /// Empty for end tags.
        attributes: AttrMap,
        is_end_tag: bool,
        self_closing: bool,
        /// The exact source slice of the tag, `<` through `>`. Used to
        /// reproduce the original bytes when a disallowed tag is escaped
        /// into visible text.
        raw: String,
    },
    Text {
        /// Raw source text, entities not decoded.
        raw: String,
    },
}

/// A stream of tokens feeding the sanitization pipeline.
///
/// The built-in [`crate::scanner::MarkupScanner`] implements this; callers
/// with their own tokenizer can implement it instead and use
/// [`crate::Sanitizer::sanitize_tokens`] directly.
pub trait TokenSource {
    /// Returns the next token, or `None` at end of stream.
    fn next_token(&mut self) -> Option<Token>;
}
