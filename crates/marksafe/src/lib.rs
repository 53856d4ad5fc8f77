#![forbid(unsafe_code)]

//! Whitelist sanitizer for HTML + MathML + SVG markup and inline `style`
//! attributes.
//!
//! Everything not explicitly allowed is neutralized: unknown elements are
//! escaped into visible text, unknown attributes are dropped, URI-valued
//! attributes are scheme-checked, SVG references are restricted to
//! same-document fragments, and `style` values pass a structural gauntlet
//! plus a per-declaration property filter. Allowed content is preserved
//! byte-for-byte.
//!
//! Sanitization is total: every input string terminates and yields a string,
//! and the result is a fixed point (`sanitize_markup(sanitize_markup(x)) ==
//! sanitize_markup(x)`).
//!
//! ```
//! assert_eq!(
//!     marksafe::sanitize_markup("<script>alert(1)</script>"),
//!     "&lt;script&gt;alert(1)&lt;/script&gt;"
//! );
//! assert_eq!(
//!     marksafe::sanitize_css("color:red; position:absolute;"),
//!     "color: red;"
//! );
//! ```
//!
//! The whitelists are configurable before first use via
//! [`SanitizeConfig`] and [`Sanitizer::with_config`]; the free functions use
//! an immutable process-wide default that is safe for concurrent readers.

pub mod config;
pub mod css;
pub mod error;
pub mod sanitize;
pub mod scanner;
pub mod tables;
pub mod token;

pub use config::{ConfigOverlay, SanitizeConfig};
pub use css::sanitize_css;
pub use error::{Error, Result};
pub use sanitize::{Sanitizer, sanitize_markup, sanitize_tokens};
pub use scanner::MarkupScanner;
pub use token::{AttrMap, AttrValue, Token, TokenSource};
