pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the configuration surface.
///
/// Sanitization itself is total and never returns an error: disallowed or
/// malformed input degrades to dropped attributes, escaped tags, or an empty
/// style string.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid whitelist overlay JSON: {message}")]
    InvalidOverlay { message: String },
}
