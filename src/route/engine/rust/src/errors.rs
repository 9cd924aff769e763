/* src/route/engine/rust/src/errors.rs */

use std::fmt;

/// Fatal generation errors. Missing configuration is never one of these:
/// lookups fall back to "no customization" / "all locales allowed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
  /// The page tree is structurally invalid (e.g. a node without `path`).
  MalformedPage(String),
  /// Strategy name outside the four supported values.
  UnknownStrategy(String),
  InvalidExcludePattern { pattern: String, message: String },
  InvalidConfig(String),
}

impl GenerateError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::MalformedPage(_) => "MALFORMED_PAGE",
      Self::UnknownStrategy(_) => "UNKNOWN_STRATEGY",
      Self::InvalidExcludePattern { .. } => "INVALID_EXCLUDE_PATTERN",
      Self::InvalidConfig(_) => "INVALID_CONFIG",
    }
  }
}

impl fmt::Display for GenerateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MalformedPage(msg) => write!(f, "{}: {msg}", self.code()),
      Self::UnknownStrategy(name) => write!(
        f,
        "{}: \"{name}\" (expected one of prefix, prefix_except_default, prefix_and_default, no_prefix)",
        self.code()
      ),
      Self::InvalidExcludePattern { pattern, message } => {
        write!(f, "{}: \"{pattern}\": {message}", self.code())
      }
      Self::InvalidConfig(msg) => write!(f, "{}: {msg}", self.code()),
    }
  }
}

impl std::error::Error for GenerateError {}
