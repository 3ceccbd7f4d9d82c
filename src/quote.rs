//! Value quoting for shell-consumable output.
//!
//! Only the VALUE side of a `KEY=VALUE` line is ever quoted. The key is written
//! verbatim. Every mode is a total function: quoting never fails.
//!
//! | Mode     | `it's $HOME`            | empty  |
//! |----------|-------------------------|--------|
//! | `none`   | `it's $HOME`            | (empty)|
//! | `single` | `'it'\''s $HOME'`       | `''`   |
//! | `double` | `"it's \$HOME"`         | `""`   |
//! | `json`   | `"it's $HOME"`          | `""`   |

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// How a resolved value is rendered after the `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum QuoteMode {
    /// Write the raw value.
    #[default]
    None,
    /// POSIX single quotes, embedded `'` written as `'\''`.
    Single,
    /// Double quotes with `\`, `"`, `$` and backtick escaped.
    Double,
    /// JSON string literal.
    Json,
}

impl QuoteMode {
    /// All modes, in the order they are listed in help text.
    pub const ALL: [Self; 4] = [Self::None, Self::Single, Self::Double, Self::Json];

    /// Tag used on the command line and in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Double => "double",
            Self::Json => "json",
        }
    }

    /// Parses a mode tag, treating anything unrecognized as [`QuoteMode::None`].
    ///
    /// Validation of user input happens when flags are parsed; by the time a
    /// tag reaches this point an unknown value means "leave the value alone".
    #[must_use]
    pub fn from_tag_lenient(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::None)
    }
}

impl fmt::Display for QuoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown quote mode tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid quote mode \"{0}\" (expected one of: none, single, double, json)")]
pub struct ParseQuoteModeError(pub String);

impl FromStr for QuoteMode {
    type Err = ParseQuoteModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseQuoteModeError(s.to_string()))
    }
}

/// Renders `value` according to `mode`.
///
/// # Examples
///
/// ```
/// use unveil::quote::{quote_value, QuoteMode};
///
/// assert_eq!(quote_value("abc'def", QuoteMode::Single), r"'abc'\''def'");
/// assert_eq!(quote_value("", QuoteMode::Double), r#""""#);
/// assert_eq!(quote_value("a\nb", QuoteMode::Json), r#""a\nb""#);
/// ```
#[must_use]
pub fn quote_value(value: &str, mode: QuoteMode) -> String {
    match mode {
        QuoteMode::None => value.to_string(),
        QuoteMode::Single => {
            if value.is_empty() {
                return "''".to_string();
            }
            format!("'{}'", value.replace('\'', r"'\''"))
        }
        QuoteMode::Double => {
            if value.is_empty() {
                return r#""""#.to_string();
            }
            // Backslash first so later substitutions are not re-escaped.
            let escaped = value
                .replace('\\', r"\\")
                .replace('"', r#"\""#)
                .replace('$', r"\$")
                .replace('`', r"\`");
            format!("\"{escaped}\"")
        }
        QuoteMode::Json => serde_json::Value::String(value.to_string()).to_string(),
    }
}
