//! ICU message template parsing.
//!
//! Translation values embed ICU-style patterns: `{arguments}`, `{count,
//! number}` and `{when, date}` formats, `{count, plural, ...}` and `{kind,
//! select, ...}` constructs, and inline `<tags>`. This module turns such a
//! string into a tree of [`MessageElement`]s for the type extractor to walk.
//!
//! Only the dialect the extractor consumes is accepted; unknown format types
//! (e.g. `selectordinal`) are parse errors rather than silently ignored.

use std::fmt;

mod parser;

/// One element of a parsed message.
///
/// This is a closed set: the type extractor dispatches with an exhaustive
/// match, so growing it is a deliberate, compiler-checked change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageElement {
    /// Literal text, including unquoted `#` and quoted runs.
    Text(String),
    /// A bare interpolated argument: `{name}`.
    Argument { name: String },
    /// A number format: `{name, number}` or `{name, number, ::currency/EUR}`.
    Number { name: String, style: Option<String> },
    /// A date format: `{name, date}` or `{name, date, short}`.
    Date { name: String, style: Option<String> },
    /// A plural construct: `{name, plural, one {...} other {...}}`.
    Plural { name: String, branches: Vec<Branch> },
    /// A select construct: `{name, select, a {...} other {...}}`.
    Select { name: String, branches: Vec<Branch> },
    /// An inline tag: `<b>...</b>` or self-closing `<br/>`.
    Tag {
        name: String,
        children: Vec<MessageElement>,
    },
}

/// A named branch of a plural or select construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// The branch selector: a keyword (`one`, `other`, `bot`) or an exact
    /// match like `=0` for plurals.
    pub selector: String,
    pub elements: Vec<MessageElement>,
}

/// A syntax error in a message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMessageError {
    /// Byte offset into the message where parsing failed.
    pub offset: usize,
    pub message: String,
}

impl fmt::Display for ParseMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at offset {})", self.message, self.offset)
    }
}

impl std::error::Error for ParseMessageError {}

/// Parse a message template into its element sequence.
pub fn parse(input: &str) -> Result<Vec<MessageElement>, ParseMessageError> {
    parser::Parser::new(input).parse_message()
}
