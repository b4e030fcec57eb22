//! Error types for translation merging and type generation.
//!
//! All expected domain conditions are returned as values, never panicked on.
//! The first error found aborts the current run; each layer adds the file or
//! key context it knows about as the error propagates outwards.

use std::{fmt, io, path::PathBuf};

use serde_json::Value;

use crate::message::ParseMessageError;

/// Structural error found while flattening a single translation tree.
///
/// Carries the dotted path of the offending node. The originating file is
/// unknown at this level; the merger attaches it (see [`GenerateError::Flatten`]).
#[derive(Debug, Clone, PartialEq)]
pub enum FlattenError {
    /// An object node with zero entries. These cannot be flattened without
    /// silently dropping the key itself, so they are rejected.
    EmptyObject { path: String },
    /// A leaf holding anything other than a string (array, null, number, bool).
    UnexpectedValue { path: String, value: Value },
}

impl fmt::Display for FlattenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlattenError::EmptyObject { path } => {
                write!(f, "empty object at \"{}\" cannot be flattened", path)
            }
            FlattenError::UnexpectedValue { path, value } => {
                write!(
                    f,
                    "unexpected value {} at \"{}\" (translation values must be strings)",
                    value,
                    display_path(path)
                )
            }
        }
    }
}

impl std::error::Error for FlattenError {}

/// Error found while deriving argument types from a message template.
///
/// Carries the translation key the message belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeError {
    /// A `select` construct without the mandatory `other` branch.
    MissingOtherBranch { key: String },
    /// A tag that wraps exactly one argument, e.g. `<b>{name}</b>`. The
    /// nesting is redundant: the argument already accepts embeddable content,
    /// so the source message should use the bare `{name}` instead.
    ReplaceComplexTag {
        key: String,
        tag_name: String,
        argument_name: String,
    },
    /// The message string is not valid ICU syntax.
    MessageSyntax {
        key: String,
        error: ParseMessageError,
    },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::MissingOtherBranch { key } => {
                write!(f, "select in \"{}\" is missing the `other` branch", key)
            }
            TypeError::ReplaceComplexTag {
                key,
                tag_name,
                argument_name,
            } => {
                write!(
                    f,
                    "\"{}\" wraps a single argument in a tag: replace <{tag}>{{{arg}}}</{tag}> with {{{arg}}}",
                    key,
                    tag = tag_name,
                    arg = argument_name
                )
            }
            TypeError::MessageSyntax { key, error } => {
                write!(f, "message for \"{}\" is not valid ICU syntax: {}", key, error)
            }
        }
    }
}

impl std::error::Error for TypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TypeError::MessageSyntax { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Any error that aborts a generation run, with the file context attached.
#[derive(Debug)]
pub enum GenerateError {
    /// A translation file could not be read, or output could not be written.
    Io { file: PathBuf, error: io::Error },
    /// A translation file is not valid JSON.
    InvalidJsonFile {
        file: PathBuf,
        error: serde_json::Error,
    },
    /// A structural error inside one file's tree.
    Flatten { file: PathBuf, error: FlattenError },
    /// Two files of the same language declare the same top-level key. The
    /// first file in enumeration order owns the key.
    ClashingKey {
        key_path: String,
        declared_in: PathBuf,
        reused_in: PathBuf,
    },
    /// A type extraction error, tagged with the merged file the typings run
    /// was derived from.
    Type { file: PathBuf, error: TypeError },
    /// The output path template does not contain the language placeholder.
    MissingTemplateVariable {
        template: String,
        variable: &'static str,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Io { file, error } => {
                write!(f, "{}: {}", file.display(), error)
            }
            GenerateError::InvalidJsonFile { file, error } => {
                write!(f, "{}: invalid JSON: {}", file.display(), error)
            }
            GenerateError::Flatten { file, error } => {
                write!(f, "{}: {}", file.display(), error)
            }
            GenerateError::ClashingKey {
                key_path,
                declared_in,
                reused_in,
            } => {
                write!(
                    f,
                    "top-level key \"{}\" in {} is already declared in {}",
                    key_path,
                    reused_in.display(),
                    declared_in.display()
                )
            }
            GenerateError::Type { file, error } => {
                write!(f, "{}: {}", file.display(), error)
            }
            GenerateError::MissingTemplateVariable { template, variable } => {
                write!(
                    f,
                    "output template \"{}\" is missing the {} placeholder",
                    template, variable
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Io { error, .. } => Some(error),
            GenerateError::InvalidJsonFile { error, .. } => Some(error),
            GenerateError::Flatten { error, .. } => Some(error),
            GenerateError::Type { error, .. } => Some(error),
            _ => None,
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}
