//! Flattens one nested translation tree into a flat `path -> string` mapping.
//!
//! Intermediate nodes are JSON objects; leaves must be strings. Paths are the
//! ancestor keys joined with `.`, so `{"a": {"b": {"c": "x"}}}` flattens to
//! `{"a.b.c": "x"}`. Anything else at a leaf position is an error, and the
//! first error aborts the whole call with no partial result.

use serde_json::{Map, Value};

use crate::error::FlattenError;

/// A flattened translation dictionary, dotted path -> string value.
///
/// Backed by `serde_json::Map` (insertion-ordered via `preserve_order`) so
/// merged output files keep the declaration order of their source files.
/// Values are always `Value::String` by construction.
pub type Translations = Map<String, Value>;

const KEY_DELIMITER: char = '.';

/// Flatten a translation tree, prefixing every path with `prefix` when given.
///
/// Keys at the same level never collide because object keys are unique, and
/// deeper levels are namespaced by their ancestor path.
pub fn flatten(
    declarations: &Map<String, Value>,
    prefix: Option<&str>,
) -> Result<Translations, FlattenError> {
    let mut translations = Translations::new();

    for (key, value) in declarations {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{KEY_DELIMITER}{key}"),
            None => key.clone(),
        };

        match value {
            Value::String(text) => {
                translations.insert(path, Value::String(text.clone()));
            }
            Value::Object(nested) if nested.is_empty() => {
                return Err(FlattenError::EmptyObject { path });
            }
            Value::Object(nested) => {
                translations.extend(flatten(nested, Some(&path))?);
            }
            other => {
                return Err(FlattenError::UnexpectedValue {
                    path,
                    value: other.clone(),
                });
            }
        }
    }

    Ok(translations)
}
