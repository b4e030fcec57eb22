//! Writes merged dictionaries and generated declarations to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::error::GenerateError;
use crate::flatten::Translations;
use crate::typegen::{TranslationTypes, render_declarations};

/// Placeholder substituted with the language code in the output template.
pub const LANGUAGE_PLACEHOLDER: &str = "%lang";

/// Resolve the output path for one language from the user-supplied template.
///
/// The template must contain [`LANGUAGE_PLACEHOLDER`]; callers validate this
/// once, up front, so a bad template fails before any file is written.
pub fn inject_language(template: &str, language: &str) -> Result<PathBuf, GenerateError> {
    if !template.contains(LANGUAGE_PLACEHOLDER) {
        return Err(GenerateError::MissingTemplateVariable {
            template: template.to_string(),
            variable: LANGUAGE_PLACEHOLDER,
        });
    }
    Ok(PathBuf::from(template.replace(LANGUAGE_PLACEHOLDER, language)))
}

/// Write a merged dictionary as pretty-printed JSON with a trailing newline,
/// creating parent directories as needed.
pub fn write_translations(path: &Path, translations: &Translations) -> Result<(), GenerateError> {
    let content = serde_json::to_string_pretty(&Value::Object(translations.clone()))
        .map_err(|error| io_error(path, error.into()))?;
    write_output(path, &format!("{content}\n"))
}

/// Write the generated TypeScript declarations file.
pub fn write_declarations(path: &Path, types: &TranslationTypes) -> Result<(), GenerateError> {
    write_output(path, &render_declarations(types))
}

fn write_output(path: &Path, content: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|error| io_error(parent, error))?;
    }
    fs::write(path, content).map_err(|error| io_error(path, error))
}

fn io_error(path: &Path, error: std::io::Error) -> GenerateError {
    GenerateError::Io {
        file: path.to_path_buf(),
        error,
    }
}
