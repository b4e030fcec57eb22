//! Merges all translation files of one language into a single dictionary.
//!
//! Files are enumerated in a stable lexical order because the first file to
//! declare a top-level key owns it; a later file redeclaring the same key is
//! a [`GenerateError::ClashingKey`]. Only the top level needs checking:
//! deeper levels are namespaced by their owning top-level key, so conflicts
//! there are already impossible.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use glob::Pattern;
use serde_json::Value;
use walkdir::WalkDir;

use crate::error::{FlattenError, GenerateError};
use crate::flatten::{Translations, flatten};

/// File name of the merged output when it lives inside a language directory.
/// Skipped during enumeration so a previous run's output is never re-merged.
pub const GENERATED_FILE_NAME: &str = "_generated.json";

/// All JSON translation files under `root`, lexically ordered.
pub fn enumerate_translation_files(
    root: &Path,
    ignores: &[Pattern],
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|error| GenerateError::Io {
            file: error
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            error: error
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop detected")),
        })?;
        let path = entry.path();

        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some("json")
            || entry.file_name() == GENERATED_FILE_NAME
        {
            continue;
        }
        if ignores.iter().any(|pattern| pattern.matches_path(path)) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Read, validate and flatten every file of one language into a single flat
/// dictionary. The first error aborts with no partial output.
pub fn generate_translations(
    language_root: &Path,
    ignores: &[Pattern],
) -> Result<Translations, GenerateError> {
    let files = enumerate_translation_files(language_root, ignores)?;

    let mut top_level_keys: HashMap<String, PathBuf> = HashMap::new();
    let mut out = Translations::new();

    for file in files {
        let contents = fs::read_to_string(&file).map_err(|error| GenerateError::Io {
            file: file.clone(),
            error,
        })?;

        let tree: Value =
            serde_json::from_str(&contents).map_err(|error| GenerateError::InvalidJsonFile {
                file: file.clone(),
                error,
            })?;

        let Some(declarations) = tree.as_object() else {
            return Err(GenerateError::Flatten {
                file,
                error: FlattenError::UnexpectedValue {
                    path: String::new(),
                    value: tree,
                },
            });
        };

        for key in declarations.keys() {
            if let Some(declared_in) = top_level_keys.get(key) {
                return Err(GenerateError::ClashingKey {
                    key_path: key.clone(),
                    declared_in: declared_in.clone(),
                    reused_in: file,
                });
            }
            top_level_keys.insert(key.clone(), file.clone());
        }

        let flat = flatten(declarations, None).map_err(|error| GenerateError::Flatten {
            file: file.clone(),
            error,
        })?;
        out.extend(flat);
    }

    Ok(out)
}

/// Overlay a language's dictionary on the source language's: keys missing
/// from the language fall back to the source value. A shallow override
/// merge only; nothing checks that overrides keep the source's argument
/// shapes.
pub fn with_source_fallback(source: &Translations, language: Translations) -> Translations {
    let mut merged = source.clone();
    merged.extend(language);
    merged
}
