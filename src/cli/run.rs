//! Command dispatch and the generation driver.
//!
//! Generation is a strictly sequential batch: the source language is merged
//! first, then every language directory is merged, defaulted and written in
//! sorted order. The first domain error aborts the rest of the run, so no
//! partial output is left for the language being processed; files written
//! for earlier languages are not rolled back.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use glob::Pattern;

use super::args::{Arguments, Command, GenerateArgs};
use super::report;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};
use crate::error::GenerateError;
use crate::{merge, typegen, writer};

/// What a completed command did, for the final report line.
#[derive(Debug)]
pub enum Summary {
    Generate {
        languages: usize,
        source_keys: usize,
        declarations: bool,
    },
    Init,
}

#[derive(Debug)]
pub struct CommandResult {
    /// The domain outcome. `Err` means a diagnostic to print and exit 1;
    /// infrastructure failures surface as `anyhow::Error` instead.
    pub outcome: Result<Summary, GenerateError>,
}

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(args)) => generate(args),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let config = Config::load()?;

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&config.translations_root));
    let output_template = args.output.unwrap_or_else(|| config.output_template.clone());
    let source_language = args.source.unwrap_or_else(|| config.source_language.clone());
    let declarations = args
        .declarations
        .or_else(|| config.declarations.as_ref().map(PathBuf::from));
    let ignores = config.ignore_patterns()?;

    Ok(CommandResult {
        outcome: generate_all(
            &input,
            &output_template,
            &source_language,
            declarations.as_deref(),
            &ignores,
        ),
    })
}

fn generate_all(
    input: &Path,
    output_template: &str,
    source_language: &str,
    declarations: Option<&Path>,
    ignores: &[Pattern],
) -> Result<Summary, GenerateError> {
    // Validating the template up front means a bad template fails before any
    // language is processed or any file is written.
    let source_output = writer::inject_language(output_template, source_language)?;

    let languages = list_languages(input)?;
    report::preparing(languages.len());

    let source_translations = merge::generate_translations(&input.join(source_language), ignores)?;

    let mut written = 0;
    for language in &languages {
        report::generating(language);
        let output_path = writer::inject_language(output_template, language)?;
        let translations = if language == source_language {
            source_translations.clone()
        } else {
            merge::generate_translations(&input.join(language), ignores)?
        };
        let merged = merge::with_source_fallback(&source_translations, translations);
        writer::write_translations(&output_path, &merged)?;
        written += 1;
    }

    let mut declarations_written = false;
    if let Some(path) = declarations {
        report::generating_typings();
        let types = typegen::generate_typings(&source_translations).map_err(|error| {
            GenerateError::Type {
                file: source_output.clone(),
                error,
            }
        })?;
        writer::write_declarations(path, &types)?;
        declarations_written = true;
    }

    Ok(Summary::Generate {
        languages: written,
        source_keys: source_translations.len(),
        declarations: declarations_written,
    })
}

/// Language codes are the names of the input root's subdirectories, sorted
/// so runs are deterministic regardless of readdir order.
fn list_languages(input: &Path) -> Result<Vec<String>, GenerateError> {
    let entries = fs::read_dir(input).map_err(|error| GenerateError::Io {
        file: input.to_path_buf(),
        error,
    })?;

    let mut languages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|error| GenerateError::Io {
            file: input.to_path_buf(),
            error,
        })?;
        let file_type = entry.file_type().map_err(|error| GenerateError::Io {
            file: entry.path(),
            error,
        })?;
        if file_type.is_dir()
            && let Some(name) = entry.file_name().to_str()
        {
            languages.push(name.to_string());
        }
    }
    languages.sort();
    Ok(languages)
}

fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(CommandResult {
        outcome: Ok(Summary::Init),
    })
}
