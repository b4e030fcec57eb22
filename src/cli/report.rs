//! Report formatting and printing utilities.
//!
//! Kept out of the generation logic so the library can be used without
//! printing side effects.

use colored::Colorize;

use super::run::{CommandResult, Summary};
use crate::config::CONFIG_FILE_NAME;
use crate::error::{GenerateError, TypeError};
use crate::writer::LANGUAGE_PLACEHOLDER;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn preparing(count: usize) {
    println!(
        "Preparing to generate translation files for {} {}",
        count,
        if count == 1 { "language" } else { "languages" }
    );
}

pub fn generating(language: &str) {
    println!("  {} {}", "generating".cyan(), language);
}

pub fn generating_typings() {
    println!("  {} type declarations", "generating".cyan());
}

/// Print the final outcome: a green summary on success, or a cargo-style
/// diagnostic naming the offending file/key on failure.
pub fn print(result: &CommandResult) {
    match &result.outcome {
        Ok(Summary::Generate {
            languages,
            source_keys,
            declarations,
        }) => {
            let mut message = format!(
                "Generated translations for {} {} ({} {})",
                languages,
                if *languages == 1 { "language" } else { "languages" },
                source_keys,
                if *source_keys == 1 { "key" } else { "keys" }
            );
            if *declarations {
                message.push_str(" and type declarations");
            }
            println!("{} {}", SUCCESS_MARK.green(), message.green());
        }
        Ok(Summary::Init) => {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
        Err(error) => {
            println!("{}: {}", "error".bold().red(), error);
            if let Some(hint) = hint(error) {
                println!("  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
            }
            println!("\n{} {}", FAILURE_MARK.red(), "generation failed".red());
        }
    }
}

fn hint(error: &GenerateError) -> Option<String> {
    match error {
        GenerateError::MissingTemplateVariable { .. } => Some(format!(
            "example: ./translations/{LANGUAGE_PLACEHOLDER}/_generated.json"
        )),
        GenerateError::Type {
            error: TypeError::MissingOtherBranch { .. },
            ..
        } => Some("add an `other {}` branch to keep the select exhaustive".to_string()),
        GenerateError::Type {
            error: TypeError::ReplaceComplexTag { .. },
            ..
        } => Some("arguments are embeddable on their own; drop the wrapping tag".to_string()),
        _ => None,
    }
}
