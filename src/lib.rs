//! Lingot - translation merging and type generation
//!
//! Lingot is a CLI tool and library for localization pipelines: it merges
//! each language's nested JSON translation files into a single flat
//! dictionary, validates structural invariants across those files, and
//! derives static argument types from the ICU-style message templates of the
//! source language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `error`: The error taxonomy shared by every layer
//! - `flatten`: Nested translation tree -> flat dictionary
//! - `merge`: Per-language cross-file merging and source-language fallback
//! - `message`: ICU message template parsing
//! - `typegen`: Argument type extraction and declaration rendering
//! - `writer`: Output path resolution and file writing

pub mod cli;
pub mod config;
pub mod error;
pub mod flatten;
pub mod merge;
pub mod message;
pub mod typegen;
pub mod writer;
