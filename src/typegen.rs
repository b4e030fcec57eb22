//! Derives static argument types from parsed message templates.
//!
//! Each translation key's message is walked once; every referenced argument
//! is assigned the type its usage implies. The result feeds the generated
//! TypeScript declarations so message consumers get compile-time checking of
//! argument names and shapes.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::TypeError;
use crate::flatten::Translations;
use crate::message::{self, MessageElement};

/// The derived static type of one message argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentType {
    /// A bare `{argument}`. Anything embeddable renders here, so the widest
    /// consumer-side type applies.
    Node,
    /// A `{n, number}` format or the control variable of a plural.
    Number,
    /// A `{d, date}` format.
    Date,
    /// An inline tag; consumers supply a function that wraps the tag body.
    TagMapper,
    /// A select whose `other` branch carries real content.
    String,
    /// A strict select (empty `other` branch): the finite set of non-`other`
    /// branch names.
    StringUnion(Vec<String>),
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentType::Node => write!(f, "ReactNode"),
            ArgumentType::Number => write!(f, "number"),
            ArgumentType::Date => write!(f, "Date"),
            ArgumentType::TagMapper => write!(f, "TagMapper"),
            ArgumentType::String => write!(f, "string"),
            ArgumentType::StringUnion(cases) => {
                let rendered: Vec<String> = cases.iter().map(|c| format!("\"{c}\"")).collect();
                write!(f, "{}", rendered.join(" | "))
            }
        }
    }
}

/// Argument name -> derived type, for one translation key.
pub type ArgumentTypes = BTreeMap<String, ArgumentType>;

/// Translation key -> its argument types.
pub type TranslationTypes = BTreeMap<String, ArgumentTypes>;

/// Name of the generated interface in the declarations file.
pub const INTERFACE_NAME: &str = "TranslationArguments";

/// Extract the argument types referenced by one message's element sequence.
pub fn extract_types(
    elements: &[MessageElement],
    key: &str,
) -> Result<ArgumentTypes, TypeError> {
    let mut out = ArgumentTypes::new();
    for element in elements {
        extract_from_element(element, key, &mut out)?;
    }
    Ok(out)
}

/// Sibling and branch contributions merge by name; branches of the same
/// argument are expected to agree, so a later write winning is fine.
fn extract_from_element(
    element: &MessageElement,
    key: &str,
    out: &mut ArgumentTypes,
) -> Result<(), TypeError> {
    match element {
        MessageElement::Text(_) => {}
        MessageElement::Argument { name } => {
            out.insert(name.clone(), ArgumentType::Node);
        }
        MessageElement::Number { name, .. } => {
            out.insert(name.clone(), ArgumentType::Number);
        }
        MessageElement::Date { name, .. } => {
            out.insert(name.clone(), ArgumentType::Date);
        }
        MessageElement::Tag { name, children } => {
            out.insert(name.clone(), ArgumentType::TagMapper);

            // <b>{x}</b> is reducible to {x}: the argument is embeddable on
            // its own, so the tag adds nothing but indirection.
            if let [MessageElement::Argument { name: argument }] = children.as_slice() {
                return Err(TypeError::ReplaceComplexTag {
                    key: key.to_string(),
                    tag_name: name.clone(),
                    argument_name: argument.clone(),
                });
            }

            for child in children {
                extract_from_element(child, key, out)?;
            }
        }
        MessageElement::Plural { name, branches } => {
            out.insert(name.clone(), ArgumentType::Number);
            for branch in branches {
                for element in &branch.elements {
                    extract_from_element(element, key, out)?;
                }
            }
        }
        MessageElement::Select { name, branches } => {
            let Some(other) = branches.iter().find(|b| b.selector == "other") else {
                return Err(TypeError::MissingOtherBranch {
                    key: key.to_string(),
                });
            };

            // An empty `other` marks the strict idiom: the non-`other`
            // branches enumerate every input the caller may pass.
            let derived = if other.elements.is_empty() {
                ArgumentType::StringUnion(
                    branches
                        .iter()
                        .filter(|b| b.selector != "other")
                        .map(|b| b.selector.clone())
                        .collect(),
                )
            } else {
                ArgumentType::String
            };
            out.insert(name.clone(), derived);

            for branch in branches {
                for element in &branch.elements {
                    extract_from_element(element, key, out)?;
                }
            }
        }
    }
    Ok(())
}

/// Derive types for every key of the source dictionary.
///
/// Parses each string value and extracts its types; the first failure aborts
/// the whole typings run so a broken message never produces a partial file.
pub fn generate_typings(translations: &Translations) -> Result<TranslationTypes, TypeError> {
    let mut types = TranslationTypes::new();
    for (key, value) in translations {
        let Some(text) = value.as_str() else {
            continue; // flattening guarantees string values
        };
        let elements = message::parse(text).map_err(|error| TypeError::MessageSyntax {
            key: key.clone(),
            error,
        })?;
        types.insert(key.clone(), extract_types(&elements, key)?);
    }
    Ok(types)
}

/// Render the declarations file: one interface field per translation key,
/// `never` when the key takes no arguments.
pub fn render_declarations(types: &TranslationTypes) -> String {
    let mut out = String::new();
    out.push_str("import type { ReactNode } from \"react\"\n\n");
    out.push_str("export type TagMapper = (input: any) => ReactNode\n\n");
    out.push_str(&format!("export interface {INTERFACE_NAME} {{\n"));

    for (key, arguments) in types {
        if arguments.is_empty() {
            out.push_str(&format!("  \"{key}\": never\n"));
        } else {
            let fields: Vec<String> = arguments
                .iter()
                .map(|(name, derived)| format!("{name}: {derived}"))
                .collect();
            out.push_str(&format!("  \"{key}\": {{ {} }}\n", fields.join("; ")));
        }
    }

    out.push_str("}\n");
    out
}
