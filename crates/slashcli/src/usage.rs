//! Usage rendering for the command-not-found fallback.
//!
//! Consumes command descriptors and produces output only; the exact format
//! is not part of the dispatch contract. `render` builds the plain text,
//! `print` writes a styled variant to stdout.

use console::style;
use slashcli_argparse::token;
use slashcli_metadata::{CommandSpec, FieldSpec};

fn field_label(field: &FieldSpec) -> &str {
    if field.description.is_empty() {
        &field.name
    } else {
        &field.description
    }
}

fn command_token(spec: &CommandSpec, escape: char) -> String {
    format!("  {}", token::format_argument_name(&spec.name, escape))
}

fn inline_field(field: &FieldSpec, escape: char) -> String {
    let name = token::format_argument_name(&field.name, escape);
    let label = field_label(field);
    if field.required {
        format!(" {name} \"{label}\"")
    } else {
        format!(" [{name} \"{label}\"]")
    }
}

fn field_detail(field: &FieldSpec) -> String {
    let mut modifiers = field.value_type.label().to_string();
    if field.required {
        modifiers.push_str(",required");
    }
    format!("     * {}: {} - {}", field.name, modifiers, field_label(field))
}

/// Render the usage listing for the given descriptors. Hidden commands are
/// skipped.
pub fn render(specs: &[CommandSpec], escape: char) -> String {
    let mut out = String::new();
    out.push_str("\n Usage:\n\n");

    for spec in specs.iter().filter(|s| !s.hidden) {
        out.push_str(&command_token(spec, escape));
        for field in &spec.fields {
            out.push_str(&inline_field(field, escape));
        }
        out.push('\n');

        if !spec.description.is_empty() {
            out.push_str(&format!("    - {}\n", spec.description));
        }
        for field in &spec.fields {
            out.push_str(&field_detail(field));
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

/// Print the usage listing to stdout, with command names and required
/// arguments highlighted.
pub fn print(specs: &[CommandSpec], escape: char) {
    println!("\n Usage:");

    for spec in specs.iter().filter(|s| !s.hidden) {
        println!();
        print!("{}", style(command_token(spec, escape)).yellow());
        for field in &spec.fields {
            let part = inline_field(field, escape);
            if field.required {
                print!("{}", style(part).cyan());
            } else {
                print!("{part}");
            }
        }
        println!();

        if !spec.description.is_empty() {
            println!("{}", style(format!("    - {}", spec.description)).dim());
        }
        for field in &spec.fields {
            println!("{}", style(field_detail(field)).dim());
        }
    }
}
