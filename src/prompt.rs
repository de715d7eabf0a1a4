use dialoguer::{Confirm, Input, Select};

use crate::error::{Error, Result};
use crate::group::GroupSpec;

/// Abstraction over user interaction, independent of any terminal library.
///
/// The wizard only ever talks to this trait, so a scripted implementation
/// can drive a full run in tests. The display operations have no-op default
/// bodies for the same reason.
pub trait Prompter {
    /// Asks an open question; implementations block until a non-empty
    /// response is available.
    fn ask_text(&self, prompt: &str) -> Result<String>;

    /// Offers `options` in order and returns the index of the selection.
    fn ask_choice(&self, prompt: &str, options: &[&str]) -> Result<usize>;

    /// Asks a yes/no question with a default.
    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Displays the group metadata and a tabular view of its fields.
    fn show_recap(&self, group: &GroupSpec);

    fn show_title(&self, _text: &str) {}

    fn show_section(&self, _text: &str) {}

    fn show_note(&self, _text: &str) {}

    fn show_caution(&self, _text: &str) {}
}

/// Maps a raw text answer to an option index, accepting either the 0-based
/// index or the option label. Interactive prompters never need this; it is
/// the selection contract for prompters fed from a script or a pipe.
pub fn resolve_choice(options: &[&str], raw: &str) -> Result<usize> {
    if let Ok(index) = raw.parse::<usize>() {
        if index < options.len() {
            return Ok(index);
        }
    }
    if let Some(index) = options.iter().position(|option| *option == raw) {
        return Ok(index);
    }
    Err(Error::InvalidSelection {
        input: raw.to_string(),
        choices: options.join(", "),
    })
}

/// Dialoguer-based implementation of the prompt interface.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_text(&self, prompt: &str) -> Result<String> {
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|answer: &String| -> std::result::Result<(), &str> {
                if answer.trim().is_empty() {
                    Err("A value is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        Ok(input)
    }

    fn ask_choice(&self, prompt: &str, options: &[&str]) -> Result<usize> {
        // Select re-prompts on invalid input internally, so an offered menu
        // can only ever resolve to one of its own indices.
        let selection = Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()?;

        Ok(selection)
    }

    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let result = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;

        Ok(result)
    }

    fn show_recap(&self, group: &GroupSpec) {
        println!("Field group name: {}", group.slug);
        println!("Field group location: {}", group.location);
        println!();
        println!("Fields");
        print_fields_table(group);
    }

    fn show_title(&self, text: &str) {
        println!();
        println!("{}", text);
        println!("{}", "=".repeat(text.len()));
        println!();
    }

    fn show_section(&self, text: &str) {
        println!();
        println!("{}", text);
        println!("{}", "-".repeat(text.len()));
    }

    fn show_note(&self, text: &str) {
        println!("! [NOTE] {}", text);
    }

    fn show_caution(&self, text: &str) {
        eprintln!("! [CAUTION] {}", text);
    }
}

fn print_fields_table(group: &GroupSpec) {
    let header = ["type", "slug", "label", "required"];
    let rows: Vec<[String; 4]> = group
        .fields
        .iter()
        .map(|field| {
            [
                field.r#type.to_string(),
                field.slug.clone(),
                field.label.clone(),
                if field.required { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    print_row(&widths, header);
    let separators = widths.map(|width| "-".repeat(width));
    print_row(&widths, separators.each_ref().map(String::as_str));
    for row in &rows {
        print_row(&widths, row.each_ref().map(String::as_str));
    }
}

fn print_row(widths: &[usize; 4], cells: [&str; 4]) {
    let line = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{:width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {}", line.trim_end());
}
