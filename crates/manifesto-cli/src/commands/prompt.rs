//! Prompt command implementation
//!
//! Prints the narrative prompt a form would send to the text model.

use anyhow::{Context, Result};
use manifesto_goal::narrative_prompt;
use std::path::Path;
use std::process::ExitCode;

use crate::input::load_form;

/// Run the prompt command
///
/// The form is not validated; empty fields render as empty text.
pub fn run(form_path: &str) -> Result<ExitCode> {
    let loaded = load_form(Path::new(form_path))
        .with_context(|| format!("Failed to load form file: {}", form_path))?;

    println!("{}", narrative_prompt(&loaded.form));
    Ok(ExitCode::SUCCESS)
}
