//! Validate command implementation
//!
//! Checks a goal form and reports errors and warnings.

use anyhow::{Context, Result};
use colored::Colorize;
use manifesto_goal::validate_form;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    input_error_to_json, validation_error_to_json, validation_warning_to_json, ValidateOutput,
};
use crate::input::{load_form, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `form_path` - Path to the goal form JSON
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(form_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(form_path)
    } else {
        run_human(form_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(form_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), form_path);

    let LoadResult { form, source_hash } = load_form(Path::new(form_path))
        .with_context(|| format!("Failed to load form file: {}", form_path))?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let result = validate_form(&form);

    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }

    if result.is_ok() {
        println!(
            "{} form is valid ({} warning(s))",
            "SUCCESS".green().bold(),
            result.warnings.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} error(s), {} warning(s)",
            "FAILED".red().bold(),
            result.errors.len(),
            result.warnings.len()
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(form_path: &str) -> Result<ExitCode> {
    let LoadResult { form, source_hash } = match load_form(Path::new(form_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output = ValidateOutput {
                success: false,
                errors: vec![input_error_to_json(&e, Some(form_path))],
                warnings: Vec::new(),
                source_hash: None,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let result = validate_form(&form);
    let output = ValidateOutput {
        success: result.is_ok(),
        errors: result.errors.iter().map(validation_error_to_json).collect(),
        warnings: result
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect(),
        source_hash: Some(source_hash),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
