//! Example command implementation

use anyhow::Result;
use manifesto_goal::GoalForm;
use std::process::ExitCode;

/// Print the example form as pretty JSON.
pub fn run() -> Result<ExitCode> {
    println!("{}", GoalForm::example().to_json_pretty()?);
    Ok(ExitCode::SUCCESS)
}
