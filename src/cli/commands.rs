//! Command implementations for the Onoma CLI.

use crate::cli::args::{Command, OnomaArgs, OutputFormat, ValidateArgs};
use crate::error::Result;
use crate::suggest::{NameValidator, ValidatorConfig};

/// Execute a CLI command.
pub fn execute_command(args: OnomaArgs) -> Result<()> {
    match &args.command {
        Command::Validate(validate_args) => validate_name(validate_args.clone(), &args),
    }
}

/// Validate a single name and print the result.
fn validate_name(args: ValidateArgs, cli_args: &OnomaArgs) -> Result<()> {
    let validator = NameValidator::from_files(
        &args.corpus,
        &args.reference,
        ValidatorConfig::default(),
    )?;

    // Request parsing lives at this boundary: trim before handing the name
    // to the core.
    let response = validator.validate(args.name.trim())?;

    match cli_args.output_format {
        OutputFormat::Json => {
            let json = if cli_args.pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{json}");
        }
        OutputFormat::Human => {
            println!("Name:       {}", response.original);
            println!("Normalized: {}", response.normalized);
            println!("Valid:      {}", response.is_valid);
            if response.suggestions.is_empty() {
                println!("Suggestions: (none)");
            } else {
                println!("Suggestions:");
                for (i, suggestion) in response.suggestions.iter().enumerate() {
                    println!("  {}. {suggestion}", i + 1);
                }
            }
            if cli_args.verbosity() > 1 {
                println!("Analysis:   {}", serde_json::to_string(&response.analysis)?);
            }
        }
    }

    Ok(())
}
