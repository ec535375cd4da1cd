use crate::utils::{IndelError, IndelResult, Result};
use std::path::Path;
use std::process::Command;

pub const DEFAULT_ALIGNER_CMD: &str = "muscle -align {input} -output {output}";

const INPUT_PLACEHOLDER: &str = "{input}";
const OUTPUT_PLACEHOLDER: &str = "{output}";

pub fn check_aligner_template(template: &str) -> Result<String> {
    if template.split_whitespace().next().is_none() {
        return Err("Aligner command cannot be empty".to_string());
    }
    for placeholder in [INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER] {
        if !template.contains(placeholder) {
            return Err(format!(
                "Aligner command must contain {}: {}",
                placeholder, template
            ));
        }
    }
    Ok(template.to_string())
}

/// Runs an external aligner on `input`, blocking until `output` has been written.
pub fn run_aligner(template: &str, input: &Path, output: &Path) -> IndelResult<()> {
    check_aligner_template(template).map_err(IndelError::Aligner)?;
    let input = input.to_string_lossy();
    let output_str = output.to_string_lossy();
    let mut tokens = template.split_whitespace().map(|token| {
        token
            .replace(INPUT_PLACEHOLDER, &input)
            .replace(OUTPUT_PLACEHOLDER, &output_str)
    });
    let program = tokens
        .next()
        .ok_or_else(|| IndelError::Aligner("Aligner command cannot be empty".to_string()))?;
    let args: Vec<String> = tokens.collect();

    log::debug!("Running aligner: {} {}", program, args.join(" "));
    let result = Command::new(&program)
        .args(&args)
        .output()
        .map_err(|e| IndelError::Aligner(format!("Failed to start {}: {}", program, e)))?;

    if !result.status.success() {
        return Err(IndelError::Aligner(format!(
            "{} exited with {}: {}",
            program,
            result.status,
            String::from_utf8_lossy(&result.stderr).trim()
        )));
    }
    if !output.exists() {
        return Err(IndelError::Aligner(format!(
            "{} did not produce {}",
            program,
            output.display()
        )));
    }
    Ok(())
}
