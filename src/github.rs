// ABOUTME: GitHub Actions step outputs written to the $GITHUB_OUTPUT file.
// ABOUTME: Only the success path writes; failures leave the file untouched.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::wait::PollResult;

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Path of the step output file, when running inside a workflow.
pub fn output_path() -> Option<PathBuf> {
    std::env::var_os(GITHUB_OUTPUT_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Append `id`, `url`, `state` and `alias_error` to the output file.
pub fn write_outputs(path: &Path, result: &PollResult) -> Result<()> {
    let mut content = String::new();
    for (name, value) in result.outputs() {
        content.push_str(&format_output(name, value));
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::Output(format!("{}: {e}", path.display())))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// One `name=value` entry, using a heredoc block for multi-line values.
fn format_output(name: &str, value: &str) -> String {
    if !value.contains('\n') {
        return format!("{name}={value}\n");
    }

    let mut delimiter = String::from("ghadelimiter");
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}
