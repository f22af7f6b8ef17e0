//! Input rules for the `analyze` command
//!
//! Text can be typed or read from a `.txt` file. File content wins over typed
//! text, and blank input is rejected before any request is made.

use crate::utils::error::{AppError, AppResult};
use std::path::Path;

/// Largest accepted input file
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text or upload a file to analyze.";

/// Read a `.txt` file no larger than [`MAX_FILE_BYTES`]
pub fn read_text_file(path: &Path) -> AppResult<String> {
    let is_txt = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(AppError::Input(
            "Please upload a text file (.txt)".to_string(),
        ));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| AppError::Io(format!("Failed to read file {}: {}", path.display(), e)))?;
    if metadata.len() > MAX_FILE_BYTES {
        return Err(AppError::Input("File size must be less than 1MB".to_string()));
    }

    // Invalid UTF-8 is replaced rather than rejected
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::Io(format!("Failed to read file {}: {}", path.display(), e)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Pick the text to analyze. Non-empty file content takes precedence over
/// typed text; the chosen text is returned untrimmed.
pub fn resolve_input(text: Option<&str>, file: Option<&Path>) -> AppResult<String> {
    let file_content = file.map(read_text_file).transpose()?;

    let input = match file_content {
        Some(content) if !content.is_empty() => content,
        _ => text.unwrap_or_default().to_string(),
    };

    if input.trim().is_empty() {
        return Err(AppError::Input(EMPTY_INPUT_MESSAGE.to_string()));
    }

    Ok(input)
}
