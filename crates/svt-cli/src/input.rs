//! Input loading helpers.

use std::io::{self, Read};
use std::path::Path;

/// Reads a whole file, naming it in the error.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read file {}: {}", path, e))
}

/// Reads a file, or stdin when no path is given.
pub fn read_file_or_stdin(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(buffer)
        }
    }
}

/// Accepts a compact token either inline or as a path to a file holding one.
pub fn read_token(arg: &str) -> Result<String, String> {
    if Path::new(arg).is_file() {
        Ok(read_file(arg)?.trim().to_string())
    } else {
        Ok(arg.trim().to_string())
    }
}
