//! Resolving which maze file a command works on.

use crate::error::{MazeError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "Enter path to maze text file: ";

/// Use the path given on the command line, or ask for one on stdin.
pub fn maze_path(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(path) => Ok(path),
        None => prompt_for_maze_path(&mut std::io::stdin().lock(), &mut std::io::stdout()),
    }
}

/// Write the prompt to `output` and read one line from `input`.
///
/// The trailing newline is stripped; an empty answer is an error.
pub fn prompt_for_maze_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{}", PROMPT)
        .and_then(|()| output.flush())
        .map_err(|e| MazeError::UserError(format!("failed to write prompt: {}", e)))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| MazeError::UserError(format!("failed to read maze path: {}", e)))?;

    let path = line.trim_end_matches(['\n', '\r']);
    if path.is_empty() {
        return Err(MazeError::UserError(
            "no maze file given.\n\nPass a path, e.g. `mazewalk solve maze.txt`.".to_string(),
        ));
    }

    Ok(PathBuf::from(path))
}
