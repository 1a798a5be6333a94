use std::fs;
use std::path::Path;

use super::error::Result;

/// Read a text file as newline-joined lines.
///
/// Line terminators (`\n` or `\r\n`) are normalized to `\n`, and a final
/// terminator does not produce a trailing empty line.
pub fn read_text_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(join_lines(&content))
}

/// Write `text` followed by a single newline.
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, format!("{}\n", text))?;
    Ok(())
}

fn join_lines(content: &str) -> String {
    content.lines().collect::<Vec<_>>().join("\n")
}
