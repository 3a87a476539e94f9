pub mod classify;
pub mod config;
pub mod dump;
pub mod extract;
pub mod inbox;

use std::io::Read;
use std::path::PathBuf;

/// Brain dump text from the positional argument, a file, or stdin.
pub fn read_input(
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<String, Box<dyn std::error::Error>> {
    match (text, file) {
        (Some(_), Some(_)) => Err("pass either TEXT or --file, not both".into()),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()).into()),
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// First eight characters of an item id.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
