// src/transcript.rs

use std::io::Read;
use std::path::Path;
use tracing::info;

/// Read an OCR transcript from `path`, or from stdin when `path` is `None`
/// or `-`.
pub fn read_transcript(path: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let text = std::fs::read_to_string(p)?;
            info!(path = %p.display(), bytes = text.len(), "Read transcript");
            Ok(text)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            info!(bytes = text.len(), "Read transcript from stdin");
            Ok(text)
        }
    }
}
