//! Raw sequence input from a file or stdin.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Raw bytes plus a display name for where they came from.
#[derive(Debug, Clone)]
pub struct RawInput {
    pub source: String,
    pub bytes: Vec<u8>,
}

fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == "-")
}

/// Read the whole input into memory.
pub fn read_input(path: Option<&Path>) -> Result<RawInput> {
    read_input_or(path, || io::stdin().lock())
}

/// Read `path`, or the reader from `stdin` when `path` is absent or `-`.
pub fn read_input_or<R, F>(path: Option<&Path>, stdin: F) -> Result<RawInput>
where
    R: Read,
    F: FnOnce() -> R,
{
    let input = match path {
        Some(p) if !is_stdin(path) => {
            let bytes =
                std::fs::read(p).with_context(|| format!("failed to read {}", p.display()))?;
            RawInput {
                source: p.display().to_string(),
                bytes,
            }
        }
        _ => read_from(stdin(), "<stdin>")?,
    };
    info!(source = %input.source, bytes = input.bytes.len(), "read raw sequence");
    Ok(input)
}

/// Read all bytes from an arbitrary reader.
pub fn read_from<R: Read>(mut reader: R, source: &str) -> Result<RawInput> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .with_context(|| format!("failed to read {source}"))?;
    Ok(RawInput {
        source: source.to_string(),
        bytes,
    })
}
