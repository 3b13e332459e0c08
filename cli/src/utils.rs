use std::fs;
use std::io::{self, Read};

use tracing::debug;

use crate::error::{Error, Result};

/// Read the whole input named by `-f`. `-` reads stdin.
pub(crate) fn read_input(path: &str) -> Result<Vec<u8>> {
    let read = if path == "-" {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer).map(|_| buffer)
    } else {
        fs::read(path)
    };

    let content = read.map_err(|source| Error::ReadFile {
        path: path.to_string(),
        source,
    })?;
    debug!(path, len = content.len(), "read input");
    Ok(content)
}
