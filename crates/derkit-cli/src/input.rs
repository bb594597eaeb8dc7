//! Reading command input from a file or stdin.

use std::fs;
use std::io::{self, Read};

/// Read all of `path`, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> io::Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path)
    }
}

/// Display name for `path` in command output.
pub fn label(path: &str) -> &str {
    if path == "-" {
        "stdin"
    } else {
        path
    }
}
