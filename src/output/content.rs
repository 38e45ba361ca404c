//! Line-by-line reproduction of a file's contents

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use thiserror::Error;

/// Failure while copying a file into the document.
///
/// Read failures are recorded in the document and the run continues; write
/// failures abort it.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{0}")]
    Read(#[source] io::Error),

    #[error("{0}")]
    Write(#[source] io::Error),
}

/// Copy the lines of `path` to `out`, each terminated by `\n`.
pub fn write_file_contents<W: Write>(path: &Path, out: &mut W) -> Result<(), ContentError> {
    let file = File::open(path).map_err(ContentError::Read)?;
    copy_lines(BufReader::new(file), out)
}

/// Copy lines from `reader`, normalizing `\r\n` endings and guaranteeing a
/// trailing newline. Bytes are passed through untouched otherwise.
pub fn copy_lines<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> Result<(), ContentError> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).map_err(ContentError::Read)?;
        if n == 0 {
            return Ok(());
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        out.write_all(&line).map_err(ContentError::Write)?;
        out.write_all(b"\n").map_err(ContentError::Write)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_adds_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, "Hello\nWorld").unwrap();

        let mut out = Vec::new();
        write_file_contents(&path, &mut out).unwrap();
        assert_eq!(out, b"Hello\nWorld\n");
    }

    #[test]
    fn test_keeps_existing_newline_and_blank_lines() {
        let mut out = Vec::new();
        copy_lines(&b"a\n\nb\n"[..], &mut out).unwrap();
        assert_eq!(out, b"a\n\nb\n");
    }

    #[test]
    fn test_crlf_normalized() {
        let mut out = Vec::new();
        copy_lines(&b"a\r\nb\r\n"[..], &mut out).unwrap();
        assert_eq!(out, b"a\nb\n");
    }

    #[test]
    fn test_empty_file_writes_nothing() {
        let mut out = Vec::new();
        copy_lines(&b""[..], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        let err = write_file_contents(&dir.path().join("gone.txt"), &mut out).unwrap_err();
        assert!(matches!(err, ContentError::Read(_)));
        assert!(out.is_empty());
    }
}
