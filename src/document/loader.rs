use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Document;

/// Errors that can occur when loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{path}", path = .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {origin}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },
}

impl Document {
    /// Read all of `reader` and split it into words.
    ///
    /// `origin` names the source in error messages.
    pub fn read_from<R: Read>(mut reader: R, origin: &str) -> Result<Self, DocumentError> {
        let mut buffer = Vec::with_capacity(8 << 10);
        // `read_to_end` retries interrupted reads.
        reader
            .read_to_end(&mut buffer)
            .map_err(|source| DocumentError::Read {
                origin: origin.to_string(),
                source,
            })?;

        let document = Self::from_bytes(buffer);
        if document.is_empty() {
            tracing::warn!("{} contains no words", origin);
        }
        tracing::debug!(origin, words = document.len(), "Loaded document");
        Ok(document)
    }

    /// Load the document named on the command line.
    ///
    /// `None` or `-` reads standard input.
    pub fn load(path: Option<&Path>) -> Result<Self, DocumentError> {
        match path {
            Some(path) if path != Path::new("-") => {
                let file = File::open(path).map_err(|source| DocumentError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::read_from(file, &path.display().to_string())
            }
            _ => Self::read_from(io::stdin().lock(), "standard input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn reads_whole_stream() {
        let doc = Document::read_from(&b"one two\nthree"[..], "test").unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.text(2), Some(&b"three"[..]));
    }

    #[test]
    fn read_failure_names_the_origin() {
        let err = Document::read_from(FailingReader, "notes.txt").unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = Document::load(Some(Path::new("/nonexistent/rq-test-file"))).unwrap_err();
        assert!(matches!(err, DocumentError::Open { .. }));
        assert!(err.to_string().starts_with("/nonexistent/rq-test-file"));
    }
}
