//! File delivery capability.
//!
//! The browser frontend delivered exports through an object URL bound to a
//! synthetic anchor click; here that capability is a trait so the document
//! builders stay pure and hosts choose where artifacts land.

use std::path::{Path, PathBuf};

/// Delivery seam for finished export artifacts.
pub trait FileSink {
    /// Deliver one finished artifact.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` if the artifact cannot be written.
    fn save(&self, filename: &str, mime_type: &str, bytes: &[u8]) -> std::io::Result<()>;
}

/// Sink that writes artifacts into a target directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir`. The directory is created on first
    /// save if missing.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirectorySink {
    fn save(&self, filename: &str, mime_type: &str, bytes: &[u8]) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes)?;
        tracing::debug!(path = %path.display(), mime_type, "Export artifact written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bytes_under_target_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("exports"));

        sink.save("report.csv", "text/csv;charset=utf-8;", b"\"a\",\"b\"\n")
            .unwrap();

        let written = std::fs::read(dir.path().join("exports/report.csv")).unwrap();
        assert_eq!(written, b"\"a\",\"b\"\n");
    }
}
