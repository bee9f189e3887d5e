//! Scoped temp-file registry backing embedded images.
//!
//! Each render call owns one [`TempArena`]. Every temp file created during
//! that render is registered at creation; a single [`sweep`](TempArena::sweep)
//! after the render, on success and failure alike, deletes each exactly once.
//! Deletion failures are logged and never escalate. Should a render unwind
//! without sweeping, the `NamedTempFile` drop guards still remove the files.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[derive(Debug, Default)]
pub struct TempArena {
    files: Vec<NamedTempFile>,
}

impl TempArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `bytes` to a fresh uniquely-named temp file and registers it
    /// for the end-of-render sweep.
    pub fn add_png(&mut self, bytes: &[u8]) -> Result<PathBuf, std::io::Error> {
        let mut file = tempfile::Builder::new()
            .prefix("tagpress")
            .suffix(".png")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;
        let path = file.path().to_path_buf();
        self.files.push(file);
        Ok(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Deletes every registered file. Runs once per render, on every exit
    /// path; failures are warnings, not errors.
    pub fn sweep(&mut self) {
        for file in self.files.drain(..) {
            let path = file.path().to_path_buf();
            if let Err(err) = file.close() {
                log::warn!("Failed to cleanup temp file {}: {}", path.display(), err);
            }
        }
    }
}
