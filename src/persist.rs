//! File persistence for [`Buffer`].
//!
//! The buffer is mirrored to disk as an opaque blob: the file holds the
//! exact byte content of the buffer at save time, with no header, version
//! tag, or checksum.

use crate::{buffer::Buffer, error::Error};
use std::{fs, path::Path};
use tracing::debug;

impl Buffer {
    /// Writes the buffer's entire current content to `path`, creating the
    /// file or truncating existing content.
    ///
    /// Cursor positions are not persisted.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        fs::write(path, self.content())?;
        debug!(path = %path.display(), len = self.len(), "saved buffer");
        Ok(())
    }

    /// Replaces the buffer's content with the entire content of `path`.
    ///
    /// Both cursors are repositioned to the start and health is restored.
    /// The write cursor at the start means subsequent writes overwrite the
    /// loaded content; callers that want to extend it must seek the write
    /// cursor to the end first. Callers decoding from anywhere other than
    /// the start must reposition the read cursor explicitly.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        debug!(path = %path.display(), len = data.len(), "loaded buffer");
        self.replace(data);
        Ok(())
    }
}
