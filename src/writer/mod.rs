//! PPTX package writer.
//!
//! Serializes a [`Presentation`] into an Office Open XML package: one ZIP
//! entry per part, `[Content_Types].xml` first. Entries carry a fixed
//! timestamp, so the same presentation always produces the same bytes.

mod master;
mod package;
mod slide;
mod templates;

pub use package::{package_parts, PackagePart};

use crate::error::Result;
use crate::model::Presentation;
use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writes presentations as `.pptx` packages.
#[derive(Debug, Clone, Copy)]
pub struct PptxWriter {
    compression: CompressionMethod,
}

impl PptxWriter {
    /// Create a writer that deflates every entry.
    pub fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Use a different ZIP compression method.
    pub fn with_compression(mut self, compression: CompressionMethod) -> Self {
        self.compression = compression;
        self
    }

    fn file_options(&self) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(self.compression)
            .last_modified_time(DateTime::default())
    }

    /// Write the package to any seekable sink.
    pub fn write<W: Write + Seek>(&self, prs: &Presentation, sink: W) -> Result<W> {
        let parts = package_parts(prs)?;
        let options = self.file_options();

        let mut zip = ZipWriter::new(sink);
        for part in &parts {
            zip.start_file(part.name.as_str(), options)?;
            zip.write_all(part.xml.as_bytes())?;
        }
        log::debug!("wrote {} package parts for {} slides", parts.len(), prs.slide_count());

        Ok(zip.finish()?)
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self, prs: &Presentation) -> Result<Vec<u8>> {
        let cursor = self.write(prs, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Serialize the package to a file, overwriting any existing file.
    pub fn save(&self, prs: &Presentation, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes(prs)?;
        fs::write(path, &bytes)?;
        log::info!("saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}
