use std::io;
use std::path::PathBuf;

/// Errors that can occur while converting a PDF into page images.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The PDF rendering library could not be loaded.
    #[error("failed to bind to pdfium library: {0}")]
    BindLibrary(String),

    /// The input file is missing, unreadable or not a PDF.
    #[error("failed to open document {}: {reason}", path.display())]
    OpenDocument {
        /// The path that was opened.
        path: PathBuf,
        /// What the rendering library reported.
        reason: String,
    },

    /// A page could not be loaded from an open document.
    #[error("failed to load page {index}: {reason}")]
    LoadPage {
        /// Zero-based page index.
        index: usize,
        /// What the rendering library reported.
        reason: String,
    },

    /// A loaded page could not be rasterized.
    #[error("failed to render page {index}: {reason}")]
    Render {
        /// Zero-based page index.
        index: usize,
        /// What the rendering library reported.
        reason: String,
    },

    /// A raster could not be encoded as PNG.
    #[error("failed to encode page {index} as png: {reason}")]
    Encode {
        /// Zero-based page index.
        index: usize,
        /// What the encoder reported.
        reason: String,
    },

    /// The output directory could not be created.
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A page image could not be written.
    #[error("failed to write {}", path.display())]
    WritePage {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A directory of page images could not be listed.
    #[error("failed to read directory {}", path.display())]
    ReadDir {
        /// The directory that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
