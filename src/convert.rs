use crate::error::{Error, Result};
use crate::output::page_file_name;
use crate::renderer::{RenderOptions, Renderer};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Where page images go when no directory is given.
pub const DEFAULT_OUT_DIR: &str = "out/pages";
/// The resolution used when none is given.
pub const DEFAULT_DPI: u32 = 250;

/// How a document should be converted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// The directory that receives `page-NNN.png` files. Created if missing.
    pub out_dir: PathBuf,
    /// Rendering resolution in dots per inch.
    pub dpi: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            dpi: DEFAULT_DPI,
        }
    }
}

impl ConvertOptions {
    /// The render options matching the configured resolution.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from_dpi(self.dpi)
    }
}

/// What a finished conversion wrote.
#[derive(Clone, Debug, Default)]
pub struct ConvertReport {
    /// The number of pages in the document.
    pub page_count: usize,
    /// The written page images, in page order.
    pub pages: Vec<PathBuf>,
}

/// Render every page of `pdf` into `options.out_dir`, one PNG per page.
///
/// Pages are written one at a time in document order. The first failure
/// aborts the conversion and leaves already written pages in place.
pub fn convert(renderer: &dyn Renderer, pdf: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
    fs::create_dir_all(&options.out_dir).map_err(|source| Error::CreateDir {
        path: options.out_dir.clone(),
        source,
    })?;

    let document = renderer.open(pdf)?;
    let page_count = document.page_count();
    let render_options = options.render_options();

    info!(
        "converting {} ({} pages) at {} dpi into {} with {}",
        pdf.display(),
        page_count,
        options.dpi,
        options.out_dir.display(),
        renderer.name()
    );

    let mut pages = Vec::with_capacity(page_count);

    for index in 0..page_count {
        let raster = document.render_page(index, &render_options)?;
        let png = raster.encode_png().map_err(|e| Error::Encode {
            index,
            reason: e.to_string(),
        })?;

        let path = options.out_dir.join(page_file_name(index + 1));
        fs::write(&path, png).map_err(|source| Error::WritePage {
            path: path.clone(),
            source,
        })?;

        debug!(
            "wrote {} ({}x{} px)",
            path.display(),
            raster.width(),
            raster.height()
        );
        pages.push(path);
    }

    Ok(ConvertReport { page_count, pages })
}
