//! PDFium rendering through `pdfium-render`.

use crate::error::{Error, Result};
use crate::renderer::{Document, Raster, RenderOptions, Renderer};
use log::debug;
use pdfium_render::prelude::*;
use std::path::Path;

/// A renderer backed by a dynamically loaded PDFium library.
pub struct PdfiumRenderer {
    pdfium: Pdfium,
}

impl PdfiumRenderer {
    /// Load PDFium. `library` may name the shared library itself or the
    /// directory holding it. Without it, the working directory is tried
    /// before the system library.
    pub fn bind(library: Option<&Path>) -> Result<Self> {
        let bindings = match library {
            Some(path) if path.is_dir() => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(path))
            }
            Some(path) => Pdfium::bind_to_library(path),
            None => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library()),
        }
        .map_err(|e| Error::BindLibrary(e.to_string()))?;

        match library {
            Some(path) => debug!("bound pdfium from {}", path.display()),
            None => debug!("bound pdfium from the default search path"),
        }

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl Renderer for PdfiumRenderer {
    fn name(&self) -> &str {
        "pdfium"
    }

    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn Document + 'a>> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::OpenDocument {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Box::new(PdfiumDocument { document }))
    }
}

struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl Document for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize, options: &RenderOptions) -> Result<Raster> {
        let page_index = PdfPageIndex::try_from(index).map_err(|_| Error::LoadPage {
            index,
            reason: "page index out of range".to_string(),
        })?;
        let page = self
            .document
            .pages()
            .get(page_index)
            .map_err(|e| Error::LoadPage {
                index,
                reason: e.to_string(),
            })?;

        let image = page
            .render_with_config(&PdfRenderConfig::new().scale_page_by_factor(options.scale))
            .map_err(|e| Error::Render {
                index,
                reason: e.to_string(),
            })?
            .as_image()
            .into_rgb8();

        debug!(
            "page {} is {}x{} pt, rendered at {}x{} px",
            index,
            page.width().value,
            page.height().value,
            image.width(),
            image.height()
        );

        let (width, height) = (image.width(), image.height());
        Raster::from_raw(width, height, image.into_raw()).ok_or_else(|| Error::Render {
            index,
            reason: "bitmap size does not match its dimensions".to_string(),
        })
    }
}
