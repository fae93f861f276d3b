use crate::error::{Error, Result};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;

mod pdfium;
pub use pdfium::PdfiumRenderer;

/// PDF user space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// The options that should be applied when rendering a page to a raster.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// By how much the original size should be scaled.
    pub scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl RenderOptions {
    /// Options that rasterize a page at the given resolution.
    pub fn from_dpi(dpi: u32) -> Self {
        Self {
            scale: dpi as f32 / POINTS_PER_INCH,
        }
    }
}

/// A page rendered as a PNG image.
pub type RenderedPage = Vec<u8>;
/// A document rendered as PNG images.
pub type RenderedDocument = Vec<RenderedPage>;

/// An RGB bitmap without alpha channel.
#[derive(Clone, Debug)]
pub struct Raster(RgbImage);

impl Raster {
    /// Wrap tightly packed RGB pixel data. Returns `None` if `pixels` does not
    /// hold exactly `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        RgbImage::from_raw(width, height, pixels).map(Self)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Encode the raster as a PNG file.
    pub fn encode_png(&self) -> image::ImageResult<RenderedPage> {
        let mut output_buffer = Cursor::new(vec![]);
        self.0.write_to(&mut output_buffer, ImageFormat::Png)?;
        Ok(output_buffer.into_inner())
    }
}

/// A library capable of opening PDF files.
pub trait Renderer {
    /// A short name for log output.
    fn name(&self) -> &str;

    /// Open the document at `path`.
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn Document + 'a>>;
}

/// An open document. The handle is released when it is dropped.
pub trait Document {
    /// The number of pages in the document.
    fn page_count(&self) -> usize;

    /// Rasterize the page at the zero-based `index`.
    fn render_page(&self, index: usize, options: &RenderOptions) -> Result<Raster>;
}

/// Render every page of a document to PNG bytes, in page order.
pub fn render_document(document: &dyn Document, options: &RenderOptions) -> Result<RenderedDocument> {
    (0..document.page_count())
        .map(|index| {
            document
                .render_page(index, options)?
                .encode_png()
                .map_err(|e| Error::Encode {
                    index,
                    reason: e.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stripes {
        pages: Vec<(u32, u32)>,
    }

    impl Document for Stripes {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn render_page(&self, index: usize, options: &RenderOptions) -> Result<Raster> {
            let (width, height) = self.pages[index];
            let width = (width as f32 * options.scale).round() as u32;
            let height = (height as f32 * options.scale).round() as u32;
            let pixels = (0..width * height)
                .flat_map(|i| {
                    let v = (i % 256) as u8;
                    [v, v, v]
                })
                .collect();
            Ok(Raster::from_raw(width, height, pixels).unwrap())
        }
    }

    #[test]
    fn scale_follows_dpi() {
        assert_eq!(RenderOptions::from_dpi(72).scale, 1.0);
        assert_eq!(RenderOptions::from_dpi(144).scale, 2.0);
        assert!((RenderOptions::from_dpi(250).scale - 3.472_222).abs() < 1e-5);
        assert_eq!(RenderOptions::default(), RenderOptions::from_dpi(72));
    }

    #[test]
    fn raster_rejects_short_buffer() {
        assert!(Raster::from_raw(2, 2, vec![0; 11]).is_none());
        assert!(Raster::from_raw(2, 2, vec![0; 12]).is_some());
    }

    #[test]
    fn encoded_raster_is_rgb_png() {
        let raster = Raster::from_raw(3, 2, vec![255; 18]).unwrap();
        let png = raster.encode_png().unwrap();

        assert!(png.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
        let size = imagesize::blob_size(&png).unwrap();
        assert_eq!((size.width, size.height), (3, 2));

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn render_document_keeps_page_order() {
        let document = Stripes {
            pages: vec![(10, 20), (30, 5), (1, 1)],
        };
        let pages = render_document(&document, &RenderOptions::from_dpi(144)).unwrap();

        let sizes: Vec<_> = pages
            .iter()
            .map(|page| {
                let size = imagesize::blob_size(page).unwrap();
                (size.width, size.height)
            })
            .collect();
        assert_eq!(sizes, vec![(20, 40), (60, 10), (2, 2)]);
    }
}
