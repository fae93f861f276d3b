/*!
Render every page of a PDF document to a PNG image.

Pages are rasterized at a chosen resolution and written as
`page-001.png`, `page-002.png`, ... into an output directory.

# Backends

| Backend | Library | Setup |
|---------|---------|-------|
| pdfium | [PDFium](https://pdfium.googlesource.com/pdfium/) | shared library in the working directory, on the system path, or given via `PDFIUM_LIB_PATH` |

Other rendering libraries can be plugged in by implementing [`Renderer`] and
[`Document`].

```no_run
use pdf2png::{convert, ConvertOptions, PdfiumRenderer};
use std::path::Path;

let renderer = PdfiumRenderer::bind(None)?;
let report = convert(&renderer, Path::new("paper.pdf"), &ConvertOptions::default())?;
println!("wrote {} pages", report.page_count);
# Ok::<(), pdf2png::Error>(())
```
*/

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod convert;
mod error;
mod output;
mod renderer;

pub use convert::*;
pub use error::{Error, Result};
pub use output::*;
pub use renderer::*;
