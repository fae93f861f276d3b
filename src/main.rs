use anyhow::{Context, Result};
use clap::Parser;
use pdf2png::{convert, ConvertOptions, PdfiumRenderer, DEFAULT_DPI, DEFAULT_OUT_DIR};
use std::path::PathBuf;

/// Render every page of a PDF to a PNG image.
#[derive(Parser, Debug)]
#[command(name = "pdf2png", version)]
struct Cli {
    /// The PDF file to convert.
    pdf: PathBuf,

    /// Directory for the page images, created if missing.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Rendering resolution in dots per inch.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_DPI,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    dpi: u32,

    /// The pdfium shared library, or the directory containing it.
    #[arg(long, value_name = "PATH", env = "PDFIUM_LIB_PATH")]
    pdfium_lib: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let options = ConvertOptions {
        out_dir: cli.out,
        dpi: cli.dpi,
    };

    let renderer = PdfiumRenderer::bind(cli.pdfium_lib.as_deref())
        .context("unable to load the pdf renderer")?;

    convert(&renderer, &cli.pdf, &options)
        .with_context(|| format!("unable to convert {}", cli.pdf.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_library() {
        let cli = Cli::try_parse_from(["pdf2png", "in.pdf"]).unwrap();
        let defaults = ConvertOptions::default();
        assert_eq!(cli.out, defaults.out_dir);
        assert_eq!(cli.dpi, defaults.dpi);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["pdf2png", "in.pdf", "--out", "x/y", "--dpi", "300"]).unwrap();
        assert_eq!(cli.pdf, PathBuf::from("in.pdf"));
        assert_eq!(cli.out, PathBuf::from("x/y"));
        assert_eq!(cli.dpi, 300);
    }

    #[test]
    fn rejects_bad_dpi() {
        assert!(Cli::try_parse_from(["pdf2png", "in.pdf", "--dpi", "0"]).is_err());
        assert!(Cli::try_parse_from(["pdf2png", "in.pdf", "--dpi", "-5"]).is_err());
        assert!(Cli::try_parse_from(["pdf2png", "in.pdf", "--dpi", "high"]).is_err());
    }

    #[test]
    fn requires_input() {
        assert!(Cli::try_parse_from(["pdf2png"]).is_err());
    }
}
