//! `wordcloud` - render the most frequent words of a text file along a shape.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use shaped_wordcloud::{
    load_font, CanvasSize, FontRasterizer, FontSource, Rgba, Shape, WordCloudGenerator,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const JPEG_QUALITY: u8 = 100;

/// Generate word cloud from text file
#[derive(Parser, Debug)]
#[command(name = "wordcloud")]
#[command(version)]
struct Args {
    /// Input text file (.txt)
    input: PathBuf,

    /// Output .jpg file
    #[arg(short, long, default_value = "output.jpg")]
    output: PathBuf,

    /// Cloud shape: spiral (maximum words: 50), circle (maximum words: 40),
    /// square (maximum words: 40), triangle (maximum words: 36),
    /// heart (maximum words: 48), star (maximum words: 50)
    #[arg(short, long, default_value = "spiral", value_parser = parse_shape)]
    shape: Shape,

    /// Image width in pixels (minimum 100)
    #[arg(short = 'W', long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels (minimum 100)
    #[arg(short = 'H', long, default_value_t = 600)]
    height: u32,

    /// Seed for the color choice (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Font file to render with (defaults to the installed bold Arial)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Also write the cloud as SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn parse_shape(value: &str) -> Result<Shape, String> {
    value.parse::<Shape>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version are not failures.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if !is_text_file(&args.input) {
        bail!(
            "Input file must have .txt extension, got: {}",
            args.input.display()
        );
    }
    let size = CanvasSize::new(args.width, args.height)?;

    let bytes = fs::read(&args.input)
        .with_context(|| format!("Can't open file {}", args.input.display()))?;
    if bytes.is_empty() {
        bail!("File is empty: {}", args.input.display());
    }
    let text = String::from_utf8_lossy(&bytes);

    let source = args.font.map(FontSource::File).unwrap_or_default();
    let loaded = load_font(&source).context("Can't load font")?;

    let mut builder = WordCloudGenerator::builder()
        .shape(args.shape)
        .font_family(loaded.family.clone());
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut generator = builder.build();
    generator.process_text(&text);

    let mut canvas = FontRasterizer::new(loaded.font, size, Rgba::WHITE)?;
    let cloud = generator.draw(&mut canvas);
    info!(
        shape = %cloud.shape,
        words = cloud.words.len(),
        font = %loaded.family,
        "rendered word cloud"
    );

    let output = jpeg_output_path(&args.output);
    if output != args.output {
        info!("File's extension was changed to .jpg: {}", output.display());
    }
    let jpeg = canvas.encode_jpeg(JPEG_QUALITY)?;
    fs::write(&output, jpeg)
        .with_context(|| format!("Can't save an image {}", output.display()))?;
    info!("Saved {}", output.display());

    if let Some(svg_path) = &args.svg {
        fs::write(svg_path, cloud.to_svg(Rgba::WHITE))
            .with_context(|| format!("Can't save SVG {}", svg_path.display()))?;
        info!("Saved {}", svg_path.display());
    }

    Ok(())
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Keeps `.jpg`/`.jpeg` (any case), otherwise swaps or appends `.jpg`.
fn jpeg_output_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
            path.to_path_buf()
        }
        _ => path.with_extension("jpg"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["wordcloud", "book.txt"]).unwrap();
        assert_eq!(args.output, PathBuf::from("output.jpg"));
        assert_eq!(args.shape, Shape::Spiral);
        assert_eq!((args.width, args.height), (800, 600));
        assert!(args.seed.is_none() && args.font.is_none() && args.svg.is_none());
    }

    #[test]
    fn shape_is_case_insensitive() {
        let args =
            Args::try_parse_from(["wordcloud", "book.txt", "--shape", "HEART", "-W", "300"])
                .unwrap();
        assert_eq!(args.shape, Shape::Heart);
        assert_eq!(args.width, 300);
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let err = Args::try_parse_from(["wordcloud", "book.txt", "-s", "hexagon"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.use_stderr());
    }

    #[test]
    fn missing_input_is_rejected() {
        let err = Args::try_parse_from(["wordcloud"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn help_is_not_an_error_exit() {
        let err = Args::try_parse_from(["wordcloud", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn text_extension_check() {
        assert!(is_text_file(Path::new("notes.txt")));
        assert!(is_text_file(Path::new("dir/NOTES.TXT")));
        assert!(!is_text_file(Path::new("notes.md")));
        assert!(!is_text_file(Path::new("txt")));
    }

    #[test]
    fn output_extension_is_normalized() {
        assert_eq!(jpeg_output_path(Path::new("a.jpg")), PathBuf::from("a.jpg"));
        assert_eq!(jpeg_output_path(Path::new("a.JPEG")), PathBuf::from("a.JPEG"));
        assert_eq!(jpeg_output_path(Path::new("a.png")), PathBuf::from("a.jpg"));
        assert_eq!(jpeg_output_path(Path::new("cloud")), PathBuf::from("cloud.jpg"));
        assert_eq!(
            jpeg_output_path(Path::new("out/cloud.v2.bmp")),
            PathBuf::from("out/cloud.v2.jpg")
        );
    }

    #[test]
    fn run_rejects_bad_input_before_touching_fonts() {
        let args = Args::try_parse_from(["wordcloud", "book.md"]).unwrap();
        assert!(run(args).is_err());

        let args = Args::try_parse_from(["wordcloud", "book.txt", "-H", "50"]).unwrap();
        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("minimum image size"));
    }
}
