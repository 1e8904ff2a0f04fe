use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lifka::{Block, Image, RecognizedChar, Stopwatch, StreetOcr, StreetOcrConfig, StreetOcrOutput};

/// Exit statuses -1, -2 and -3 as seen by the shell.
const EXIT_USAGE: u8 = 255;
const EXIT_DATABASE: u8 = 254;
const EXIT_DOCUMENT: u8 = 253;

#[derive(Parser)]
#[command(name = "street_ocr")]
#[command(about = "Recognize capital letters of street signs by nearest-neighbour matching", long_about = None)]
struct Cli {
    /// Document image path
    image: PathBuf,

    /// Directory holding the A.png .. Z.png prototypes
    #[arg(long, default_value = "street/font")]
    font_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<OsString>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    /// Per-character diagnostics followed by the recognized text
    Text,
    /// JSON with the text and every recognized character
    Json,
}

fn print_char(c: &RecognizedChar) {
    println!("ID char read: {} --> {} (distance {:.3})", c.class_id, c.label, c.distance);
}

fn print_output(output: &StreetOcrOutput, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Text => {
            println!();
            print!("{}", output.text);
        }
        OutputFormat::Json => {
            let json_output = serde_json::json!({
                "text": output.text,
                "lines": output.lines,
            });
            println!("{}", serde_json::to_string_pretty(&json_output)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            println!("Usage: street_ocr <image_name>");
            return ExitCode::from(EXIT_USAGE);
        }
        Err(err) => {
            // --help and --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };

    if !cli.extra.is_empty() {
        log::debug!("ignoring {} extra argument(s)", cli.extra.len());
    }
    let text = cli.format == OutputFormat::Text;

    let mut stopwatch = Stopwatch::start("StreetOCR");

    // 1. Database
    if text {
        print!("[*] Load characters: ");
    }
    let ocr = match StreetOcr::new(StreetOcrConfig::with_font_dir(cli.font_dir)) {
        Ok(ocr) => ocr,
        Err(err) => {
            log::error!("Cannot open database: {err}");
            return ExitCode::from(EXIT_DATABASE);
        }
    };
    if text {
        println!();
        println!();
    }
    stopwatch.split("Database");

    // 2. Document
    let page = match Image::open(&cli.image) {
        Ok(page) => page,
        Err(err) => {
            log::error!("Cannot open document image: {err}");
            return ExitCode::from(EXIT_DOCUMENT);
        }
    };

    // 3. Segmentation and recognition
    let mut page = Block::new(page);
    let output = match ocr.run_on_block_with(&mut page, |c| {
        if text {
            print_char(c);
        }
    }) {
        Ok(output) => output,
        Err(err) => {
            log::error!("Recognition failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    stopwatch.split("Recognition");

    if let Err(err) = print_output(&output, cli.format) {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }
    log::info!("{}", stopwatch.stats());

    ExitCode::SUCCESS
}
