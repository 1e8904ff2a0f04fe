use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lifka::{
    estimate_lines_x_height, output_path, strokes_height, strokes_width, Block, Image, OcrError,
};

const NAME: &str = "lifka";
const VERSION: &str = "1.0";

/// Exit status -1 as seen by the shell.
const EXIT_FAILURE: u8 = 255;

const USAGE: &str = "
Usage: lifka [option] [img]
Options:
-h    | --help                       Print this help
-v    | --version                    Print the script version
-i    | --information                Print information about image
-GRAY | --grayscale                  Get the gray scale image
-RGB  | --RGB                        Get the RGB image
-BW   | --blackwhite                 Get the black and white image
-s    | --scale  [width] [height]    Scale image";

/// Only the first argument selects the action, as in `lifka -v anything`.
#[derive(Parser, Debug)]
#[command(name = NAME, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(value_enum, allow_hyphen_values = true)]
    option: Opt,

    /// Input image path
    #[arg(allow_hyphen_values = true)]
    image: Option<PathBuf>,

    /// Width and height for --scale; ignored by the other options
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opt {
    #[value(name = "-h", alias = "--help")]
    Help,
    #[value(name = "-v", alias = "--version")]
    Version,
    #[value(name = "-i", alias = "--information")]
    Information,
    #[value(name = "-GRAY", alias = "--grayscale")]
    Gray,
    #[value(name = "-RGB", alias = "--RGB")]
    Rgb,
    #[value(name = "-BW", alias = "--blackwhite")]
    BlackWhite,
    #[value(name = "-s", alias = "--scale")]
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Gray,
    Rgb,
    BlackWhite,
}

impl Conversion {
    fn suffix(self) -> &'static str {
        match self {
            Conversion::Gray => "gray",
            Conversion::Rgb => "RGB",
            Conversion::BlackWhite => "BW",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Help,
    Version,
    Information(PathBuf),
    Convert(PathBuf, Conversion),
    Scale { image: PathBuf, width: u32, height: u32 },
}

/// `None` when the arguments do not describe a valid action.
fn parse_action<I: IntoIterator<Item = OsString>>(args: I) -> Option<Action> {
    let cli = Cli::try_parse_from(args).ok()?;

    let image = match cli.option {
        Opt::Help => return Some(Action::Help),
        Opt::Version => return Some(Action::Version),
        _ => cli.image?,
    };
    let action = match cli.option {
        Opt::Help | Opt::Version => return None,
        Opt::Information => Action::Information(image),
        Opt::Gray => Action::Convert(image, Conversion::Gray),
        Opt::Rgb => Action::Convert(image, Conversion::Rgb),
        Opt::BlackWhite => Action::Convert(image, Conversion::BlackWhite),
        Opt::Scale => {
            let [width, height] = cli.rest.as_slice() else {
                return None;
            };
            let width: u32 = width.parse().ok().filter(|&w| w > 0)?;
            let height: u32 = height.parse().ok().filter(|&h| h > 0)?;
            return Some(Action::Scale { image, width, height });
        }
    };
    if !cli.rest.is_empty() {
        log::debug!("ignoring {} extra argument(s)", cli.rest.len());
    }
    Some(action)
}

fn usage() {
    println!("{USAGE}");
}

fn print_information(path: &Path) -> Result<(), OcrError> {
    let img = Image::open(path)?;
    let gray = img.to_gray8();

    println!("width: {}", img.width());
    println!("height: {}", img.height());
    println!("pixels: {}", img.size());
    println!("strokes width: {}", strokes_width(&gray));
    println!("strokes height: {}", strokes_height(&gray));
    println!("lines height: {}", estimate_lines_x_height(&gray));
    Ok(())
}

fn convert(path: &Path, conversion: Conversion) -> Result<PathBuf, OcrError> {
    let block = Block::new(Image::open(path)?);
    let result = match conversion {
        Conversion::Gray => block.get_gray(),
        Conversion::Rgb => block.get_rgb(),
        Conversion::BlackWhite => block.get_bw(),
    };
    let out = output_path(path, conversion.suffix());
    result.save_png(&out)?;
    Ok(out)
}

fn scale(path: &Path, width: u32, height: u32) -> Result<PathBuf, OcrError> {
    let mut img = Image::open(path)?;
    img.scale_to_size(width, height)?;
    let out = output_path(path, &format!("{width}x{height}"));
    img.save_png(&out)?;
    Ok(out)
}

fn run(action: Action) -> Result<(), OcrError> {
    match action {
        Action::Help => usage(),
        Action::Version => println!("{NAME} {VERSION}"),
        Action::Information(path) => print_information(&path)?,
        Action::Convert(path, conversion) => {
            let out = convert(&path, conversion)?;
            log::info!("wrote {}", out.display());
        }
        Action::Scale { image, width, height } => {
            let out = scale(&image, width, height)?;
            log::info!("wrote {}", out.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(action) = parse_action(std::env::args_os()) else {
        usage();
        return ExitCode::from(EXIT_FAILURE);
    };

    match run(action) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                OcrError::Open { .. } | OcrError::EmptyImage => log::error!("Cannot open image: {err}"),
                _ => log::error!("{err}"),
            }
            usage();
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
