//! Image handle over the pure Rust `image` crate

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, GrayImage, ImageFormat, RgbImage};

use crate::error::{OcrError, Result};
use crate::geometry::Rect;

/// Decoded pixel data. Blocks share one through `Arc<Image>`.
#[derive(Clone, Debug)]
pub struct Image {
    image: DynamicImage,
}

impl Image {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn from_gray(gray: GrayImage) -> Self {
        Self::new(DynamicImage::ImageLuma8(gray))
    }

    pub fn from_rgb(rgb: RgbImage) -> Self {
        Self::new(DynamicImage::ImageRgb8(rgb))
    }

    /// Decodes an image file, guessing the format from its content.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| OcrError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        if image.width() == 0 || image.height() == 0 {
            return Err(OcrError::EmptyImage);
        }
        log::debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());
        Ok(Self::new(image))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Number of pixels.
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    pub fn to_gray8(&self) -> GrayImage {
        self.image.to_luma8()
    }

    pub fn to_rgb8(&self) -> RgbImage {
        self.image.to_rgb8()
    }

    /// Copies out the part of the image under `rect`, clamped to the bounds.
    pub fn crop(&self, rect: &Rect) -> Image {
        Image::new(self.image.crop_imm(rect.x, rect.y, rect.width, rect.height))
    }

    /// Resamples in place to exactly `width` x `height` with bilinear filtering.
    pub fn scale_to_size(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(OcrError::InvalidSize { width, height });
        }
        self.image = self.image.resize_exact(width, height, FilterType::Triangle);
        Ok(())
    }

    /// Encodes as PNG whatever the extension of `path`.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image.save_with_format(path.as_ref(), ImageFormat::Png)?;
        log::debug!("saved {}", path.as_ref().display());
        Ok(())
    }
}

/// Output name for a derived image: `<path>_<suffix>.png`, keeping the
/// original name (extension included) as the stem.
pub fn output_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push("_");
    name.push(suffix);
    name.push(".png");
    PathBuf::from(name)
}
