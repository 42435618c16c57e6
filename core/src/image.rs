use crate::array::{ArrayShape, ImageArray};
use crate::{CoreError, Result};
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayout {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl ColorLayout {
    pub fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(ColorLayout::Gray),
            2 => Some(ColorLayout::GrayAlpha),
            3 => Some(ColorLayout::Rgb),
            4 => Some(ColorLayout::Rgba),
            _ => None,
        }
    }
}

pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub layout: ColorLayout,
}

impl ImageInfo {
    pub fn from_shape(shape: &ArrayShape) -> Result<Self> {
        let layout = ColorLayout::from_channels(shape.channels).ok_or_else(|| {
            CoreError::UnsupportedFormat(format!("{} channels", shape.channels))
        })?;
        let width = u32::try_from(shape.cols)
            .map_err(|_| CoreError::DimensionMismatch(format!("width {} exceeds u32", shape.cols)))?;
        let height = u32::try_from(shape.rows)
            .map_err(|_| CoreError::DimensionMismatch(format!("height {} exceeds u32", shape.rows)))?;
        Ok(Self {
            width,
            height,
            layout,
        })
    }

}

/// Wrap an 8-bit HWC array as an `image` buffer without reordering pixels.
pub fn to_dynamic_image(array: &ImageArray<u8>) -> Result<DynamicImage> {
    let info = ImageInfo::from_shape(&array.shape())?;
    let raw = array.as_slice().to_vec();
    let (w, h) = (info.width, info.height);

    let img = match info.layout {
        ColorLayout::Gray => GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
        ColorLayout::GrayAlpha => {
            GrayAlphaImage::from_raw(w, h, raw).map(DynamicImage::ImageLumaA8)
        }
        ColorLayout::Rgb => RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
        ColorLayout::Rgba => RgbaImage::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
    };
    img.ok_or_else(|| {
        CoreError::DimensionMismatch(format!("buffer does not fit a {w}x{h} image"))
    })
}

/// Image view of `array` for the channel counts `image` can represent, or
/// `None` for any other count.
pub fn image_view(array: &ImageArray<u8>) -> Result<Option<DynamicImage>> {
    match ColorLayout::from_channels(array.shape().channels) {
        Some(_) => to_dynamic_image(array).map(Some),
        None => Ok(None),
    }
}
