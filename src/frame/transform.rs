//! Center crop and rotation of annotated frames.

use image::DynamicImage;

use super::orientation::{DeviceOrientation, Rotation};
use crate::error::StudioError;

/// An axis-aligned pixel rectangle inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The `size × size` square centred on a `width × height` image, clipped to
/// the image bounds. `None` when the clipped region is empty.
pub fn center_crop_rect(width: u32, height: u32, size: u32) -> Option<CropRect> {
    let (x0, x1) = clip_axis(width, size)?;
    let (y0, y1) = clip_axis(height, size)?;
    Some(CropRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    })
}

fn clip_axis(extent: u32, size: u32) -> Option<(u32, u32)> {
    let start = (i64::from(extent) - i64::from(size)).div_euclid(2);
    let end = start + i64::from(size);
    let lo = start.max(0);
    let hi = end.min(i64::from(extent));
    if hi <= lo {
        return None;
    }
    Some((lo as u32, hi as u32))
}

/// Apply a rotation to the pixels.
pub fn rotate(image: DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::None => image,
        Rotation::Clockwise90 => image.rotate90(),
        Rotation::Half => image.rotate180(),
        Rotation::CounterClockwise90 => image.rotate270(),
    }
}

/// Decode an annotated frame from its encoded bytes.
pub fn decode_frame(bytes: &[u8]) -> Result<DynamicImage, StudioError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Center-crop to `size` and rotate for the current orientation.
pub fn render_frame(
    image: &DynamicImage,
    size: u32,
    orientation: DeviceOrientation,
) -> Result<DynamicImage, StudioError> {
    let rect = center_crop_rect(image.width(), image.height(), size).ok_or(
        StudioError::EmptyCrop {
            width: image.width(),
            height: image.height(),
            size,
        },
    )?;
    let cropped = image.crop_imm(rect.x, rect.y, rect.width, rect.height);
    Ok(match orientation.rotation() {
        Some(rotation) => rotate(cropped, rotation),
        None => cropped,
    })
}
