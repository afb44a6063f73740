//! Frame handling for the emotion screen: orientation mapping, decode, crop, rotate.

pub mod orientation;
pub mod transform;

pub use orientation::{DeviceOrientation, Rotation};
pub use transform::{center_crop_rect, decode_frame, render_frame, CropRect};
