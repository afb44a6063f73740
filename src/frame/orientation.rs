//! Device orientation and the single orientation → rotation mapping.

use std::f64::consts::FRAC_PI_2;

use strum::{Display, EnumIter, EnumString};

/// Physical orientation reported by the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum DeviceOrientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    #[default]
    Unknown,
}

/// A rotation in whole quarter turns, clockwise in y-down image space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise90,
    Half,
    CounterClockwise90,
}

impl DeviceOrientation {
    /// Rotation to apply for this orientation. `None` for orientations that
    /// carry no rotation (flat or unknown): callers keep whatever they had.
    pub fn rotation(self) -> Option<Rotation> {
        match self {
            Self::Portrait => Some(Rotation::None),
            Self::PortraitUpsideDown => Some(Rotation::Half),
            Self::LandscapeLeft => Some(Rotation::Clockwise90),
            Self::LandscapeRight => Some(Rotation::CounterClockwise90),
            Self::FaceUp | Self::FaceDown | Self::Unknown => None,
        }
    }
}

impl Rotation {
    /// Signed quarter turns in `[-1, 2]`.
    pub fn quarter_turns(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Clockwise90 => 1,
            Self::Half => 2,
            Self::CounterClockwise90 => -1,
        }
    }

    /// Angle for a drawing context, in radians.
    pub fn radians(self) -> f64 {
        f64::from(self.quarter_turns()) * FRAC_PI_2
    }

    /// Angle for the live preview connection, in degrees.
    ///
    /// The preview's zero points along the sensor's landscape axis, so it
    /// leads the drawing angle by 90° and is normalised into (-180, 180].
    pub fn preview_degrees(self) -> f64 {
        let degrees = 90 + self.quarter_turns() * 90;
        let normalised = if degrees > 180 { degrees - 360 } else { degrees };
        f64::from(normalised)
    }
}
