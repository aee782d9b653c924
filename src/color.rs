//! Nearest reference color classification
//!
//! Every luminary carries an RGB triple; its human-readable color is whichever
//! of five reference colors lies closest to that triple in RGB space.

use std::fmt;
use serde::{Serialize, Deserialize};

/// An 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance to another triple.
    pub fn distance_squared(&self, other: &Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.r, self.g, self.b)
    }
}

/// The classification targets, in tie-break order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceColor {
    Orange,
    Red,
    Green,
    Blue,
    White,
}

impl ReferenceColor {
    /// All reference colors in tie-break order
    pub fn all() -> &'static [ReferenceColor] {
        &[
            ReferenceColor::Orange,
            ReferenceColor::Red,
            ReferenceColor::Green,
            ReferenceColor::Blue,
            ReferenceColor::White,
        ]
    }

    pub fn rgb(&self) -> Rgb {
        match self {
            ReferenceColor::Orange => Rgb::new(255, 165, 0),
            ReferenceColor::Red => Rgb::new(255, 0, 0),
            ReferenceColor::Green => Rgb::new(0, 255, 0),
            ReferenceColor::Blue => Rgb::new(0, 0, 255),
            ReferenceColor::White => Rgb::new(255, 255, 255),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReferenceColor::Orange => "orange",
            ReferenceColor::Red => "red",
            ReferenceColor::Green => "green",
            ReferenceColor::Blue => "blue",
            ReferenceColor::White => "white",
        }
    }

    /// Nearest reference color to `rgb`.
    ///
    /// Equidistant candidates resolve to the one listed first in [`ReferenceColor::all`].
    pub fn nearest(rgb: Rgb) -> ReferenceColor {
        let mut best = ReferenceColor::Orange;
        let mut best_distance = u32::MAX;

        for &candidate in ReferenceColor::all() {
            let distance = rgb.distance_squared(&candidate.rgb());
            // Strict comparison keeps the earlier color on ties
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }

        best
    }
}

impl fmt::Display for ReferenceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of the reference color nearest to `rgb`.
pub fn classify(rgb: Rgb) -> &'static str {
    ReferenceColor::nearest(rgb).name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches() {
        assert_eq!(classify(Rgb::new(255, 165, 0)), "orange");
        assert_eq!(classify(Rgb::new(255, 0, 0)), "red");
        assert_eq!(classify(Rgb::new(0, 255, 0)), "green");
        assert_eq!(classify(Rgb::new(0, 0, 255)), "blue");
        assert_eq!(classify(Rgb::new(255, 255, 255)), "white");
    }

    #[test]
    fn test_nearest_neighbour() {
        assert_eq!(classify(Rgb::new(240, 150, 20)), "orange");
        assert_eq!(classify(Rgb::new(200, 30, 10)), "red");
        assert_eq!(classify(Rgb::new(10, 200, 40)), "green");
        assert_eq!(classify(Rgb::new(20, 10, 180)), "blue");
        assert_eq!(classify(Rgb::new(230, 230, 240)), "white");
        // Black is closest to red, green and blue equally; red is listed first
        assert_eq!(classify(Rgb::new(0, 0, 0)), "red");
    }

    #[test]
    fn test_tie_break_prefers_earlier_color() {
        // Orange and red differ only on the green axis; the midpoint is 82.5
        assert_eq!(classify(Rgb::new(255, 82, 0)), "red");
        assert_eq!(classify(Rgb::new(255, 83, 0)), "orange");

        // Green and blue are equidistant from (0, 128, 128)
        let rgb = Rgb::new(0, 128, 128);
        assert_eq!(
            rgb.distance_squared(&ReferenceColor::Green.rgb()),
            rgb.distance_squared(&ReferenceColor::Blue.rgb())
        );
        assert_eq!(ReferenceColor::nearest(rgb), ReferenceColor::Green);
    }

    #[test]
    fn test_rgb_conversions() {
        let rgb = Rgb::from([1, 2, 3]);
        assert_eq!(rgb, Rgb::from((1, 2, 3)));
        assert_eq!(rgb.to_array(), [1, 2, 3]);
        assert_eq!(rgb.to_string(), "[1, 2, 3]");
    }
}
