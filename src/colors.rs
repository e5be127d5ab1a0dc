use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use palette::white_point::D65;
use palette::{FromColor, Lab, Srgb};

use crate::bezier::BezierCurve;
use crate::error::PaletteError;
use crate::scale::Scale;

pub type Color = Srgb<u8>;
pub type LabColor = Lab<D65, f64>;

/// Control points of the default gradient, dark blue through magenta to amber.
pub const ANCHOR_COLORS: [Color; 5] = [
    Srgb::new(0x00, 0x3f, 0x5c),
    Srgb::new(0x58, 0x50, 0x8d),
    Srgb::new(0xbc, 0x50, 0x90),
    Srgb::new(0xff, 0x63, 0x61),
    Srgb::new(0xff, 0xa6, 0x00),
];

static DEFAULT_SCALE: LazyLock<Scale> = LazyLock::new(|| {
    let curve = BezierCurve::new(&ANCHOR_COLORS).expect("anchor set is non-empty");
    Scale::new(curve).correct_lightness(true)
});

/// Returns `num_colors` colors sampled evenly along the lightness-corrected
/// Bezier gradient through [`ANCHOR_COLORS`].
pub fn get_palette(num_colors: usize) -> Vec<Color> {
    DEFAULT_SCALE.colors(num_colors)
}

pub fn to_lab(color: Color) -> LabColor {
    LabColor::from_color(color.into_format::<f64>())
}

/// CIE L* of the color, 0 for black and 100 for white.
pub fn lightness(color: Color) -> f64 {
    to_lab(color).l
}

// Out-of-gamut Lab points are clipped to the sRGB cube.
pub(crate) fn lab_to_rgb(lab: LabColor) -> Srgb<f64> {
    Srgb::<f64>::from_color(lab)
}

pub(crate) fn quantize(rgb: Srgb<f64>) -> Color {
    Srgb::new(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Hex notation for a [`Color`], `#rrggbb` when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub Color);

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

impl FromStr for HexColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaletteError::InvalidHex(s.to_string());
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let component = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());

        let color = match digits.len() {
            6 => Srgb::new(component(0..2)?, component(2..4)?, component(4..6)?),
            // #rgb shorthand doubles every digit
            3 => Srgb::new(component(0..1)? * 0x11, component(1..2)? * 0x11, component(2..3)? * 0x11),
            _ => return Err(invalid()),
        };
        Ok(HexColor(color))
    }
}

impl From<HexColor> for Color {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

pub fn to_hex(color: Color) -> String {
    HexColor(color).to_string()
}

pub fn parse_hex(hex: &str) -> Result<Color, PaletteError> {
    hex.parse::<HexColor>().map(Color::from)
}
