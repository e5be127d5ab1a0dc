pub mod bezier;
pub mod cli;
pub mod colors;
pub mod error;
pub mod export;
pub mod scale;

pub use colors::{get_palette, Color, HexColor, ANCHOR_COLORS};
pub use error::PaletteError;
pub use scale::Scale;
