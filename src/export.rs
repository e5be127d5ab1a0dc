use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use tracing::debug;

use crate::colors::{Color, HexColor};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `#rrggbb` value per line
    #[default]
    Hex,
    /// Pretty-printed array of palette entries
    Json,
    /// Header row followed by one row per palette entry
    Csv,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    pub index: usize,
    #[serde_as(as = "DisplayFromStr")]
    pub hex: HexColor,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PaletteEntry {
    pub fn new(index: usize, color: Color) -> Self {
        Self {
            index,
            hex: HexColor(color),
            red: color.red,
            green: color.green,
            blue: color.blue,
        }
    }
}

pub fn palette_entries(colors: &[Color]) -> Vec<PaletteEntry> {
    colors
        .iter()
        .enumerate()
        .map(|(index, color)| PaletteEntry::new(index, *color))
        .collect()
}

pub fn write_palette<W: Write>(colors: &[Color], format: OutputFormat, mut writer: W) -> Result<()> {
    debug!(count = colors.len(), ?format, "writing palette");
    match format {
        OutputFormat::Hex => {
            for color in colors {
                writeln!(writer, "{}", HexColor(*color))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &palette_entries(colors))?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut writer);
            for entry in palette_entries(colors) {
                csv_writer.serialize(entry)?;
            }
            csv_writer.flush()?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_to_file(colors: &[Color], format: OutputFormat, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_palette(colors, format, BufWriter::new(file))
}
