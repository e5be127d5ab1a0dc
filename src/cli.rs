use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::bezier::BezierCurve;
use crate::colors::{parse_hex, to_hex, Color, ANCHOR_COLORS};
use crate::error::Result;
use crate::export::{write_palette, write_to_file, OutputFormat};
use crate::scale::Scale;

/// Program to generate evenly distributed color palettes
#[derive(Parser, Debug, Clone)]
#[command(name = "palette_tool", version, about, long_about = None)]
pub struct Cli {
    /// The number of colors to sample from the gradient
    #[arg(short, long, default_value_t = 5)]
    pub num_colors: usize,

    /// Comma separated hex colors the gradient is anchored on
    #[arg(short, long, value_delimiter = ',', default_values_t = default_anchors())]
    pub anchors: Vec<String>,

    /// Sample the raw curve without evening out its lightness
    #[arg(long)]
    pub no_correct_lightness: bool,

    /// How the palette is written
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,

    /// File the palette is written to, stdout when omitted
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

fn default_anchors() -> Vec<String> {
    ANCHOR_COLORS.iter().copied().map(to_hex).collect()
}

pub fn build_palette(cli: &Cli) -> Result<Vec<Color>> {
    let anchors = cli
        .anchors
        .iter()
        .map(|hex| parse_hex(hex))
        .collect::<Result<Vec<_>>>()?;
    let scale = Scale::new(BezierCurve::new(&anchors)?).correct_lightness(!cli.no_correct_lightness);
    Ok(scale.colors(cli.num_colors))
}

pub fn run(cli: Cli) -> Result<()> {
    let colors = build_palette(&cli)?;
    match &cli.output {
        Some(path) => {
            write_to_file(&colors, cli.format, path)?;
            info!(count = colors.len(), path = %path.display(), "palette written");
        }
        None => write_palette(&colors, cli.format, io::stdout().lock())?,
    }
    Ok(())
}
