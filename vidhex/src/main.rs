use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vidhex::ConversionConfig;

#[derive(Parser, Debug)]
#[command(name = "vidhex")]
#[command(about = "Convert video files to hex byte arrays for embedded systems")]
struct Args {
    /// Input video file path
    input: PathBuf,

    /// Output file path (derived from the input name when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target width
    #[arg(short, long, default_value = "128")]
    width: u32,

    /// Target height
    #[arg(short = 'H', long, default_value = "64")]
    height: u32,

    /// Target framerate
    #[arg(short, long, default_value = "10")]
    fps: u32,

    /// Keep color (default is grayscale)
    #[arg(long)]
    color: bool,

    /// Output format: c_array, plain_hex or python_list
    #[arg(long, default_value = "c_array")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Resolve the format before any decoding happens
    let config = ConversionConfig::new(args.width, args.height, args.fps)
        .with_grayscale(!args.color)
        .with_format_selector(&args.format)?;

    let summary = vidhex::convert_file(&args.input, args.output.as_deref(), &config)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    println!("Hex data saved to: {}", summary.output_path.display());
    println!();
    println!("{}", summary.report);
    println!();
    println!("Conversion completed successfully!");
    Ok(())
}
