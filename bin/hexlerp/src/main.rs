//! Interpolate two hex colors in CIE-Lab from the command line.

use anyhow::Context;
use clap::Parser;
use hexlerp::{hex, surface::parse_amount};
use tracing_subscriber::EnvFilter;

/// Linearly interpolate two hex colors in the CIE-Lab color space.
#[derive(Parser, Debug)]
#[command(name = "hexlerp", version, about)]
struct Args {
    /// Start hex color, e.g. #FF0000
    hex1: String,

    /// End hex color, e.g. #0000FF
    hex2: String,

    /// Interpolation amount; 0 gives the start color, 1 the end color
    #[arg(
        short = 't',
        long,
        env = "HEXLERP_AMOUNT",
        default_value_t = 0.5,
        value_parser = parse_amount,
        allow_negative_numbers = true
    )]
    amount: f64,

    /// Print this many evenly spaced colors instead of a single one;
    /// the amount is ignored
    #[arg(long)]
    steps: Option<usize>,

    /// Omit the leading `#`
    #[arg(long)]
    no_prefix: bool,

    /// Also print the CIE-Lab components of each color
    #[arg(long)]
    lab: bool,

    /// Increase logging verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    hex::decode(&args.hex1).with_context(|| format!("invalid start color {:?}", args.hex1))?;
    hex::decode(&args.hex2).with_context(|| format!("invalid end color {:?}", args.hex2))?;

    let prefix = !args.no_prefix;
    let colors = match args.steps {
        Some(steps) => hexlerp::gradient(&args.hex1, &args.hex2, steps, prefix)?,
        None => vec![hexlerp::lerp_hex(&args.hex1, &args.hex2, args.amount, prefix)?],
    };

    tracing::info!(
        hex1 = %args.hex1,
        hex2 = %args.hex2,
        count = colors.len(),
        "interpolated"
    );

    for color in colors {
        if args.lab {
            println!("{color} {}", hexlerp::hex_to_lab(&color)?);
        } else {
            println!("{color}");
        }
    }

    Ok(())
}
