use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geocalc::{GeoContext, GeoContextBuilder, Unit};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// Geographic distance and coordinate notation tool
#[derive(Parser)]
#[command(name = "geocalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum entries per conversion cache [env: GEOCALC_CACHE_SIZE]
    #[arg(short, long, global = true)]
    cache_size: Option<u64>,

    /// Decimal places for converted values [env: GEOCALC_PRECISION]
    #[arg(short, long, global = true)]
    precision: Option<u32>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distance between two "lat,lng" points
    Distance {
        /// Start point, e.g. "51.503293,-0.1195" or "51° 30' 11.85\" N,0° 7' 10.2\" W"
        #[arg(allow_hyphen_values = true)]
        from: String,

        /// End point
        #[arg(allow_hyphen_values = true)]
        to: String,

        /// Round the distance to a multiple of this many meters [env: GEOCALC_ACCURACY]
        #[arg(short, long)]
        accuracy: Option<u32>,

        /// Output unit (m, km, cm, mm, mi, sm, ft, in, yd)
        #[arg(short, long, default_value = "m")]
        unit: Unit,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Convert a distance in meters to another unit
    Convert {
        /// Distance in meters
        meters: f64,

        /// Target unit (m, km, cm, mm, mi, sm, ft, in, yd)
        #[arg(short, long)]
        unit: Unit,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Convert decimal degrees to sexagesimal notation
    ToSexagesimal {
        /// Decimal degrees, e.g. 51.503293
        #[arg(allow_hyphen_values = true)]
        decimal: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Convert sexagesimal notation to decimal degrees
    ToDecimal {
        /// Sexagesimal coordinate, e.g. "51° 30' 11.86\" N"
        text: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Compute distances for point pairs in a CSV file
    Batch {
        /// Input CSV file
        input: PathBuf,

        /// Output file (defaults to <input>_distance.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column holding the start point ("lat,lng")
        #[arg(long, default_value = "from")]
        from_col: String,

        /// Column holding the end point ("lat,lng")
        #[arg(long, default_value = "to")]
        to_col: String,

        /// Round distances to a multiple of this many meters [env: GEOCALC_ACCURACY]
        #[arg(short, long)]
        accuracy: Option<u32>,

        /// Output unit (m, km, cm, mm, mi, sm, ft, in, yd)
        #[arg(short, long, default_value = "m")]
        unit: Unit,
    },

    /// List supported distance units
    Units,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let ctx = build_context(cli.cache_size, cli.precision)?;

    match cli.command {
        Commands::Distance {
            from,
            to,
            accuracy,
            unit,
            json,
        } => commands::distance::run(&ctx, &from, &to, accuracy, unit, json),
        Commands::Convert { meters, unit, json } => {
            commands::convert::run(&ctx, meters, unit, json)
        }
        Commands::ToSexagesimal { decimal, json } => {
            commands::notation::to_sexagesimal(&ctx, decimal, json)
        }
        Commands::ToDecimal { text, json } => commands::notation::to_decimal(&ctx, &text, json),
        Commands::Batch {
            input,
            output,
            from_col,
            to_col,
            accuracy,
            unit,
        } => commands::batch::run(&ctx, input, output, &from_col, &to_col, accuracy, unit),
        Commands::Units => commands::units::run(),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "geocalc=debug" } else { "geocalc=warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Environment first, then command-line flags on top.
fn build_context(cache_size: Option<u64>, precision: Option<u32>) -> Result<GeoContext> {
    let mut builder = GeoContextBuilder::from_env().context("Invalid GEOCALC_* environment")?;

    if let Some(size) = cache_size {
        builder = builder.cache_size(size);
    }
    if let Some(places) = precision {
        builder = builder.default_precision(places);
    }

    Ok(builder.build())
}
