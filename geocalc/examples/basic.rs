//! Basic example demonstrating geocalc library usage.
//!
//! Run with: cargo run --example basic -- "51.503293,-0.1195" "51.473453,7.50324"

use geocalc::{GeoContext, GeoError, Unit};
use std::env;

fn main() -> Result<(), GeoError> {
    let mut args = env::args().skip(1);
    let (from, to) = match (args.next(), args.next()) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            eprintln!("Usage: cargo run --example basic -- \"lat,lng\" \"lat,lng\"");
            std::process::exit(1);
        }
    };

    let ctx = GeoContext::new(100);

    let meters = ctx.distance_from_strings(&from, &to, None)?;
    println!("Distance from {} to {}:", from, to);
    println!("{:-<50}", "");

    // Each conversion reuses the distance computed above
    for unit in Unit::ALL {
        let value = ctx.convert_unit(unit, None, Some(3))?;
        println!("{:>16}: {} {}", unit.name(), value, unit);
    }
    println!("({} m exactly)", meters);

    // Show the endpoints in both notations
    for point in [&from, &to] {
        for part in point.split(',') {
            let decimal = ctx.use_decimal(part)?;
            println!("{} = {}", decimal, ctx.decimal_to_sexagesimal(decimal));
        }
    }

    // Show cache statistics
    let stats = ctx.cache_stats();
    println!("\nCache statistics:");
    println!("  Hits: {}", stats.hit_count);
    println!("  Misses: {}", stats.miss_count);
    println!("  Hit rate: {:.1}%", stats.hit_rate() * 100.0);

    Ok(())
}
