use anyhow::{Context, Result};
use geocalc::{GeoContext, Point, Unit};
use serde::Serialize;

#[derive(Serialize)]
struct DistanceResponse {
    from: Point,
    to: Point,
    meters: u64,
    accuracy: u32,
    unit: Unit,
    distance: f64,
}

pub fn run(
    ctx: &GeoContext,
    from: &str,
    to: &str,
    accuracy: Option<u32>,
    unit: Unit,
    json: bool,
) -> Result<()> {
    let from = ctx
        .parse_point(from)
        .with_context(|| format!("Invalid start point: {}", from))?;
    let to = ctx
        .parse_point(to)
        .with_context(|| format!("Invalid end point: {}", to))?;

    let meters = ctx.distance(&from, &to, accuracy);

    // Converts the distance retained by the call above
    let distance = ctx
        .convert_unit(unit, None, None)
        .context("Failed to convert distance")?;

    if json {
        let response = DistanceResponse {
            from,
            to,
            meters,
            accuracy: accuracy.unwrap_or(ctx.default_accuracy()),
            unit,
            distance,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{} {}", distance, unit);
    }

    Ok(())
}
