use anyhow::Result;
use geocalc::{units, GeoContext, Unit};
use serde::Serialize;

#[derive(Serialize)]
struct ConvertResponse {
    meters: f64,
    unit: Unit,
    value: f64,
}

pub fn run(ctx: &GeoContext, meters: f64, unit: Unit, json: bool) -> Result<()> {
    // Pure conversion: a zero distance is a valid input here
    let value = units::convert(meters, unit, ctx.default_precision());

    if json {
        let response = ConvertResponse {
            meters,
            unit,
            value,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{} {}", value, unit);
    }

    Ok(())
}
