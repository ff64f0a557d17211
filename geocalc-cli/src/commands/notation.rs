use anyhow::{Context, Result};
use geocalc::GeoContext;
use serde::Serialize;

#[derive(Serialize)]
struct NotationResponse<'a> {
    decimal: f64,
    sexagesimal: &'a str,
}

pub fn to_sexagesimal(ctx: &GeoContext, decimal: f64, json: bool) -> Result<()> {
    let text = ctx.decimal_to_sexagesimal(decimal);
    print_result(decimal, &text, json, &text)
}

pub fn to_decimal(ctx: &GeoContext, text: &str, json: bool) -> Result<()> {
    let text = text.trim();
    let decimal = ctx
        .sexagesimal_to_decimal(text)
        .with_context(|| format!("Failed to convert {:?}", text))?;
    print_result(decimal, text, json, &decimal.to_string())
}

fn print_result(decimal: f64, sexagesimal: &str, json: bool, plain: &str) -> Result<()> {
    if json {
        let response = NotationResponse {
            decimal,
            sexagesimal,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", plain);
    }
    Ok(())
}
