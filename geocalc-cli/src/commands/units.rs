use anyhow::Result;
use geocalc::Unit;

pub fn run() -> Result<()> {
    println!("{:<8}{:<16}{}", "Symbol", "Unit", "Per meter");
    for unit in Unit::ALL {
        println!("{:<8}{:<16}{}", unit.symbol(), unit.name(), unit.factor());
    }
    Ok(())
}
