//! Builder pattern: a reusable assembler accumulates configuration step by
//! step, a director replays named recipes, and the finished product is
//! extracted by value.
//!
//! Run with: cargo run --bin builder

use colored::Colorize;
use design_patterns::{Director, Engine, VehicleAssembler, VehicleBuilder};

fn main() {
    println!("{}", "=== Builder Pattern ===".bold());

    // The director drives a fixed recipe; the caller only extracts.
    let director = Director::new();
    let mut assembler = VehicleAssembler::new();

    println!("\n{}", "== Director-built sports car ==".bold());
    director
        .construct_sports_car(&mut assembler)
        .expect("recipe uses only valid arguments");
    let sports_car = assembler.extract();
    println!("{} {}", "✓".green(), sports_car.describe());

    println!("\n{}", "== Director-built family car ==".bold());
    director
        .construct_family_car(&mut assembler)
        .expect("recipe uses only valid arguments");
    let family_car = assembler.extract();
    println!("{} {}", "✓".green(), family_car.describe());

    // The same assembler, driven by hand this time.
    println!("\n{}", "== Hand-built minivan ==".bold());
    assembler.reset();
    assembler.set_seats(7).expect("7 is a valid seat count");
    assembler.set_engine(Engine::Standard);
    assembler.set_gps(true);
    let minivan = assembler.extract();
    println!("{} {}", "✓".green(), minivan.describe());

    // Configuration calls validate their arguments up front.
    println!("\n{}", "== Fail-fast validation ==".bold());
    match assembler.set_seats(-3) {
        Ok(()) => println!("Unexpected success"),
        Err(err) => println!("{} {}", "✗".red(), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_recipes_build_distinct_vehicles() {
        let director = Director::new();
        let mut assembler = VehicleAssembler::new();

        director.construct_sports_car(&mut assembler).unwrap();
        let sports_car = assembler.extract();

        director.construct_family_car(&mut assembler).unwrap();
        let family_car = assembler.extract();

        assert_ne!(sports_car, family_car);
        assert_eq!(sports_car.engine(), Engine::Sport);
        assert_eq!(family_car.engine(), Engine::Standard);
    }
}
