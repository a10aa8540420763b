//! Single responsibility principle: a car that also drives itself owns two
//! jobs; splitting out a driver leaves each type with exactly one reason to
//! change.
//!
//! Run with: cargo run --bin solid_srp

use colored::Colorize;

/* ============================================================
 * Example 1: before refactoring — Car both describes and
 * drives itself
 * ============================================================
 */

mod before {
    pub struct Car {
        make: String,
        model: String,
        year: u32,
    }

    impl Car {
        pub fn new(make: impl Into<String>, model: impl Into<String>, year: u32) -> Self {
            Self {
                make: make.into(),
                model: model.into(),
                year,
            }
        }

        pub fn info(&self) -> String {
            format!("{} {} {}", self.year, self.make, self.model)
        }

        // Driving is not the car's responsibility; it drags a second reason
        // to change into the type.
        pub fn drive(&self) -> String {
            format!("{}, {} is driving itself", self.make, self.model)
        }
    }
}

/* ============================================================
 * Example 2: after refactoring — Car keeps its data, Driver
 * does the driving
 * ============================================================
 */

mod after {
    pub struct Car {
        make: String,
        model: String,
        year: u32,
    }

    impl Car {
        pub fn new(make: impl Into<String>, model: impl Into<String>, year: u32) -> Self {
            Self {
                make: make.into(),
                model: model.into(),
                year,
            }
        }

        pub fn info(&self) -> String {
            format!("{} {} {}", self.year, self.make, self.model)
        }
    }

    pub struct Driver {
        name: String,
    }

    impl Driver {
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }

        pub fn drive(&self, car: &Car) -> String {
            format!("{} is driving the {}", self.name, car.info())
        }
    }
}

fn main() {
    println!("{}", "=== Single Responsibility Principle ===".bold());

    println!("\n{}", "== Example 1: before ==".bold());
    let car = before::Car::new("Toyota", "Camry", 2020);
    println!("Built: {}", car.info());
    println!("{}", car.drive());

    println!("\n{}", "== Example 2: after ==".bold());
    let car = after::Car::new("Toyota", "Camry", 2020);
    let driver = after::Driver::new("John");
    println!("{} {}", "✓".green(), driver.drive(&car));
}
