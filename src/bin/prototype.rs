//! Prototype pattern: every shape knows how to produce a deep copy of
//! itself, so a heterogeneous collection can be duplicated without the
//! caller knowing any concrete type.
//!
//! Run with: cargo run --bin prototype

use colored::Colorize;

/* ============================================================
 * Prototype trait and concrete shapes
 * ============================================================
 */

trait Shape {
    /// Explicit clone capability over trait objects. `Clone` itself is not
    /// object-safe, hence the boxed variant.
    fn clone_box(&self) -> Box<dyn Shape>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
struct Circle {
    x: i32,
    y: i32,
    radius: u32,
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
    fn describe(&self) -> String {
        format!("Circle of radius {}u at ({}, {})", self.radius, self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Rectangle {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl Shape for Rectangle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
    fn describe(&self) -> String {
        format!(
            "Rectangle of area {}u² at ({}, {})",
            self.width * self.height,
            self.x,
            self.y
        )
    }
}

/* ============================================================
 * Client code: clone a whole mixed registry at once
 * ============================================================
 */

struct ShapeRegistry {
    shapes: Vec<Box<dyn Shape>>,
}

impl ShapeRegistry {
    fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    fn register(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    fn clone_all(&self) -> Vec<Box<dyn Shape>> {
        self.shapes.iter().map(|shape| shape.clone_box()).collect()
    }
}

fn main() {
    println!("{}", "=== Prototype Pattern ===".bold());

    let mut registry = ShapeRegistry::new();

    let circle = Circle { x: 10, y: 10, radius: 20 };
    registry.register(circle.clone_box());
    registry.register(circle.clone_box());
    registry.register(Box::new(Rectangle { x: 0, y: 0, width: 10, height: 20 }));

    println!("\n{}", "== Cloning the registry ==".bold());
    for copy in registry.clone_all() {
        println!("{} {} cloned", "✓".green(), copy.describe());
    }
}

/* ============================================================
 * Tests
 * ============================================================
 */
