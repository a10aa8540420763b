//! The composite product assembled step by step.
//!
//! A `Vehicle` is a plain aggregate while the assembler owns it; once
//! extracted it is handed to the caller by value, so nothing can mutate it
//! behind the caller's back.

use std::fmt;

/// The required power-train sub-component. The variant set is fixed, so a
/// closed sum type beats a trait here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Engine {
    #[default]
    Standard,
    Sport,
}

impl Engine {
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Standard => "standard engine",
            Engine::Sport => "sports engine",
        }
    }
}

/// Optional navigation slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gps;

impl Gps {
    pub fn name(&self) -> &'static str {
        "gps"
    }
}

/// Optional trip-computer slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripComputer;

impl TripComputer {
    pub fn name(&self) -> &'static str {
        "trip computer"
    }
}

/// The product: one required count, one required engine, and two
/// independently optional slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vehicle {
    pub(crate) seats: u32,
    pub(crate) engine: Engine,
    pub(crate) trip_computer: Option<TripComputer>,
    pub(crate) gps: Option<Gps>,
}

impl Vehicle {
    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn trip_computer(&self) -> Option<&TripComputer> {
        self.trip_computer.as_ref()
    }

    pub fn gps(&self) -> Option<&Gps> {
        self.gps.as_ref()
    }

    /// One-line human-readable summary, for demo narration only.
    pub fn describe(&self) -> String {
        let mut extras = Vec::new();
        if let Some(trip_computer) = &self.trip_computer {
            extras.push(trip_computer.name());
        }
        if let Some(gps) = &self.gps {
            extras.push(gps.name());
        }

        if extras.is_empty() {
            format!("A car with {} seats and a {}", self.seats, self.engine.name())
        } else {
            format!(
                "A car with {} seats, a {}, and extras: {}",
                self.seats,
                self.engine.name(),
                extras.join(", ")
            )
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
