//! Reusable, mutable builder for [`Vehicle`].
//!
//! Unlike a consuming builder whose setters take `self` by value, the
//! assembler survives extraction: `extract` hands the finished vehicle to
//! the caller and immediately starts a fresh one, so a single assembler can
//! serve any number of builds.

use crate::error::AssemblyError;
use crate::vehicle::{Engine, Gps, TripComputer, Vehicle};

/// The construction steps a director can drive.
///
/// Directors are written against this trait rather than the concrete
/// assembler, so alternative builders (a test spy, a different product
/// family) slot in without touching the recipes.
pub trait VehicleBuilder {
    /// Discards the in-progress vehicle and starts an empty one.
    fn reset(&mut self);

    /// Sets the seat count. Negative counts are a caller error and are
    /// rejected without touching the in-progress vehicle.
    fn set_seats(&mut self, seats: i32) -> Result<(), AssemblyError>;

    /// Attaches the required engine sub-component.
    fn set_engine(&mut self, engine: Engine);

    /// Toggles the trip-computer slot. The most recent call wins: `false`
    /// clears a previously attached unit.
    fn set_trip_computer(&mut self, present: bool);

    /// Toggles the gps slot, same semantics as `set_trip_computer`.
    fn set_gps(&mut self, present: bool);
}

/// Concrete builder holding exactly one in-progress [`Vehicle`].
#[derive(Debug, Default)]
pub struct VehicleAssembler {
    vehicle: Vehicle,
}

impl VehicleAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands the in-progress vehicle to the caller by value and atomically
    /// begins a fresh empty one. Never fails, and the returned vehicle can
    /// no longer be touched by this assembler.
    pub fn extract(&mut self) -> Vehicle {
        std::mem::take(&mut self.vehicle)
    }
}

impl VehicleBuilder for VehicleAssembler {
    fn reset(&mut self) {
        self.vehicle = Vehicle::default();
    }

    fn set_seats(&mut self, seats: i32) -> Result<(), AssemblyError> {
        if seats < 0 {
            return Err(AssemblyError::InvalidArgument {
                field: "seats",
                value: seats as i64,
            });
        }
        self.vehicle.seats = seats as u32;
        Ok(())
    }

    fn set_engine(&mut self, engine: Engine) {
        self.vehicle.engine = engine;
    }

    fn set_trip_computer(&mut self, present: bool) {
        self.vehicle.trip_computer = present.then_some(TripComputer);
    }

    fn set_gps(&mut self, present: bool) {
        self.vehicle.gps = present.then_some(Gps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reflects_configuration() {
        // Scenario A: full sports configuration by hand.
        let mut assembler = VehicleAssembler::new();
        assembler.reset();
        assembler.set_seats(2).unwrap();
        assembler.set_engine(Engine::Sport);
        assembler.set_trip_computer(true);
        assembler.set_gps(true);

        let vehicle = assembler.extract();
        assert_eq!(vehicle.seats(), 2);
        assert_eq!(vehicle.engine(), Engine::Sport);
        assert!(vehicle.trip_computer().is_some());
        assert!(vehicle.gps().is_some());
    }

    #[test]
    fn test_optional_slots_absent_unless_toggled_on() {
        // Scenario B: only required parts configured.
        let mut assembler = VehicleAssembler::new();
        assembler.reset();
        assembler.set_seats(4).unwrap();
        assembler.set_engine(Engine::Standard);

        let vehicle = assembler.extract();
        assert_eq!(vehicle.seats(), 4);
        assert_eq!(vehicle.engine(), Engine::Standard);
        assert!(vehicle.trip_computer().is_none());
        assert!(vehicle.gps().is_none());
    }

    #[test]
    fn test_most_recent_toggle_wins() {
        let mut assembler = VehicleAssembler::new();
        assembler.set_gps(true);
        assembler.set_gps(false);
        assembler.set_trip_computer(false);
        assembler.set_trip_computer(true);

        let vehicle = assembler.extract();
        assert!(vehicle.gps().is_none());
        assert!(vehicle.trip_computer().is_some());
    }

    #[test]
    fn test_last_set_seats_wins() {
        let mut assembler = VehicleAssembler::new();
        assembler.set_seats(2).unwrap();
        assembler.set_seats(7).unwrap();
        assert_eq!(assembler.extract().seats(), 7);
    }

    #[test]
    fn test_seats_default_to_zero() {
        let mut assembler = VehicleAssembler::new();
        assert_eq!(assembler.extract().seats(), 0);
    }

    #[test]
    fn test_negative_seats_fail_fast() {
        let mut assembler = VehicleAssembler::new();
        assembler.set_seats(5).unwrap();

        let err = assembler.set_seats(-1).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::InvalidArgument {
                field: "seats",
                value: -1,
            }
        );

        // The rejected call left the in-progress vehicle untouched.
        assert_eq!(assembler.extract().seats(), 5);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = VehicleAssembler::new();
        once.set_seats(3).unwrap();
        once.reset();

        let mut twice = VehicleAssembler::new();
        twice.set_seats(3).unwrap();
        twice.reset();
        twice.reset();

        assert_eq!(once.extract(), twice.extract());
    }

    #[test]
    fn test_extract_isolates_previous_build() {
        let mut assembler = VehicleAssembler::new();
        assembler.set_seats(2).unwrap();
        assembler.set_gps(true);
        let first = assembler.extract();

        // Further configuration must not leak into the extracted vehicle.
        assembler.set_seats(9).unwrap();
        assembler.set_gps(false);
        assembler.set_trip_computer(true);

        assert_eq!(first.seats(), 2);
        assert!(first.gps().is_some());
        assert!(first.trip_computer().is_none());
    }

    #[test]
    fn test_consecutive_extracts_yield_independent_defaults() {
        // Scenario D: back-to-back extracts with no configuration between.
        let mut assembler = VehicleAssembler::new();
        assembler.set_seats(2).unwrap();
        let _ = assembler.extract();

        let first = assembler.extract();
        let second = assembler.extract();
        assert_eq!(first, Vehicle::default());
        assert_eq!(second, Vehicle::default());
        assert_eq!(first, second);
    }
}
