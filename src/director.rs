//! Named construction recipes over any [`VehicleBuilder`].
//!
//! The director is stateless: it only knows the order and arguments of the
//! builder calls for a handful of common configurations, so callers get a
//! sports car without memorizing the steps.

use crate::assembler::VehicleBuilder;
use crate::error::AssemblyError;
use crate::vehicle::Engine;

#[derive(Debug, Default)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    /// Two seats, sports engine, all extras.
    pub fn construct_sports_car<B: VehicleBuilder>(
        &self,
        builder: &mut B,
    ) -> Result<(), AssemblyError> {
        builder.reset();
        builder.set_seats(2)?;
        builder.set_engine(Engine::Sport);
        builder.set_trip_computer(true);
        builder.set_gps(true);
        Ok(())
    }

    /// Four seats, standard engine, gps only.
    pub fn construct_family_car<B: VehicleBuilder>(
        &self,
        builder: &mut B,
    ) -> Result<(), AssemblyError> {
        builder.reset();
        builder.set_seats(4)?;
        builder.set_engine(Engine::Standard);
        builder.set_trip_computer(false);
        builder.set_gps(true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::VehicleAssembler;
    use crate::vehicle::Engine;

    #[test]
    fn test_sports_car_recipe_matches_manual_build() {
        // Scenario C: the recipe reproduces the hand-built sports car.
        let director = Director::new();

        let mut by_recipe = VehicleAssembler::new();
        director.construct_sports_car(&mut by_recipe).unwrap();

        let mut by_hand = VehicleAssembler::new();
        by_hand.reset();
        by_hand.set_seats(2).unwrap();
        by_hand.set_engine(Engine::Sport);
        by_hand.set_trip_computer(true);
        by_hand.set_gps(true);

        assert_eq!(by_recipe.extract(), by_hand.extract());
    }

    #[test]
    fn test_sports_car_shape() {
        let director = Director::new();
        let mut assembler = VehicleAssembler::new();
        director.construct_sports_car(&mut assembler).unwrap();

        let vehicle = assembler.extract();
        assert_eq!(vehicle.seats(), 2);
        assert_eq!(vehicle.engine(), Engine::Sport);
        assert!(vehicle.trip_computer().is_some());
        assert!(vehicle.gps().is_some());
    }

    #[test]
    fn test_family_car_shape() {
        let director = Director::new();
        let mut assembler = VehicleAssembler::new();
        director.construct_family_car(&mut assembler).unwrap();

        let vehicle = assembler.extract();
        assert_eq!(vehicle.seats(), 4);
        assert_eq!(vehicle.engine(), Engine::Standard);
        assert!(vehicle.trip_computer().is_none());
        assert!(vehicle.gps().is_some());
    }

    #[test]
    fn test_recipe_discards_leftover_state() {
        // A recipe starts from reset, so prior configuration never bleeds in.
        let director = Director::new();
        let mut assembler = VehicleAssembler::new();
        assembler.set_seats(9).unwrap();
        assembler.set_trip_computer(true);

        director.construct_family_car(&mut assembler).unwrap();
        let vehicle = assembler.extract();
        assert_eq!(vehicle.seats(), 4);
        assert!(vehicle.trip_computer().is_none());
    }
}
