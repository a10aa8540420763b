//! # Creational Patterns & SOLID Principles
//!
//! This crate contains runnable illustrations of classic object-oriented
//! design patterns translated into idiomatic Rust.
//!
//! The library itself implements the builder pattern in full: a reusable
//! [`VehicleAssembler`] accumulates configuration step by step, a stateless
//! [`Director`] encodes named recipes over it, and [`Vehicle`] is the
//! composite product handed to the caller by value.
//!
//! The remaining patterns live as standalone binaries under `src/bin/`:
//!
//! ```bash
//! # Creational patterns
//! cargo run --bin builder
//! cargo run --bin abstract_factory
//! cargo run --bin factory_method
//! cargo run --bin prototype
//! cargo run --bin singleton
//!
//! # SOLID principles
//! cargo run --bin solid_srp
//! cargo run --bin solid_ocp
//! cargo run --bin solid_lsp
//! cargo run --bin solid_isp
//! cargo run --bin solid_dip
//! ```

pub mod assembler;
pub mod director;
pub mod error;
pub mod vehicle;

pub use assembler::{VehicleAssembler, VehicleBuilder};
pub use director::Director;
pub use error::AssemblyError;
pub use vehicle::{Engine, Gps, TripComputer, Vehicle};
