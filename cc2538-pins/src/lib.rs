//! Pin, port and interrupt numbering for the TI CC2538
//!
//! This crate is the chip-level vocabulary board support packages use to
//! describe their wiring: GPIO port/pin identifiers, NVIC line numbers, the
//! pin constraints of each peripheral (expressed as traits so that invalid
//! routings fail to compile), and the [`board::BoardDef`] capability table.
//!
//! It holds no peripheral drivers and touches no registers.

#![deny(missing_docs)]
#![no_std]

pub mod adc;
pub mod board;
pub mod gpio;
pub mod i2c;
pub mod nvic;
pub mod spi;
pub mod typelevel;
pub mod uart;
