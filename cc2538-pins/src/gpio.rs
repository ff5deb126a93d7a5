//! General Purpose Input and Output (GPIO) numbering
//!
//! The CC2538 routes every digital peripheral signal through its I/O
//! controller (IOC), so UART, SSI and I2C lines can be placed on any of the
//! 32 port pins. Board crates describe their wiring with the pin types from
//! this module:
//!
//! ```
//! use cc2538_pins::gpio::{port_a::PA7, DynPortId, TypeLevelPinId};
//!
//! type Button = PA7;
//! assert_eq!(Button::ID.port, DynPortId::A);
//! assert_eq!(Button::ID.num, 7);
//! ```

mod pin;

pub use pin::{
    port_a, port_b, port_c, port_d, DynPinId, DynPortId, PinId, PortA, PortB, PortC, PortD,
    PortId, TypeLevelPinId, PINS_PER_PORT,
};
