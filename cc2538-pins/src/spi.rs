//! Serial Peripheral Interface (SPI)
//!
//! The CC2538 calls its two SPI blocks SSI0 and SSI1. As master, TX is MOSI
//! and RX is MISO. Either block can be routed to any port pin.
//!
//! ```
//! use cc2538_pins::gpio::port_d::{PD2, PD3, PD4};
//! use cc2538_pins::spi::{check_pinout, Spi0, ValidSpiPinout};
//!
//! type Pinout = (PD2, PD3, PD4);
//! const _: () = check_pinout::<Spi0, Pinout>();
//!
//! let pins = <Pinout as ValidSpiPinout<Spi0>>::PINS;
//! assert_eq!(pins.clk.pin, 4);
//! ```

use crate::board::PinAssignment;
use crate::nvic::Interrupt;
use crate::typelevel::Sealed;

mod pins;
pub use pins::*;

/// Trait to handle both underlying devices (SSI0 & SSI1)
pub trait SpiDevice: Sealed + 'static {
    /// NVIC line of the SPI.
    const INTERRUPT: Interrupt;
}

/// Type-level SPI0 (SSI0) instance.
pub enum Spi0 {}
impl Sealed for Spi0 {}
impl SpiDevice for Spi0 {
    const INTERRUPT: Interrupt = Interrupt::Ssi0;
}

/// Type-level SPI1 (SSI1) instance.
pub enum Spi1 {}
impl Sealed for Spi1 {}
impl SpiDevice for Spi1 {
    const INTERRUPT: Interrupt = Interrupt::Ssi1;
}

/// Where the lines of one SPI bus are wired.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpiPins {
    /// Clock
    pub clk: PinAssignment,
    /// Master out, slave in
    pub tx: PinAssignment,
    /// Master in, slave out. `None` for write-only buses.
    pub rx: Option<PinAssignment>,
}

/// Compile-time check that `P` is a valid pinout for `S`.
///
/// Evaluate it in a `const` item; the call has no effect at run time.
pub const fn check_pinout<S: SpiDevice, P: ValidSpiPinout<S>>() {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::{port_a::*, port_d::*};

    #[test]
    fn interrupt_lines() {
        assert_eq!(Spi0::INTERRUPT, Interrupt::Ssi0);
        assert_eq!(Spi1::INTERRUPT, Interrupt::Ssi1);
    }

    #[test]
    fn full_duplex_pinout() {
        let pins = <(PA4, PA5, PA2) as ValidSpiPinout<Spi1>>::PINS;
        assert_eq!(pins.clk, PinAssignment::of::<PA2>());
        assert_eq!(pins.tx, PinAssignment::of::<PA4>());
        assert_eq!(pins.rx, Some(PinAssignment::of::<PA5>()));
    }

    #[test]
    fn write_only_pinout() {
        let pins = <(PD2, PD4) as ValidSpiPinout<Spi0>>::PINS;
        assert_eq!(pins.clk, PinAssignment::of::<PD4>());
        assert_eq!(pins.rx, None);
    }
}
