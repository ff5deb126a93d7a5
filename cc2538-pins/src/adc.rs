//! Analog-to-Digital Converter (ADC) inputs
//!
//! The SOC ADC samples AIN0-AIN7, which are hard-wired to PA0-PA7. Only port
//! A pins are valid ADC inputs:
//!
//! ```
//! use cc2538_pins::adc::AdcChannel;
//! use cc2538_pins::gpio::port_a::PA6;
//!
//! assert_eq!(<PA6 as AdcChannel>::CHANNEL, 6);
//! ```
//!
//! ```compile_fail
//! use cc2538_pins::adc::AdcChannel;
//! use cc2538_pins::gpio::port_b::PB6;
//!
//! let _ = <PB6 as AdcChannel>::CHANNEL;
//! ```

use crate::board::PinAssignment;
use crate::gpio::{PortA, TypeLevelPinId};

/// A pin that doubles as an ADC input.
pub trait AdcChannel: TypeLevelPinId {
    /// AIN channel number sampled on this pin.
    const CHANNEL: u8;
}

impl<P: TypeLevelPinId<Port = PortA>> AdcChannel for P {
    const CHANNEL: u8 = P::ID.num;
}

/// An ADC input and the channel it is sampled on.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdcInput {
    /// Pin carrying the analog signal
    pub pin: PinAssignment,
    /// AIN channel number
    pub channel: u8,
}

impl AdcInput {
    /// Input on the type-level pin `P`.
    pub const fn of<P: AdcChannel>() -> Self {
        Self {
            pin: PinAssignment::of::<P>(),
            channel: P::CHANNEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::{port_a::*, DynPortId};

    #[test]
    fn channel_follows_pin_number() {
        assert_eq!(<PA0 as AdcChannel>::CHANNEL, 0);
        assert_eq!(<PA7 as AdcChannel>::CHANNEL, 7);
    }

    #[test]
    fn input_from_pin() {
        let input = AdcInput::of::<PA6>();
        assert_eq!(input.pin.port, DynPortId::A);
        assert_eq!(input.pin.pin, 6);
        assert_eq!(input.channel, 6);
    }
}
