//! Interrupt vector numbers
//!
//! Numbers are the NVIC lines of the CC2538 alternate interrupt map, the one
//! selected whenever `SYS_CTRL_I_MAP` is set (which every CC2538 platform
//! does at startup).

use crate::gpio::DynPortId;

/// NVIC interrupt lines used by the peripherals this crate describes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum Interrupt {
    /// GPIO port A
    GpioA = 0,
    /// GPIO port B
    GpioB = 1,
    /// GPIO port C
    GpioC = 2,
    /// GPIO port D
    GpioD = 3,
    /// UART0
    Uart0 = 5,
    /// UART1
    Uart1 = 6,
    /// SSI0 (SPI0)
    Ssi0 = 7,
    /// I2C
    I2c = 8,
    /// SOC ADC
    Adc = 14,
    /// SSI1 (SPI1)
    Ssi1 = 34,
}

impl Interrupt {
    /// The GPIO port this line serves, if it is a GPIO port line.
    pub const fn port(self) -> Option<DynPortId> {
        match self {
            Interrupt::GpioA => Some(DynPortId::A),
            Interrupt::GpioB => Some(DynPortId::B),
            Interrupt::GpioC => Some(DynPortId::C),
            Interrupt::GpioD => Some(DynPortId::D),
            _ => None,
        }
    }
}

// SAFETY: every discriminant above is a valid CC2538 NVIC line.
unsafe impl cortex_m::interrupt::InterruptNumber for Interrupt {
    #[inline]
    fn number(self) -> u16 {
        self as u16
    }
}
