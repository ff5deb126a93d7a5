//! Board capability tables
//!
//! A board crate describes its wiring with a single [`BoardDef`] constant.
//! Every logical signal a driver may ask for is a [`Role`], and every role
//! resolves to a [`Capability`]: the signal is wired and enabled, wired but
//! switched off, or not on the board at all. A signal can therefore never
//! be both "defined" and "flagged absent", nor neither.

use core::fmt;

use crate::adc::AdcInput;
use crate::gpio::{DynPinId, DynPortId, TypeLevelPinId};
use crate::i2c::I2cPins;
use crate::nvic::Interrupt;
use crate::spi::SpiPins;
use crate::uart::UartPins;

/// Physical location of one logical signal.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PinAssignment {
    /// GPIO port
    pub port: DynPortId,
    /// Pin number within the port
    pub pin: u8,
    /// Interrupt line a handler for this signal should be registered on
    pub vector: Option<Interrupt>,
}

impl PinAssignment {
    /// Assignment for the type-level pin `P`, without an interrupt.
    pub const fn of<P: TypeLevelPinId>() -> Self {
        Self {
            port: P::ID.port,
            pin: P::ID.num,
            vector: None,
        }
    }

    /// Assignment for the type-level pin `P`, routed to its port's GPIO
    /// interrupt.
    pub const fn interruptible<P: TypeLevelPinId>() -> Self {
        Self {
            vector: Some(P::ID.port.interrupt()),
            ..Self::of::<P>()
        }
    }

    /// The pin as a [`DynPinId`].
    #[inline]
    pub const fn id(&self) -> DynPinId {
        DynPinId {
            port: self.port,
            num: self.pin,
        }
    }
}

impl fmt::Display for PinAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Whether a board feature is available, and where it is wired.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability<T> {
    /// Wired and enabled for this build.
    Present(T),
    /// Wired on the board, but disabled for this build.
    Disabled(T),
    /// Not on this board, or its instance is not enabled.
    Absent,
}

impl<T> Capability<T> {
    /// `true` for [`Capability::Present`].
    pub const fn is_present(&self) -> bool {
        matches!(self, Capability::Present(_))
    }

    /// `true` for [`Capability::Disabled`].
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Capability::Disabled(_))
    }

    /// `true` for [`Capability::Absent`].
    pub const fn is_absent(&self) -> bool {
        matches!(self, Capability::Absent)
    }

    /// The wiring, if the feature may be used.
    pub const fn get(&self) -> Option<&T> {
        match self {
            Capability::Present(t) => Some(t),
            _ => None,
        }
    }

    /// The wiring, whether enabled or not.
    pub const fn wiring(&self) -> Option<&T> {
        match self {
            Capability::Present(t) | Capability::Disabled(t) => Some(t),
            Capability::Absent => None,
        }
    }

    /// Converts from `&Capability<T>` to `Capability<&T>`.
    pub const fn as_ref(&self) -> Capability<&T> {
        match self {
            Capability::Present(t) => Capability::Present(t),
            Capability::Disabled(t) => Capability::Disabled(t),
            Capability::Absent => Capability::Absent,
        }
    }

    /// Maps the wiring, keeping the enabled/disabled state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Capability<U> {
        match self {
            Capability::Present(t) => Capability::Present(f(t)),
            Capability::Disabled(t) => Capability::Disabled(f(t)),
            Capability::Absent => Capability::Absent,
        }
    }

    /// Maps the wiring to an optional part of it. A missing part is
    /// [`Capability::Absent`] regardless of the original state.
    pub fn filter_map<U>(self, f: impl FnOnce(T) -> Option<U>) -> Capability<U> {
        match self {
            Capability::Present(t) => f(t).map_or(Capability::Absent, Capability::Present),
            Capability::Disabled(t) => f(t).map_or(Capability::Absent, Capability::Disabled),
            Capability::Absent => Capability::Absent,
        }
    }
}

/// Peripheral a [`Role`] belongs to.
#[allow(missing_docs)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Peripheral {
    Button,
    Usb,
    Uart0,
    Uart1,
    Spi0,
    Spi1,
    I2c,
    Adc,
}

macro_rules! roles {
    ($($role:ident => $peripheral:ident, $name:literal;)*) => {
        /// Every logical signal a board can route to a pin.
        #[allow(missing_docs)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Role {
            $($role,)*
        }

        impl Role {
            /// Every role, in declaration order.
            pub const ALL: &'static [Role] = &[$(Role::$role,)*];

            /// Peripheral this signal belongs to.
            pub const fn peripheral(self) -> Peripheral {
                match self {
                    $(Role::$role => Peripheral::$peripheral,)*
                }
            }

            /// Human readable name, e.g. `"UART1 CTS"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Role::$role => $name,)*
                }
            }
        }
    };
}

roles! {
    ButtonSelect => Button, "Button select";
    UsbPullup => Usb, "USB pull-up";
    Uart0Rx => Uart0, "UART0 RX";
    Uart0Tx => Uart0, "UART0 TX";
    Uart0Cts => Uart0, "UART0 CTS";
    Uart0Rts => Uart0, "UART0 RTS";
    Uart1Rx => Uart1, "UART1 RX";
    Uart1Tx => Uart1, "UART1 TX";
    Uart1Cts => Uart1, "UART1 CTS";
    Uart1Rts => Uart1, "UART1 RTS";
    Spi0Clk => Spi0, "SPI0 CLK";
    Spi0Tx => Spi0, "SPI0 TX";
    Spi0Rx => Spi0, "SPI0 RX";
    Spi1Clk => Spi1, "SPI1 CLK";
    Spi1Tx => Spi1, "SPI1 TX";
    Spi1Rx => Spi1, "SPI1 RX";
    I2cSda => I2c, "I2C SDA";
    I2cScl => I2c, "I2C SCL";
    AdcInput => Adc, "ADC input";
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete wiring description of one board.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardDef {
    /// Identification string, printed at startup.
    pub name: &'static str,
    /// User LEDs.
    pub leds: Capability<&'static [PinAssignment]>,
    /// Select button.
    pub button: Capability<PinAssignment>,
    /// Pin driving the USB D+ pull-up.
    pub usb_pullup: Capability<PinAssignment>,
    /// UART0 lines.
    pub uart0: Capability<UartPins>,
    /// UART1 lines.
    pub uart1: Capability<UartPins>,
    /// SPI0 (SSI0) lines.
    pub spi0: Capability<SpiPins>,
    /// SPI1 (SSI1) lines.
    pub spi1: Capability<SpiPins>,
    /// I2C lines.
    pub i2c: Capability<I2cPins>,
    /// ADC input.
    pub adc: Capability<AdcInput>,
}

impl BoardDef {
    /// `true` if the board has user LEDs enabled.
    pub const fn has_leds(&self) -> bool {
        self.leds.is_present()
    }

    /// `true` if the select button is enabled.
    pub const fn has_button(&self) -> bool {
        self.button.is_present()
    }

    /// Where `role` is wired, if anywhere.
    pub fn pin(&self, role: Role) -> Capability<PinAssignment> {
        match role {
            Role::ButtonSelect => self.button,
            Role::UsbPullup => self.usb_pullup,
            Role::Uart0Rx => self.uart0.map(|u| u.rx),
            Role::Uart0Tx => self.uart0.map(|u| u.tx),
            Role::Uart0Cts => self.uart0.filter_map(|u| u.cts),
            Role::Uart0Rts => self.uart0.filter_map(|u| u.rts),
            Role::Uart1Rx => self.uart1.map(|u| u.rx),
            Role::Uart1Tx => self.uart1.map(|u| u.tx),
            Role::Uart1Cts => self.uart1.filter_map(|u| u.cts),
            Role::Uart1Rts => self.uart1.filter_map(|u| u.rts),
            Role::Spi0Clk => self.spi0.map(|s| s.clk),
            Role::Spi0Tx => self.spi0.map(|s| s.tx),
            Role::Spi0Rx => self.spi0.filter_map(|s| s.rx),
            Role::Spi1Clk => self.spi1.map(|s| s.clk),
            Role::Spi1Tx => self.spi1.map(|s| s.tx),
            Role::Spi1Rx => self.spi1.filter_map(|s| s.rx),
            Role::I2cSda => self.i2c.map(|i| i.sda),
            Role::I2cScl => self.i2c.map(|i| i.scl),
            Role::AdcInput => self.adc.map(|a| a.pin),
        }
    }

    /// Every enabled signal with the pin it uses.
    pub fn assignments(&self) -> impl Iterator<Item = (Role, PinAssignment)> + '_ {
        Role::ALL
            .iter()
            .filter_map(move |&role| self.pin(role).get().map(|pin| (role, *pin)))
    }

    /// Log the board string and its wiring.
    ///
    /// Meant to be called once during startup, after the `defmt` transport
    /// is up.
    #[cfg(feature = "defmt")]
    pub fn log_summary(&self) {
        defmt::info!("{=str}", self.name);
        for &role in Role::ALL {
            match self.pin(role) {
                Capability::Present(pin) => defmt::debug!("{}: {}", role, pin.id()),
                Capability::Disabled(pin) => {
                    defmt::debug!("{}: {} (disabled)", role, pin.id())
                }
                Capability::Absent => {}
            }
        }
    }
}
