//! Board support for the HCE WI502 IoT module
//!
//! Connectivity of the WI502's on-board peripherals, for drivers built
//! against this board. The module has no user LEDs. Its select button is
//! wired but stays disabled unless the `button` feature is on.
//!
//! Each optional peripheral instance is behind its own Cargo feature. The pin
//! constants of a disabled instance do not exist, so a driver that uses them
//! fails to build instead of driving the wrong pins:
//!
//! | Feature | Module     | Pins                                   | Default |
//! |---------|------------|----------------------------------------|---------|
//! | `uart0` | [`uart0`]  | RX PA0, TX PA1                         | on      |
//! | `uart1` | [`uart1`]  | RX PA2, TX PA3, CTS PB0, RTS PD3       | on      |
//! | `spi0`  | [`spi0`]   | CLK PD4, TX PD2, RX PD3                | on      |
//! | `spi1`  | `spi1`     | CLK PA2, TX PA4, RX PA5                | off     |
//! | `i2c`   | [`i2c`]    | SDA PB1, SCL PB2                       | on      |
//! | `button`| [`button`] | select PA7 (always defined)            | off     |
//!
//! [`usb`] and [`adc`] are always defined.
//!
//! ```
//! use hce_wi502::{hal::board::Role, BOARD};
//!
//! for (role, pin) in BOARD.assignments() {
//!     assert!(pin.pin < 8, "{role}");
//! }
//! assert!(BOARD.pin(Role::AdcInput).is_present());
//! ```
#![cfg_attr(
    not(feature = "uart0"),
    doc = r#"
With `uart0` off, its pins cannot be named:

```compile_fail
let _ = hce_wi502::uart0::TX;
```
"#
)]
#![cfg_attr(
    not(feature = "uart1"),
    doc = r#"
With `uart1` off, its pins cannot be named:

```compile_fail
let _ = hce_wi502::uart1::CTS;
```
"#
)]
#![cfg_attr(
    not(feature = "spi0"),
    doc = r#"
With `spi0` off, its pins cannot be named:

```compile_fail
let _ = hce_wi502::spi0::CLK;
```
"#
)]
#![cfg_attr(
    not(feature = "spi1"),
    doc = r#"
With `spi1` off, its pins cannot be named:

```compile_fail
let _ = hce_wi502::spi1::CLK;
```
"#
)]
#![cfg_attr(
    not(feature = "i2c"),
    doc = r#"
With `i2c` off, its pins cannot be named:

```compile_fail
let _ = hce_wi502::i2c::SDA;
```
"#
)]

#![deny(missing_docs)]
#![no_std]

pub extern crate cc2538_pins as hal;

#[cfg(feature = "rt")]
extern crate cortex_m_rt;
#[cfg(feature = "rt")]
pub use cortex_m_rt::entry;

use hal::adc::AdcInput;
use hal::board::{BoardDef, Capability, PinAssignment};
use hal::spi::SpiPins;
use hal::uart::UartPins;

/// Identification string, printed during startup.
pub const BOARD_STRING: &str = "HCE WI502 IoT Module, cc2538-powered board";

/// USB pull-up
///
/// Driven by PC0, which is shared with the LED1 footprint.
pub mod usb {
    use crate::hal::board::PinAssignment;
    use crate::hal::gpio::port_c::PC0;

    /// Pin driving the USB D+ pull-up
    pub type Pullup = PC0;

    /// USB pull-up, PC0
    pub const PULLUP: PinAssignment = PinAssignment::of::<Pullup>();
}

/// UART0, the XDS back channel
///
/// UART0 has no flow-control lines.
#[cfg(feature = "uart0")]
pub mod uart0 {
    use crate::hal::board::PinAssignment;
    use crate::hal::gpio::port_a::{PA0, PA1};
    use crate::hal::nvic::Interrupt;
    use crate::hal::uart::{Uart0, UartDevice, UartPins, ValidUartPinout};

    /// Receive line
    pub type Rx = PA0;
    /// Transmit line
    pub type Tx = PA1;
    /// Checked pinout, `(TX, RX)`
    pub type Pinout = (Tx, Rx);

    /// RX line, PA0
    pub const RX: PinAssignment = PinAssignment::of::<Rx>();
    /// TX line, PA1
    pub const TX: PinAssignment = PinAssignment::of::<Tx>();

    /// Interrupt line of UART0
    pub const INTERRUPT: Interrupt = <Uart0 as UartDevice>::INTERRUPT;

    /// All UART0 lines
    pub const PINS: UartPins = <Pinout as ValidUartPinout<Uart0>>::PINS;
}

/// UART1, with hardware flow control
#[cfg(feature = "uart1")]
pub mod uart1 {
    use crate::hal::board::PinAssignment;
    use crate::hal::gpio::{
        port_a::{PA2, PA3},
        port_b::PB0,
        port_d::PD3,
    };
    use crate::hal::nvic::Interrupt;
    use crate::hal::uart::{Uart1, UartDevice, UartPins, ValidUartPinout};

    /// Receive line
    pub type Rx = PA2;
    /// Transmit line
    pub type Tx = PA3;
    /// Clear to send
    pub type Cts = PB0;
    /// Request to send
    pub type Rts = PD3;
    /// Checked pinout, `(TX, RX, CTS, RTS)`
    pub type Pinout = (Tx, Rx, Cts, Rts);

    /// RX line, PA2
    pub const RX: PinAssignment = PinAssignment::of::<Rx>();
    /// TX line, PA3
    pub const TX: PinAssignment = PinAssignment::of::<Tx>();
    /// CTS line, PB0
    pub const CTS: PinAssignment = PinAssignment::of::<Cts>();
    /// RTS line, PD3
    pub const RTS: PinAssignment = PinAssignment::of::<Rts>();

    /// Interrupt line of UART1
    pub const INTERRUPT: Interrupt = <Uart1 as UartDevice>::INTERRUPT;

    /// All UART1 lines
    pub const PINS: UartPins = <Pinout as ValidUartPinout<Uart1>>::PINS;
}

/// Select button
pub mod button {
    use crate::hal::board::PinAssignment;
    use crate::hal::gpio::{port_a::PA7, TypeLevelPinId};
    use crate::hal::nvic::Interrupt;

    /// Select button input
    pub type Select = PA7;

    /// Select button, with the port A interrupt attached.
    pub const SELECT: PinAssignment = PinAssignment::interruptible::<Select>();

    /// Interrupt line for the select button
    pub const SELECT_VECTOR: Interrupt = Select::ID.port.interrupt();
}

/// ADC inputs
pub mod adc {
    use crate::hal::adc::AdcInput;
    use crate::hal::gpio::port_a::PA6;

    /// Battery voltage sense
    pub type Battery = PA6;

    /// Battery voltage sense, AIN6
    pub const BATTERY: AdcInput = AdcInput::of::<Battery>();
}

/// SPI0 (SSI0)
#[cfg(feature = "spi0")]
pub mod spi0 {
    use crate::hal::board::PinAssignment;
    use crate::hal::gpio::port_d::{PD2, PD3, PD4};
    use crate::hal::nvic::Interrupt;
    use crate::hal::spi::{Spi0, SpiDevice, SpiPins, ValidSpiPinout};

    /// Clock
    pub type Clk = PD4;
    /// TX (master mode: MOSI)
    pub type Tx = PD2;
    /// RX (master mode: MISO)
    pub type Rx = PD3;
    /// Checked pinout, `(TX, RX, CLK)`
    pub type Pinout = (Tx, Rx, Clk);

    /// CLK line, PD4
    pub const CLK: PinAssignment = PinAssignment::of::<Clk>();
    /// TX line, PD2
    pub const TX: PinAssignment = PinAssignment::of::<Tx>();
    /// RX line, PD3
    pub const RX: PinAssignment = PinAssignment::of::<Rx>();

    /// Interrupt line of SPI0
    pub const INTERRUPT: Interrupt = <Spi0 as SpiDevice>::INTERRUPT;

    /// All SPI0 lines
    pub const PINS: SpiPins = <Pinout as ValidSpiPinout<Spi0>>::PINS;
}

/// SPI1 (SSI1)
#[cfg(feature = "spi1")]
pub mod spi1 {
    use crate::hal::board::PinAssignment;
    use crate::hal::gpio::port_a::{PA2, PA4, PA5};
    use crate::hal::nvic::Interrupt;
    use crate::hal::spi::{Spi1, SpiDevice, SpiPins, ValidSpiPinout};

    /// Clock
    pub type Clk = PA2;
    /// TX (master mode: MOSI)
    pub type Tx = PA4;
    /// RX (master mode: MISO)
    pub type Rx = PA5;
    /// Checked pinout, `(TX, RX, CLK)`
    pub type Pinout = (Tx, Rx, Clk);

    /// CLK line, PA2
    pub const CLK: PinAssignment = PinAssignment::of::<Clk>();
    /// TX line, PA4
    pub const TX: PinAssignment = PinAssignment::of::<Tx>();
    /// RX line, PA5
    pub const RX: PinAssignment = PinAssignment::of::<Rx>();

    /// Interrupt line of SPI1
    pub const INTERRUPT: Interrupt = <Spi1 as SpiDevice>::INTERRUPT;

    /// All SPI1 lines
    pub const PINS: SpiPins = <Pinout as ValidSpiPinout<Spi1>>::PINS;
}

/// I2C
#[cfg(feature = "i2c")]
pub mod i2c {
    use crate::hal::board::PinAssignment;
    use crate::hal::gpio::port_b::{PB1, PB2};
    use crate::hal::i2c::{I2cPins, ValidI2cPinout};
    use crate::hal::nvic::Interrupt;

    /// Data
    pub type Sda = PB1;
    /// Clock
    pub type Scl = PB2;
    /// Checked pinout, `(SDA, SCL)`
    pub type Pinout = (Sda, Scl);

    /// SDA line, PB1
    pub const SDA: PinAssignment = PinAssignment::of::<Sda>();
    /// SCL line, PB2
    pub const SCL: PinAssignment = PinAssignment::of::<Scl>();

    /// Interrupt line of the I2C block
    pub const INTERRUPT: Interrupt = crate::hal::i2c::INTERRUPT;

    /// All I2C lines
    pub const PINS: I2cPins = <Pinout as ValidI2cPinout>::PINS;
}

/// UART0 pin constants are defined
pub const UART0_IN_USE: bool = cfg!(feature = "uart0");
/// UART1 pin constants are defined
pub const UART1_IN_USE: bool = cfg!(feature = "uart1");
/// SPI0 pin constants are defined
pub const SPI0_IN_USE: bool = cfg!(feature = "spi0");
/// SPI1 pin constants are defined
pub const SPI1_IN_USE: bool = cfg!(feature = "spi1");
/// I2C pin constants are defined
pub const I2C_IN_USE: bool = cfg!(feature = "i2c");

/// The board has user LEDs
pub const PLATFORM_HAS_LEDS: bool = BOARD.has_leds();
/// The select button may be used
pub const PLATFORM_HAS_BUTTON: bool = BOARD.has_button();
/// The select button may be handed to the button HAL
pub const PLATFORM_SUPPORTS_BUTTON_HAL: bool = PLATFORM_HAS_BUTTON;

#[cfg(feature = "button")]
const BUTTON: Capability<PinAssignment> = Capability::Present(button::SELECT);
#[cfg(not(feature = "button"))]
const BUTTON: Capability<PinAssignment> = Capability::Disabled(button::SELECT);

#[cfg(feature = "uart0")]
const UART0: Capability<UartPins> = Capability::Present(uart0::PINS);
#[cfg(not(feature = "uart0"))]
const UART0: Capability<UartPins> = Capability::Absent;

#[cfg(feature = "uart1")]
const UART1: Capability<UartPins> = Capability::Present(uart1::PINS);
#[cfg(not(feature = "uart1"))]
const UART1: Capability<UartPins> = Capability::Absent;

#[cfg(feature = "spi0")]
const SPI0: Capability<SpiPins> = Capability::Present(spi0::PINS);
#[cfg(not(feature = "spi0"))]
const SPI0: Capability<SpiPins> = Capability::Absent;

#[cfg(feature = "spi1")]
const SPI1: Capability<SpiPins> = Capability::Present(spi1::PINS);
#[cfg(not(feature = "spi1"))]
const SPI1: Capability<SpiPins> = Capability::Absent;

#[cfg(feature = "i2c")]
const I2C: Capability<hal::i2c::I2cPins> = Capability::Present(i2c::PINS);
#[cfg(not(feature = "i2c"))]
const I2C: Capability<hal::i2c::I2cPins> = Capability::Absent;

const ADC: Capability<AdcInput> = Capability::Present(adc::BATTERY);

/// The WI502 capability table.
pub const BOARD: BoardDef = BoardDef {
    name: BOARD_STRING,
    leds: Capability::Absent,
    button: BUTTON,
    usb_pullup: Capability::Present(usb::PULLUP),
    uart0: UART0,
    uart1: UART1,
    spi0: SPI0,
    spi1: SPI1,
    i2c: I2C,
    adc: ADC,
};

#[cfg(test)]
mod tests {
    use super::*;
    use hal::board::Role;
    use hal::gpio::DynPortId;
    use hal::nvic::Interrupt;

    #[test]
    fn board_string() {
        assert!(!BOARD_STRING.is_empty());
        assert_eq!(BOARD.name, BOARD_STRING);
        assert!(BOARD_STRING.contains("WI502"));
    }

    #[test]
    fn no_leds() {
        assert!(!PLATFORM_HAS_LEDS);
        assert!(BOARD.leds.is_absent());
    }

    #[derive(Debug, PartialEq)]
    enum State {
        Present,
        Disabled,
        Absent,
    }

    fn state<T>(cap: Capability<T>) -> State {
        match cap {
            Capability::Present(_) => State::Present,
            Capability::Disabled(_) => State::Disabled,
            Capability::Absent => State::Absent,
        }
    }

    fn enabled(on: bool) -> State {
        if on {
            State::Present
        } else {
            State::Absent
        }
    }

    #[test]
    fn every_role_has_its_expected_state() {
        let uart0 = cfg!(feature = "uart0");
        let uart1 = cfg!(feature = "uart1");
        let spi0 = cfg!(feature = "spi0");
        let spi1 = cfg!(feature = "spi1");
        let i2c = cfg!(feature = "i2c");
        let button = if cfg!(feature = "button") {
            State::Present
        } else {
            State::Disabled
        };

        let expected = [
            (Role::ButtonSelect, button),
            (Role::UsbPullup, State::Present),
            (Role::Uart0Rx, enabled(uart0)),
            (Role::Uart0Tx, enabled(uart0)),
            (Role::Uart0Cts, State::Absent),
            (Role::Uart0Rts, State::Absent),
            (Role::Uart1Rx, enabled(uart1)),
            (Role::Uart1Tx, enabled(uart1)),
            (Role::Uart1Cts, enabled(uart1)),
            (Role::Uart1Rts, enabled(uart1)),
            (Role::Spi0Clk, enabled(spi0)),
            (Role::Spi0Tx, enabled(spi0)),
            (Role::Spi0Rx, enabled(spi0)),
            (Role::Spi1Clk, enabled(spi1)),
            (Role::Spi1Tx, enabled(spi1)),
            (Role::Spi1Rx, enabled(spi1)),
            (Role::I2cSda, enabled(i2c)),
            (Role::I2cScl, enabled(i2c)),
            (Role::AdcInput, State::Present),
        ];

        assert_eq!(expected.len(), Role::ALL.len());
        for (role, want) in expected {
            assert!(Role::ALL.contains(&role), "{role}");
            assert_eq!(state(BOARD.pin(role)), want, "{role}");
        }
    }

    #[cfg(all(
        feature = "uart0",
        feature = "uart1",
        feature = "spi0",
        feature = "i2c",
        not(feature = "spi1"),
        not(feature = "button")
    ))]
    #[test]
    fn default_build_states() {
        assert_eq!(state(BOARD.pin(Role::ButtonSelect)), State::Disabled);
        assert_eq!(state(BOARD.pin(Role::Uart0Cts)), State::Absent);
        assert_eq!(state(BOARD.pin(Role::Uart0Rts)), State::Absent);
        assert_eq!(state(BOARD.pin(Role::Uart1Rts)), State::Present);
        assert_eq!(state(BOARD.pin(Role::Spi0Rx)), State::Present);
        assert_eq!(state(BOARD.pin(Role::Spi1Clk)), State::Absent);
        assert_eq!(BOARD.assignments().count(), 13);
    }

    #[test]
    fn instance_interrupt_lines() {
        #[cfg(feature = "uart0")]
        assert_eq!(uart0::INTERRUPT, Interrupt::Uart0);
        #[cfg(feature = "uart1")]
        assert_eq!(uart1::INTERRUPT, Interrupt::Uart1);
        #[cfg(feature = "spi0")]
        assert_eq!(spi0::INTERRUPT, Interrupt::Ssi0);
        #[cfg(feature = "spi1")]
        assert_eq!(spi1::INTERRUPT, Interrupt::Ssi1);
        #[cfg(feature = "i2c")]
        assert_eq!(i2c::INTERRUPT, Interrupt::I2c);
    }

    #[test]
    fn every_pin_is_on_a_real_port() {
        for &role in Role::ALL {
            if let Some(pin) = BOARD.pin(role).wiring() {
                assert!(DynPortId::ALL.contains(&pin.port), "{role}");
                assert!(pin.pin < hal::gpio::PINS_PER_PORT, "{role}");
            }
        }
    }

    #[test]
    fn usb_pullup_on_pc0() {
        assert_eq!(BOARD.pin(Role::UsbPullup), Capability::Present(usb::PULLUP));
        assert_eq!(usb::PULLUP.port, DynPortId::C);
        assert_eq!(usb::PULLUP.pin, 0);
    }

    #[test]
    fn button_is_wired_to_pa7_on_the_port_a_vector() {
        assert_eq!(button::SELECT.port, DynPortId::A);
        assert_eq!(button::SELECT.pin, 7);
        assert_eq!(button::SELECT.vector, Some(Interrupt::GpioA));
        assert_eq!(button::SELECT_VECTOR, Interrupt::GpioA);
        assert_eq!(BOARD.pin(Role::ButtonSelect).wiring(), Some(&button::SELECT));
    }

    #[cfg(not(feature = "button"))]
    #[test]
    fn button_is_disabled_by_default() {
        assert!(!PLATFORM_HAS_BUTTON);
        assert!(!PLATFORM_SUPPORTS_BUTTON_HAL);
        assert!(BOARD.button.is_disabled());
    }

    #[cfg(feature = "button")]
    #[test]
    fn button_feature_enables_the_button() {
        assert!(PLATFORM_HAS_BUTTON);
        assert!(PLATFORM_SUPPORTS_BUTTON_HAL);
        assert!(BOARD.button.is_present());
    }

    #[test]
    fn battery_sense_on_ain6() {
        assert_eq!(adc::BATTERY.pin.port, DynPortId::A);
        assert_eq!(adc::BATTERY.pin.pin, 6);
        assert_eq!(adc::BATTERY.channel, 6);
        assert!(BOARD.pin(Role::AdcInput).is_present());
    }

    #[test]
    fn uart0_never_has_flow_control() {
        assert!(BOARD.pin(Role::Uart0Cts).is_absent());
        assert!(BOARD.pin(Role::Uart0Rts).is_absent());
    }

    #[cfg(feature = "uart0")]
    #[test]
    fn uart0_pins() {
        assert!(UART0_IN_USE);
        assert_eq!(uart0::RX.port, DynPortId::A);
        assert_eq!(uart0::RX.pin, 0);
        assert_eq!(uart0::TX.pin, 1);
        assert_eq!(uart0::PINS.rx, uart0::RX);
        assert_eq!(uart0::PINS.tx, uart0::TX);
        assert_eq!(BOARD.pin(Role::Uart0Rx), Capability::Present(uart0::RX));
    }

    #[cfg(feature = "uart1")]
    #[test]
    fn uart1_pins() {
        assert!(UART1_IN_USE);
        assert_eq!((uart1::RX.port, uart1::RX.pin), (DynPortId::A, 2));
        assert_eq!((uart1::TX.port, uart1::TX.pin), (DynPortId::A, 3));
        assert_eq!((uart1::CTS.port, uart1::CTS.pin), (DynPortId::B, 0));
        assert_eq!((uart1::RTS.port, uart1::RTS.pin), (DynPortId::D, 3));
        assert!(uart1::PINS.has_flow_control());
        assert_eq!(BOARD.pin(Role::Uart1Cts), Capability::Present(uart1::CTS));
    }

    #[cfg(not(feature = "uart1"))]
    #[test]
    fn uart1_absent() {
        assert!(!UART1_IN_USE);
        assert!(BOARD.uart1.is_absent());
        assert!(BOARD.pin(Role::Uart1Cts).is_absent());
    }

    #[cfg(all(feature = "spi0", not(feature = "spi1")))]
    #[test]
    fn spi0_enabled_spi1_disabled() {
        assert!(SPI0_IN_USE);
        assert!(!SPI1_IN_USE);

        assert_eq!((spi0::CLK.port, spi0::CLK.pin), (DynPortId::D, 4));
        assert_eq!((spi0::TX.port, spi0::TX.pin), (DynPortId::D, 2));
        assert_eq!((spi0::RX.port, spi0::RX.pin), (DynPortId::D, 3));
        assert_eq!(BOARD.pin(Role::Spi0Clk), Capability::Present(spi0::CLK));
        assert_eq!(BOARD.pin(Role::Spi0Tx), Capability::Present(spi0::TX));
        assert_eq!(BOARD.pin(Role::Spi0Rx), Capability::Present(spi0::RX));

        for role in [Role::Spi1Clk, Role::Spi1Tx, Role::Spi1Rx] {
            assert!(BOARD.pin(role).is_absent(), "{role}");
        }
    }

    #[cfg(feature = "spi1")]
    #[test]
    fn spi1_pins() {
        assert!(SPI1_IN_USE);
        assert_eq!((spi1::CLK.port, spi1::CLK.pin), (DynPortId::A, 2));
        assert_eq!((spi1::TX.port, spi1::TX.pin), (DynPortId::A, 4));
        assert_eq!((spi1::RX.port, spi1::RX.pin), (DynPortId::A, 5));
        assert_eq!(BOARD.spi1, Capability::Present(spi1::PINS));
    }

    #[cfg(feature = "i2c")]
    #[test]
    fn i2c_pins() {
        assert!(I2C_IN_USE);
        assert_eq!((i2c::SDA.port, i2c::SDA.pin), (DynPortId::B, 1));
        assert_eq!((i2c::SCL.port, i2c::SCL.pin), (DynPortId::B, 2));
        assert_eq!(BOARD.pin(Role::I2cSda), Capability::Present(i2c::SDA));
        assert_eq!(BOARD.pin(Role::I2cScl), Capability::Present(i2c::SCL));
    }

    #[test]
    fn feature_flags_match_the_table() {
        assert_eq!(UART0_IN_USE, BOARD.uart0.is_present());
        assert_eq!(UART1_IN_USE, BOARD.uart1.is_present());
        assert_eq!(SPI0_IN_USE, BOARD.spi0.is_present());
        assert_eq!(SPI1_IN_USE, BOARD.spi1.is_present());
        assert_eq!(I2C_IN_USE, BOARD.i2c.is_present());
    }
}
