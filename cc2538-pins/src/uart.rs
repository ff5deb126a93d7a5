//! Universal Asynchronous Receiver Transmitter (UART)
//!
//! The CC2538 has two UARTs. Both can use any port pin for RX and TX, but
//! only UART1 has hardware flow control (CTS/RTS).
//!
//! A board checks its pinout at compile time:
//!
//! ```
//! use cc2538_pins::gpio::{port_a::{PA2, PA3}, port_b::PB0, port_d::PD3};
//! use cc2538_pins::uart::{check_pinout, Uart1};
//!
//! const _: () = check_pinout::<Uart1, (PA3, PA2, PB0, PD3)>();
//! ```
//!
//! Asking for flow control on UART0 does not compile:
//!
//! ```compile_fail
//! use cc2538_pins::gpio::{port_a::{PA0, PA1}, port_b::PB0, port_d::PD3};
//! use cc2538_pins::uart::{check_pinout, Uart0};
//!
//! const _: () = check_pinout::<Uart0, (PA1, PA0, PB0, PD3)>();
//! ```

use crate::board::PinAssignment;
use crate::nvic::Interrupt;
use crate::typelevel::Sealed;

mod pins;
pub use self::pins::*;

/// Trait to handle both underlying devices (UART0 & UART1)
pub trait UartDevice: Sealed + 'static {
    /// NVIC line of the Uart.
    const INTERRUPT: Interrupt;
}

/// Type-level UART0 instance.
pub enum Uart0 {}
impl Sealed for Uart0 {}
impl UartDevice for Uart0 {
    const INTERRUPT: Interrupt = Interrupt::Uart0;
}

/// Type-level UART1 instance.
pub enum Uart1 {}
impl Sealed for Uart1 {}
impl UartDevice for Uart1 {
    const INTERRUPT: Interrupt = Interrupt::Uart1;
}

/// Where the lines of one UART are wired.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UartPins {
    /// Receive line
    pub rx: PinAssignment,
    /// Transmit line
    pub tx: PinAssignment,
    /// Clear-to-send, if flow control is wired
    pub cts: Option<PinAssignment>,
    /// Request-to-send, if flow control is wired
    pub rts: Option<PinAssignment>,
}

impl UartPins {
    /// `true` if both flow-control lines are wired.
    pub const fn has_flow_control(&self) -> bool {
        self.cts.is_some() && self.rts.is_some()
    }
}

/// Compile-time check that `P` is a valid pinout for `U`.
///
/// Evaluate it in a `const` item; the call has no effect at run time.
pub const fn check_pinout<U: UartDevice, P: ValidUartPinout<U>>() {}
