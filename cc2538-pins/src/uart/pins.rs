use crate::board::PinAssignment;
use crate::gpio::TypeLevelPinId;
use crate::typelevel::{OptionT, OptionTNone, OptionTSome, Sealed};

use super::{Uart0, Uart1, UartDevice, UartPins};

/// Indicates a valid TX pin for UART0 or UART1
pub trait ValidTxPin<UART: UartDevice>: TypeLevelPinId {}
/// Indicates a valid RX pin for UART0 or UART1
pub trait ValidRxPin<UART: UartDevice>: TypeLevelPinId {}
/// Indicates a valid CTS pin for UART1
pub trait ValidCtsPin<UART: UartDevice>: TypeLevelPinId {}
/// Indicates a valid RTS pin for UART1
pub trait ValidRtsPin<UART: UartDevice>: TypeLevelPinId {}

// The IOC can route either UART to any port pin. Lines a UART does not have
// get no implementation at all.
macro_rules! impl_valid_uart {
    ($($uart:ident: [$($line:ident),*]),*) => {
        $($(
            impl<P: TypeLevelPinId> $line<$uart> for P {}
        )*)*
    };
}

impl_valid_uart!(
    Uart0: [ValidTxPin, ValidRxPin],
    Uart1: [ValidTxPin, ValidRxPin, ValidCtsPin, ValidRtsPin]
);

/// Indicates a valid optional CTS pin for UART0 or UART1
pub trait ValidOptionCts<UART: UartDevice>: OptionT {
    #[allow(missing_docs)]
    const PIN: Option<PinAssignment>;
}
impl<U: UartDevice> ValidOptionCts<U> for OptionTNone {
    const PIN: Option<PinAssignment> = None;
}
impl<U: UartDevice, T: ValidCtsPin<U>> ValidOptionCts<U> for OptionTSome<T> {
    const PIN: Option<PinAssignment> = Some(PinAssignment::of::<T>());
}

/// Indicates a valid optional RTS pin for UART0 or UART1
pub trait ValidOptionRts<UART: UartDevice>: OptionT {
    #[allow(missing_docs)]
    const PIN: Option<PinAssignment>;
}
impl<U: UartDevice> ValidOptionRts<U> for OptionTNone {
    const PIN: Option<PinAssignment> = None;
}
impl<U: UartDevice, T: ValidRtsPin<U>> ValidOptionRts<U> for OptionTSome<T> {
    const PIN: Option<PinAssignment> = Some(PinAssignment::of::<T>());
}

/// Declares a valid UART pinout.
///
/// Implemented for `(TX, RX)` and `(TX, RX, CTS, RTS)` tuples of pin types.
pub trait ValidUartPinout<UART: UartDevice>: Sealed {
    #[allow(missing_docs)]
    type Tx: ValidTxPin<UART>;
    #[allow(missing_docs)]
    type Rx: ValidRxPin<UART>;
    #[allow(missing_docs)]
    type Cts: ValidOptionCts<UART>;
    #[allow(missing_docs)]
    type Rts: ValidOptionRts<UART>;

    /// Value-level form of this pinout.
    const PINS: UartPins = UartPins {
        rx: PinAssignment::of::<Self::Rx>(),
        tx: PinAssignment::of::<Self::Tx>(),
        cts: <Self::Cts as ValidOptionCts<UART>>::PIN,
        rts: <Self::Rts as ValidOptionRts<UART>>::PIN,
    };
}

impl<UART, TX, RX> ValidUartPinout<UART> for (TX, RX)
where
    UART: UartDevice,
    TX: ValidTxPin<UART>,
    RX: ValidRxPin<UART>,
{
    type Tx = TX;
    type Rx = RX;
    type Cts = OptionTNone;
    type Rts = OptionTNone;
}

impl<UART, TX, RX, CTS, RTS> ValidUartPinout<UART> for (TX, RX, CTS, RTS)
where
    UART: UartDevice,
    TX: ValidTxPin<UART>,
    RX: ValidRxPin<UART>,
    CTS: ValidCtsPin<UART>,
    RTS: ValidRtsPin<UART>,
{
    type Tx = TX;
    type Rx = RX;
    type Cts = OptionTSome<CTS>;
    type Rts = OptionTSome<RTS>;
}
