use crate::board::PinAssignment;
use crate::gpio::TypeLevelPinId;
use crate::typelevel::{OptionT, OptionTNone, OptionTSome, Sealed};

use super::{Spi0, Spi1, SpiDevice, SpiPins};

macro_rules! pin_validation {
    ($($p:ident),*) => {
        paste::paste!{
            $(
                #[doc = "Indicates a valid " $p " pin for SPI0 or SPI1"]
                pub trait [<ValidPin $p>]<SPI: SpiDevice>: TypeLevelPinId {}
            )*
        }
    };
}
pin_validation!(Tx, Rx, Clk);

/// Indicates a valid optional Rx pin for SPI0 or SPI1
pub trait ValidOptionRx<U>: OptionT {
    #[allow(missing_docs)]
    const PIN: Option<PinAssignment>;
}

impl<U: SpiDevice> ValidOptionRx<U> for OptionTNone {
    const PIN: Option<PinAssignment> = None;
}
impl<U, T> ValidOptionRx<U> for OptionTSome<T>
where
    U: SpiDevice,
    T: ValidPinRx<U>,
{
    const PIN: Option<PinAssignment> = Some(PinAssignment::of::<T>());
}

// Both SSI blocks take any port pin through the IOC.
macro_rules! impl_valid_spi {
    ($($spi:ident),*) => {
        $(
            impl<P: TypeLevelPinId> ValidPinRx<$spi> for P {}
            impl<P: TypeLevelPinId> ValidPinTx<$spi> for P {}
            impl<P: TypeLevelPinId> ValidPinClk<$spi> for P {}
        )*
    };
}
impl_valid_spi!(Spi0, Spi1);

/// Declares a valid SPI pinout.
///
/// Implemented for `(TX, CLK)` and `(TX, RX, CLK)` tuples of pin types.
pub trait ValidSpiPinout<U: SpiDevice>: Sealed {
    #[allow(missing_docs)]
    type Rx: ValidOptionRx<U>;
    #[allow(missing_docs)]
    type Clk: ValidPinClk<U>;
    #[allow(missing_docs)]
    type Tx: ValidPinTx<U>;

    /// Value-level form of this pinout.
    const PINS: SpiPins = SpiPins {
        clk: PinAssignment::of::<Self::Clk>(),
        tx: PinAssignment::of::<Self::Tx>(),
        rx: <Self::Rx as ValidOptionRx<U>>::PIN,
    };
}

impl<Spi, Tx, Clk> ValidSpiPinout<Spi> for (Tx, Clk)
where
    Spi: SpiDevice,
    Tx: ValidPinTx<Spi>,
    Clk: ValidPinClk<Spi>,
{
    type Rx = OptionTNone;
    type Clk = Clk;
    type Tx = Tx;
}

impl<Spi, Tx, Rx, Clk> ValidSpiPinout<Spi> for (Tx, Rx, Clk)
where
    Spi: SpiDevice,
    Tx: ValidPinTx<Spi>,
    Rx: ValidPinRx<Spi>,
    Clk: ValidPinClk<Spi>,
{
    type Rx = OptionTSome<Rx>;
    type Clk = Clk;
    type Tx = Tx;
}
