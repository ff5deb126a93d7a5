//! Inter-Integrated Circuit (I2C) bus
//!
//! The CC2538 has a single I2C block. SDA and SCL can be routed to any port
//! pin.

use crate::board::PinAssignment;
use crate::gpio::TypeLevelPinId;
use crate::nvic::Interrupt;
use crate::typelevel::Sealed;

/// NVIC line of the I2C block.
pub const INTERRUPT: Interrupt = Interrupt::I2c;

/// Indicates a valid SDA pin.
pub trait ValidSdaPin: TypeLevelPinId {}
/// Indicates a valid SCL pin.
pub trait ValidSclPin: TypeLevelPinId {}

impl<P: TypeLevelPinId> ValidSdaPin for P {}
impl<P: TypeLevelPinId> ValidSclPin for P {}

/// Declares a valid I2C pinout, as a `(SDA, SCL)` tuple of pin types.
pub trait ValidI2cPinout: Sealed {
    #[allow(missing_docs)]
    type Sda: ValidSdaPin;
    #[allow(missing_docs)]
    type Scl: ValidSclPin;

    /// Value-level form of this pinout.
    const PINS: I2cPins = I2cPins {
        sda: PinAssignment::of::<Self::Sda>(),
        scl: PinAssignment::of::<Self::Scl>(),
    };
}

impl<SDA: ValidSdaPin, SCL: ValidSclPin> ValidI2cPinout for (SDA, SCL) {
    type Sda = SDA;
    type Scl = SCL;
}

/// Where the I2C lines are wired.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct I2cPins {
    /// Data line
    pub sda: PinAssignment,
    /// Clock line
    pub scl: PinAssignment,
}

/// Compile-time check that `P` is a valid I2C pinout.
pub const fn check_pinout<P: ValidI2cPinout>() {}
