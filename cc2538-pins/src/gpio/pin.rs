//! Port and pin identifiers
//!
//! The CC2538 has four GPIO ports (A to D) of eight pins each. Every pin
//! exists twice in this module:
//! - at the value level, as a [`DynPinId`], for tables, logging and
//!   run-time lookups;
//! - at the type level, as a zero-sized type such as [`port_a::PA7`], so
//!   that peripheral pin constraints can be checked by the compiler.
//!
//! The two are tied together by [`TypeLevelPinId::ID`].

use core::fmt;

use crate::nvic::Interrupt;
use crate::typelevel::Sealed;

/// Number of pins in each GPIO port.
pub const PINS_PER_PORT: u8 = 8;

/// Value-level `enum` for the pin's port.
///
/// The discriminant is the port number used by the IOC and the GPIO driver
/// (`A` = 0 ... `D` = 3).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DynPortId {
    /// GPIO port A
    A = 0,
    /// GPIO port B
    B = 1,
    /// GPIO port C
    C = 2,
    /// GPIO port D
    D = 3,
}

impl DynPortId {
    /// Every port, in numbering order.
    pub const ALL: [DynPortId; 4] = [DynPortId::A, DynPortId::B, DynPortId::C, DynPortId::D];

    /// Port number as understood by the GPIO driver.
    #[inline]
    pub const fn num(self) -> u8 {
        self as u8
    }

    /// Look a port up by number.
    ///
    /// Returns `None` for anything outside `0..=3`.
    pub const fn from_num(num: u8) -> Option<Self> {
        match num {
            0 => Some(DynPortId::A),
            1 => Some(DynPortId::B),
            2 => Some(DynPortId::C),
            3 => Some(DynPortId::D),
            _ => None,
        }
    }

    /// The NVIC line shared by every pin of this port.
    pub const fn interrupt(self) -> Interrupt {
        match self {
            DynPortId::A => Interrupt::GpioA,
            DynPortId::B => Interrupt::GpioB,
            DynPortId::C => Interrupt::GpioC,
            DynPortId::D => Interrupt::GpioD,
        }
    }

    /// Port letter, as printed on schematics.
    pub const fn letter(self) -> char {
        match self {
            DynPortId::A => 'A',
            DynPortId::B => 'B',
            DynPortId::C => 'C',
            DynPortId::D => 'D',
        }
    }
}

impl fmt::Display for DynPortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Type-level `enum` for the pin's port.
pub trait PortId: Sealed {
    /// This port as a [`DynPortId`].
    const DYN: DynPortId;
}

macro_rules! port_ids {
    ($($port:ident),*) => {
        paste::paste! {
            $(
                #[doc = "Type-level `variant` of [`PortId`] for port " $port "."]
                #[derive(Debug)]
                pub enum [<Port $port>] {}
                impl Sealed for [<Port $port>] {}
                impl PortId for [<Port $port>] {
                    const DYN: DynPortId = DynPortId::$port;
                }
            )*
        }
    };
}
port_ids!(A, B, C, D);

/// Type-level `enum` for the pin Id (port + pin number).
pub trait PinId: Sealed {
    /// This pin as a `DynPinId`.
    fn as_dyn(&self) -> DynPinId;
}

/// Type-level pin Id with its value-level counterpart known at compile time.
///
/// Implemented by the 32 pin types in [`port_a`], [`port_b`], [`port_c`] and
/// [`port_d`] only.
pub trait TypeLevelPinId: PinId {
    /// Port the pin belongs to.
    type Port: PortId;

    /// Value-level Id of this pin.
    const ID: DynPinId;
}

/// Value-level representation for the pin (port + number).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DynPinId {
    /// Pin port.
    pub port: DynPortId,
    /// Pin number within the port.
    pub num: u8,
}

impl DynPinId {
    /// Build a pin Id, rejecting pin numbers the port does not have.
    pub const fn new(port: DynPortId, num: u8) -> Option<Self> {
        if num < PINS_PER_PORT {
            Some(DynPinId { port, num })
        } else {
            None
        }
    }

    /// Bit of this pin in its port's data and direction registers.
    ///
    /// `None` if `num` is past the last pin of the port, which only a
    /// hand-built `DynPinId` can be.
    #[inline]
    pub const fn mask(&self) -> Option<u8> {
        if self.num < PINS_PER_PORT {
            Some(1 << self.num)
        } else {
            None
        }
    }

    /// Flat pin index (`port * 8 + num`), the encoding used by the IOC
    /// input-select registers.
    ///
    /// `None` for the same pins [`DynPinId::mask`] rejects.
    #[inline]
    pub const fn index(&self) -> Option<u8> {
        if self.num < PINS_PER_PORT {
            Some(self.port.num() * PINS_PER_PORT + self.num)
        } else {
            None
        }
    }
}

impl PinId for DynPinId {
    #[inline]
    fn as_dyn(&self) -> DynPinId {
        *self
    }
}
impl Sealed for DynPinId {}

impl fmt::Display for DynPinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port, self.num)
    }
}

macro_rules! pin_ids {
    ($port:ident: $($num:literal),*) => {
        paste::paste! {
            $(
                #[doc = "Type level variant for the pin `P" $port $num "`."]
                #[derive(Debug)]
                pub struct [<P $port $num>] (pub(crate) ());
                impl Sealed for [<P $port $num>] {}
                impl PinId for [<P $port $num>] {
                    #[inline]
                    fn as_dyn(&self) -> DynPinId {
                        <Self as TypeLevelPinId>::ID
                    }
                }
                impl TypeLevelPinId for [<P $port $num>] {
                    type Port = [<Port $port>];

                    const ID: DynPinId = DynPinId {
                        port: DynPortId::$port,
                        num: $num,
                    };
                }
            )*
        }
    };
}

/// Pins of GPIO port A.
pub mod port_a {
    use super::{DynPinId, DynPortId, PinId, PortA, Sealed, TypeLevelPinId};
    pin_ids!(A: 0, 1, 2, 3, 4, 5, 6, 7);
}
/// Pins of GPIO port B.
pub mod port_b {
    use super::{DynPinId, DynPortId, PinId, PortB, Sealed, TypeLevelPinId};
    pin_ids!(B: 0, 1, 2, 3, 4, 5, 6, 7);
}
/// Pins of GPIO port C.
pub mod port_c {
    use super::{DynPinId, DynPortId, PinId, PortC, Sealed, TypeLevelPinId};
    pin_ids!(C: 0, 1, 2, 3, 4, 5, 6, 7);
}
/// Pins of GPIO port D.
pub mod port_d {
    use super::{DynPinId, DynPortId, PinId, PortD, Sealed, TypeLevelPinId};
    pin_ids!(D: 0, 1, 2, 3, 4, 5, 6, 7);
}
