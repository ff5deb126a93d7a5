//! Module supporting type-level programming
//!
//! The pin tables in this crate are checked by the compiler rather than at
//! run time: every physical pin is its own type, and "pin X may carry
//! signal Y of peripheral Z" is a trait implemented only for the valid
//! combinations. The items here are the small amount of glue that pattern
//! needs. See the
//! [atsamd-hal documentation](https://docs.rs/atsamd-hal/0.15.1/atsamd_hal/typelevel/index.html)
//! for a longer introduction to the technique.

mod private {
    /// Super trait used to mark traits with an exhaustive set of
    /// implementations
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

impl<A: Sealed, B: Sealed> Sealed for (A, B) {}
impl<A: Sealed, B: Sealed, C: Sealed> Sealed for (A, B, C) {}
impl<A: Sealed, B: Sealed, C: Sealed, D: Sealed> Sealed for (A, B, C, D) {}

// =====================
// Type level option
// =====================

/// Type-level `enum` for Option.
pub trait OptionT: Sealed {
    /// Is this Some or None ?
    const IS_SOME: bool;
}

/// Type-level variant for `OptionT`
pub struct OptionTNone;
impl Sealed for OptionTNone {}
impl OptionT for OptionTNone {
    const IS_SOME: bool = false;
}

/// Type-level variant for `OptionT`
pub struct OptionTSome<T>(pub T);
impl<T> Sealed for OptionTSome<T> {}
impl<T> OptionT for OptionTSome<T> {
    const IS_SOME: bool = true;
}
