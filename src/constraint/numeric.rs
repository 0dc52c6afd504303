//! Numeric constraints
//!
//! Canonical sign, parity and power-of-two constraints. They are `const fn`s,
//! so every canonical constraint is also available as a constant.

use std::ops::{BitAnd, Sub};

use super::primitives::Func;

/// Numbers with a zero, ordered.
pub trait Numeric: Copy + PartialOrd + Send + Sync + 'static {
    /// The additive identity.
    const ZERO: Self;
}

/// Integer numbers.
pub trait Integer: Numeric + BitAnd<Output = Self> + Sub<Output = Self> {
    /// The multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_integer {
    ($($ty:ty),+) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0;
            }

            impl Integer for $ty {
                const ONE: Self = 1;
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numeric for f32 {
    const ZERO: Self = 0.0;
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
}

/// A canonical constraint over numbers of type `T`.
pub type NumericConstraint<T> = Func<fn(&T) -> bool>;

/// Returns `true` if `value` is greater than zero.
pub fn is_positive<T: Numeric>(value: &T) -> bool {
    *value > T::ZERO
}

/// Returns `true` if `value` is less than zero.
pub fn is_negative<T: Numeric>(value: &T) -> bool {
    *value < T::ZERO
}

/// Returns `true` if the lowest bit of `value` is clear.
pub fn is_even<T: Integer>(value: &T) -> bool {
    (*value & T::ONE) == T::ZERO
}

/// Returns `true` if the lowest bit of `value` is set.
pub fn is_odd<T: Integer>(value: &T) -> bool {
    (*value & T::ONE) == T::ONE
}

/// Returns `true` if `value` is strictly positive with a single bit set.
pub fn is_power_of_two<T: Integer>(value: &T) -> bool {
    *value > T::ZERO && (*value & (*value - T::ONE)) == T::ZERO
}

/// Create a constraint for values greater than zero.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// assert_eq!(positive::<i32>().description(), "positive");
/// assert!(positive::<f64>().is_valid(&0.5));
/// assert!(!positive::<i32>().is_valid(&0));
/// ```
pub const fn positive<T: Numeric>() -> NumericConstraint<T> {
    Func::from_static("positive", is_positive::<T> as fn(&T) -> bool)
}

/// Create a constraint for values less than zero.
pub const fn negative<T: Numeric>() -> NumericConstraint<T> {
    Func::from_static("negative", is_negative::<T> as fn(&T) -> bool)
}

/// Create a constraint for even integers.
pub const fn even<T: Integer>() -> NumericConstraint<T> {
    Func::from_static("even", is_even::<T> as fn(&T) -> bool)
}

/// Create a constraint for odd integers.
pub const fn odd<T: Integer>() -> NumericConstraint<T> {
    Func::from_static("odd", is_odd::<T> as fn(&T) -> bool)
}

/// Create a constraint for powers of two.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = power_of_two::<i64>();
/// assert!(!c.is_valid(&0));
/// assert!(c.is_valid(&1));
/// assert!(c.is_valid(&4));
/// assert!(!c.is_valid(&-2));
/// ```
pub const fn power_of_two<T: Integer>() -> NumericConstraint<T> {
    Func::from_static("power of two", is_power_of_two::<T> as fn(&T) -> bool)
}

macro_rules! canonical {
    ($($name:ident = $ctor:ident::<$ty:ty>;)+) => {
        $(
            #[doc = concat!("`", stringify!($ctor), "` over `", stringify!($ty), "`.")]
            pub const $name: NumericConstraint<$ty> = $ctor::<$ty>();
        )+
    };
}

canonical! {
    I8_POSITIVE = positive::<i8>;
    I16_POSITIVE = positive::<i16>;
    I32_POSITIVE = positive::<i32>;
    I64_POSITIVE = positive::<i64>;
    ISIZE_POSITIVE = positive::<isize>;
    I8_NEGATIVE = negative::<i8>;
    I16_NEGATIVE = negative::<i16>;
    I32_NEGATIVE = negative::<i32>;
    I64_NEGATIVE = negative::<i64>;
    ISIZE_NEGATIVE = negative::<isize>;
    I8_EVEN = even::<i8>;
    I16_EVEN = even::<i16>;
    I32_EVEN = even::<i32>;
    I64_EVEN = even::<i64>;
    ISIZE_EVEN = even::<isize>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{Constraint, Describe};

    #[test]
    fn test_power_of_two() {
        let c = power_of_two::<i64>();
        assert_eq!(c.description(), "power of two");
        assert!(!c.is_valid(&0));
        assert!(c.is_valid(&1));
        assert!(c.is_valid(&2));
        assert!(!c.is_valid(&3));
        assert!(c.is_valid(&4));
        assert!(!c.is_valid(&-2));
        assert!(!c.is_valid(&i64::MIN));
        assert!(c.is_valid(&(1 << 62)));
        assert!(power_of_two::<u8>().is_valid(&128));
    }

    #[test]
    fn test_parity() {
        assert!(even::<i32>().is_valid(&0));
        assert!(even::<i32>().is_valid(&-4));
        assert!(!even::<i32>().is_valid(&-3));
        assert!(odd::<i32>().is_valid(&-3));
        assert!(odd::<u64>().is_valid(&7));
        assert!(!odd::<u64>().is_valid(&8));
        assert_eq!(odd::<u64>().description(), "odd");
    }

    #[test]
    fn test_sign() {
        assert!(positive::<i64>().is_valid(&1));
        assert!(!positive::<i64>().is_valid(&0));
        assert!(negative::<i64>().is_valid(&-1));
        assert!(!negative::<i64>().is_valid(&0));
        assert!(negative::<f32>().is_valid(&-0.1));
        assert_eq!(negative::<f32>().description(), "negative");
    }

    #[test]
    fn test_canonical_constants() {
        assert!(I8_POSITIVE.is_valid(&1));
        assert!(!I64_NEGATIVE.is_valid(&1));
        assert!(ISIZE_EVEN.is_valid(&2));
        assert_eq!(I32_EVEN.description(), "even");
    }
}
