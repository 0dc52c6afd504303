//! Length constraints for sequence-like values
//!
//! Bounds are validated when the constraint is built: a negative (or
//! otherwise unrepresentable) bound, or a range whose minimum exceeds its
//! maximum, is rejected with a [`ConfigError`] instead of producing a
//! constraint.

use std::fmt;

use super::trait_def::{Constraint, Describe};
use super::error::ConfigError;

/// Values that have a length.
///
/// Text is measured in bytes, slices and vectors in elements.
pub trait Measure {
    /// Returns the length of the value.
    fn measure(&self) -> usize;
}

impl Measure for str {
    #[inline]
    fn measure(&self) -> usize {
        self.len()
    }
}

impl Measure for String {
    #[inline]
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measure for [T] {
    #[inline]
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measure for Vec<T> {
    #[inline]
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Measure for [T; N] {
    #[inline]
    fn measure(&self) -> usize {
        N
    }
}

/// Constraint on the length of a value. An absent bound is open-ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
}

impl Length {
    /// Returns the minimum length, if bounded below.
    pub fn min(&self) -> Option<usize> {
        self.min
    }

    /// Returns the maximum length, if bounded above.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    #[cfg(feature = "proptest")]
    pub(crate) fn from_bounds(min: Option<usize>, max: Option<usize>) -> Self {
        Length { min, max }
    }
}

impl Describe for Length {
    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => format!("length {}", min),
            (Some(min), Some(max)) => format!("length between {} and {}", min, max),
            (Some(min), None) => format!("min length {}", min),
            (None, Some(max)) => format!("max length {}", max),
            (None, None) => String::from("any length"),
        }
    }
}

impl<V: Measure + ?Sized> Constraint<V> for Length {
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        let len = value.measure();
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}

fn bound<N>(name: &'static str, value: N) -> Result<usize, ConfigError>
where
    N: TryInto<usize> + fmt::Display + Copy,
{
    value.try_into().map_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::debug!(bound = name, value = %value, "rejected length bound");
        ConfigError::BoundOutOfRange {
            bound: name,
            value: value.to_string(),
        }
    })
}

/// Create a constraint requiring exactly `len` elements.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = length(3)?;
/// assert_eq!(c.description(), "length 3");
/// assert!(c.is_valid("abc"));
/// assert!(!c.is_valid("ab"));
/// assert!(length(-1).is_err());
/// # Ok::<(), ConfigError>(())
/// ```
pub fn length<N>(len: N) -> Result<Length, ConfigError>
where
    N: TryInto<usize> + fmt::Display + Copy,
{
    let len = bound("length", len)?;
    Ok(Length {
        min: Some(len),
        max: Some(len),
    })
}

/// Create a constraint requiring at least `min` elements.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = min_length(5)?;
/// assert_eq!(c.description(), "min length 5");
/// assert!(c.is_valid(&vec![1, 2, 3, 4, 5]));
/// assert!(!c.is_valid("four"));
/// # Ok::<(), ConfigError>(())
/// ```
pub fn min_length<N>(min: N) -> Result<Length, ConfigError>
where
    N: TryInto<usize> + fmt::Display + Copy,
{
    let min = bound("min length", min)?;
    Ok(Length {
        min: Some(min),
        max: None,
    })
}

/// Create a constraint requiring at most `max` elements.
pub fn max_length<N>(max: N) -> Result<Length, ConfigError>
where
    N: TryInto<usize> + fmt::Display + Copy,
{
    let max = bound("max length", max)?;
    Ok(Length {
        min: None,
        max: Some(max),
    })
}

/// Create a constraint requiring between `min` and `max` elements
/// (inclusive).
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = length_between(6, 32)?;
/// assert_eq!(c.description(), "length between 6 and 32");
/// assert!(c.is_valid("johndoe"));
/// assert!(length_between(5, 3).is_err());
/// # Ok::<(), ConfigError>(())
/// ```
pub fn length_between<N>(min: N, max: N) -> Result<Length, ConfigError>
where
    N: TryInto<usize> + fmt::Display + Copy,
{
    let min = bound("min length", min)?;
    let max = bound("max length", max)?;
    if min > max {
        #[cfg(feature = "tracing")]
        tracing::debug!(min, max, "rejected inverted length bounds");
        return Err(ConfigError::InvertedBounds { min, max });
    }
    Ok(Length {
        min: Some(min),
        max: Some(max),
    })
}
